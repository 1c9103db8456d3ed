//! UDP device discovery.
//!
//! One broadcast socket per local interface, a sequential broadcast of the
//! discovery command, and a concurrent time-bounded collection of
//! acknowledgements.

pub mod service;
pub mod socket;

pub use service::Discoverer;
pub use socket::DiscoverySocket;
