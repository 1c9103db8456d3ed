//! Discovery engine for GigE-Vision-style network devices.
//!
//! Devices are found by broadcasting a fixed discovery command on every
//! broadcast-capable interface and collecting acknowledgement datagrams
//! that carry the device's identity block. The [`Discoverer`] owns one UDP
//! socket per interface and runs an independent, time-bounded receive loop
//! on each of them.

pub mod device;
pub mod discovery;
pub mod error;
pub mod protocol;

pub use device::DeviceInfo;
pub use discovery::{Discoverer, DiscoverySocket};
pub use error::{DiscoverError, Result};
