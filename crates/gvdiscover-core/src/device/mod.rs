//! Device identity records built from discovery acknowledgements.

pub mod info;

pub use info::DeviceInfo;
