//! Error types for the discovery CLI.

use gvdiscover_core::DiscoverError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const NO_DEVICES: i32 = 3;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Discovery error: {0}")]
    Discover(#[from] DiscoverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No devices found")]
    NoDevicesFound,
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Discover(_) => exit_codes::NETWORK_ERROR,
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
            CliError::NoDevicesFound => exit_codes::NO_DEVICES,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_devices_exit_code() {
        assert_eq!(CliError::NoDevicesFound.exit_code(), exit_codes::NO_DEVICES);
    }

    #[test]
    fn test_discover_error_maps_to_network_exit_code() {
        let err: CliError = DiscoverError::NoInterfaces.into();
        assert_eq!(err.exit_code(), exit_codes::NETWORK_ERROR);
        assert!(format!("{}", err).contains("no broadcast-capable"));
    }
}
