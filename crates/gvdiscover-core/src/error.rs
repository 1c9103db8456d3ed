//! Error types for the discovery engine.

use std::net::Ipv4Addr;

use thiserror::Error;

/// Error type for discovery operations.
///
/// A wholly negative discovery (no device answered on any interface) is
/// not an error; it is reported through the `found_any` flag of
/// [`crate::Discoverer::get_response`].
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("failed to enumerate network interfaces: {0}")]
    Enumerate(#[source] std::io::Error),

    #[error("no broadcast-capable network interface found")]
    NoInterfaces,

    #[error("failed to bind discovery socket on {address}: {source}")]
    Bind {
        address: Ipv4Addr,
        #[source]
        source: std::io::Error,
    },

    #[error("send failed on interface {address}: {source}")]
    Send {
        address: Ipv4Addr,
        #[source]
        source: std::io::Error,
    },

    #[error("receive failed on interface {address}: {source}")]
    Receive {
        address: Ipv4Addr,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, DiscoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_interfaces_display() {
        let err = DiscoverError::NoInterfaces;
        assert_eq!(
            format!("{}", err),
            "no broadcast-capable network interface found"
        );
    }

    #[test]
    fn test_send_error_carries_interface() {
        let err = DiscoverError::Send {
            address: Ipv4Addr::new(192, 168, 1, 10),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(format!("{}", err).contains("192.168.1.10"));
    }
}
