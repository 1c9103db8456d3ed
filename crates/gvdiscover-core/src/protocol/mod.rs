//! Wire protocol for discovery requests and acknowledgements.

pub mod ack;

pub use ack::parse_ack;

/// Well-known UDP control port devices listen on.
pub const GVCP_PORT: u16 = 3956;

/// Fixed discovery command datagram, broadcast as-is on every interface.
pub const DISCOVERY_CMD: [u8; 8] = [0x42, 0x11, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01];

/// Receive buffer capacity, sized to the largest expected acknowledgement.
pub const MAX_ACK_SIZE: usize = 600;
