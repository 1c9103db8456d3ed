//! Acknowledgement datagram validation and payload extraction.

/// Size of the acknowledgement header preceding the payload.
pub const ACK_HEADER_LEN: usize = 8;

/// Command-category bytes identifying a discovery acknowledgement.
const ACK_MAGIC: [u8; 4] = [0x00, 0x00, 0x00, 0x03];

/// Status/flags marker expected at bytes 6..8.
const ACK_STATUS: [u8; 2] = [0x00, 0x01];

/// Validate a received datagram and extract its payload.
///
/// Returns `None` for anything that is not a well-formed discovery
/// acknowledgement: too short, wrong command category, wrong status marker,
/// or a declared payload length exceeding the bytes actually received
/// (truncation or corruption). Callers treat `None` as noise and retry.
pub fn parse_ack(datagram: &[u8]) -> Option<&[u8]> {
    if datagram.len() < ACK_HEADER_LEN {
        return None;
    }

    if datagram[0..4] != ACK_MAGIC || datagram[6..8] != ACK_STATUS {
        return None;
    }

    let len = u16::from_be_bytes([datagram[4], datagram[5]]) as usize;
    if datagram.len() < ACK_HEADER_LEN + len {
        return None;
    }

    Some(&datagram[ACK_HEADER_LEN..ACK_HEADER_LEN + len])
}
