//! Device identity decoded from an acknowledgement payload.

use std::net::Ipv4Addr;

use serde::Serialize;

// Byte offsets of the identity fields inside the acknowledgement payload.
// The block is big-endian throughout; strings are NUL-padded.
const OFF_VERSION_MAJOR: usize = 0;
const OFF_VERSION_MINOR: usize = 2;
const OFF_MAC: usize = 10;
const OFF_IP: usize = 36;
const OFF_SUBNET: usize = 52;
const OFF_GATEWAY: usize = 68;
const OFF_MANUFACTURER_NAME: usize = 72;
const OFF_MODEL_NAME: usize = 104;
const OFF_DEVICE_VERSION: usize = 136;
const OFF_MANUFACTURER_INFO: usize = 168;
const OFF_SERIAL_NUMBER: usize = 216;
const OFF_USER_NAME: usize = 232;

const LEN_NAME: usize = 32;
const LEN_INFO: usize = 48;
const LEN_SERIAL: usize = 16;
const LEN_USER_NAME: usize = 16;

/// Identity of one discovered device.
///
/// Starts empty/invalid; populated at most once from the payload of an
/// accepted acknowledgement. Fields that fall beyond the received payload
/// decode to their empty defaults; validity only reflects whether an
/// accepted payload was ingested at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    #[serde(skip)]
    valid: bool,
    major: u16,
    minor: u16,
    #[serde(serialize_with = "ser_mac")]
    mac: [u8; 6],
    ip: Ipv4Addr,
    subnet_mask: Ipv4Addr,
    gateway: Ipv4Addr,
    manufacturer_name: String,
    model_name: String,
    device_version: String,
    manufacturer_info: String,
    serial_number: String,
    user_name: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceInfo {
    /// Create an empty, invalid record.
    pub fn new() -> Self {
        Self {
            valid: false,
            major: 0,
            minor: 0,
            mac: [0; 6],
            ip: Ipv4Addr::UNSPECIFIED,
            subnet_mask: Ipv4Addr::UNSPECIFIED,
            gateway: Ipv4Addr::UNSPECIFIED,
            manufacturer_name: String::new(),
            model_name: String::new(),
            device_version: String::new(),
            manufacturer_info: String::new(),
            serial_number: String::new(),
            user_name: String::new(),
        }
    }

    /// Reset to the empty, invalid state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Populate from the payload of an accepted acknowledgement.
    pub fn set(&mut self, payload: &[u8]) {
        self.clear();

        self.major = be_u16_at(payload, OFF_VERSION_MAJOR);
        self.minor = be_u16_at(payload, OFF_VERSION_MINOR);
        self.mac = mac_at(payload, OFF_MAC);
        self.ip = ipv4_at(payload, OFF_IP);
        self.subnet_mask = ipv4_at(payload, OFF_SUBNET);
        self.gateway = ipv4_at(payload, OFF_GATEWAY);
        self.manufacturer_name = string_at(payload, OFF_MANUFACTURER_NAME, LEN_NAME);
        self.model_name = string_at(payload, OFF_MODEL_NAME, LEN_NAME);
        self.device_version = string_at(payload, OFF_DEVICE_VERSION, LEN_NAME);
        self.manufacturer_info = string_at(payload, OFF_MANUFACTURER_INFO, LEN_INFO);
        self.serial_number = string_at(payload, OFF_SERIAL_NUMBER, LEN_SERIAL);
        self.user_name = string_at(payload, OFF_USER_NAME, LEN_USER_NAME);

        self.valid = true;
    }

    /// Whether this record was populated from an accepted acknowledgement.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Protocol version major number
    pub fn major(&self) -> u16 {
        self.major
    }

    /// Protocol version minor number
    pub fn minor(&self) -> u16 {
        self.minor
    }

    /// Device MAC address
    pub fn mac(&self) -> [u8; 6] {
        self.mac
    }

    /// MAC address formatted as `aa:bb:cc:dd:ee:ff`
    pub fn mac_string(&self) -> String {
        format_mac(&self.mac)
    }

    /// Current IP address of the device
    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    /// Current subnet mask of the device
    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    /// Default gateway of the device
    pub fn gateway(&self) -> Ipv4Addr {
        self.gateway
    }

    pub fn manufacturer_name(&self) -> &str {
        &self.manufacturer_name
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Firmware/device version string
    pub fn device_version(&self) -> &str {
        &self.device_version
    }

    pub fn manufacturer_info(&self) -> &str {
        &self.manufacturer_info
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// User-defined device name
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

fn format_mac(mac: &[u8; 6]) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    )
}

fn ser_mac<S>(mac: &[u8; 6], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_mac(mac))
}

fn be_u16_at(raw: &[u8], offset: usize) -> u16 {
    match raw.get(offset..offset + 2) {
        Some(bytes) => u16::from_be_bytes([bytes[0], bytes[1]]),
        None => 0,
    }
}

fn mac_at(raw: &[u8], offset: usize) -> [u8; 6] {
    match raw.get(offset..offset + 6) {
        Some(bytes) => {
            let mut mac = [0u8; 6];
            mac.copy_from_slice(bytes);
            mac
        }
        None => [0; 6],
    }
}

fn ipv4_at(raw: &[u8], offset: usize) -> Ipv4Addr {
    match raw.get(offset..offset + 4) {
        Some(bytes) => Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]),
        None => Ipv4Addr::UNSPECIFIED,
    }
}

/// Extract a NUL-padded string field, trimming at the first NUL.
fn string_at(raw: &[u8], offset: usize, len: usize) -> String {
    match raw.get(offset..offset + len) {
        Some(bytes) => {
            let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
            String::from_utf8_lossy(&bytes[..end]).into_owned()
        }
        None => String::new(),
    }
}

/// Build a full 248-byte identity payload with recognizable fields.
///
/// Shared with the engine tests, which need realistic acknowledgements.
#[cfg(test)]
pub(crate) fn make_payload(serial: &str) -> Vec<u8> {
    let mut payload = vec![0u8; 248];
    payload[OFF_VERSION_MAJOR..OFF_VERSION_MAJOR + 2].copy_from_slice(&1u16.to_be_bytes());
    payload[OFF_VERSION_MINOR..OFF_VERSION_MINOR + 2].copy_from_slice(&2u16.to_be_bytes());
    payload[OFF_MAC..OFF_MAC + 6].copy_from_slice(&[0x00, 0x14, 0x2D, 0xAA, 0xBB, 0xCC]);
    payload[OFF_IP..OFF_IP + 4].copy_from_slice(&[192, 168, 0, 42]);
    payload[OFF_SUBNET..OFF_SUBNET + 4].copy_from_slice(&[255, 255, 255, 0]);
    payload[OFF_GATEWAY..OFF_GATEWAY + 4].copy_from_slice(&[192, 168, 0, 1]);
    payload[OFF_MANUFACTURER_NAME..OFF_MANUFACTURER_NAME + 4].copy_from_slice(b"Acme");
    payload[OFF_MODEL_NAME..OFF_MODEL_NAME + 6].copy_from_slice(b"Cam-10");
    payload[OFF_DEVICE_VERSION..OFF_DEVICE_VERSION + 5].copy_from_slice(b"1.2.3");
    payload[OFF_SERIAL_NUMBER..OFF_SERIAL_NUMBER + serial.len()]
        .copy_from_slice(serial.as_bytes());
    payload[OFF_USER_NAME..OFF_USER_NAME + 4].copy_from_slice(b"lab1");
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_invalid() {
        let info = DeviceInfo::new();
        assert!(!info.is_valid());
        assert_eq!(info.serial_number(), "");
    }

    #[test]
    fn test_set_decodes_fields() {
        let mut info = DeviceInfo::new();
        info.set(&make_payload("SN0001"));

        assert!(info.is_valid());
        assert_eq!(info.major(), 1);
        assert_eq!(info.minor(), 2);
        assert_eq!(info.mac_string(), "00:14:2d:aa:bb:cc");
        assert_eq!(info.ip(), Ipv4Addr::new(192, 168, 0, 42));
        assert_eq!(info.subnet_mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(info.gateway(), Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(info.manufacturer_name(), "Acme");
        assert_eq!(info.model_name(), "Cam-10");
        assert_eq!(info.device_version(), "1.2.3");
        assert_eq!(info.serial_number(), "SN0001");
        assert_eq!(info.user_name(), "lab1");
    }

    #[test]
    fn test_set_short_payload_is_valid_with_defaults() {
        // A device answering with a shorter identity block is still a
        // discovered device; missing fields stay empty.
        let mut info = DeviceInfo::new();
        info.set(&[0x00, 0x01, 0x00, 0x00]);

        assert!(info.is_valid());
        assert_eq!(info.major(), 1);
        assert_eq!(info.ip(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(info.model_name(), "");
    }

    #[test]
    fn test_clear_resets_validity() {
        let mut info = DeviceInfo::new();
        info.set(&make_payload("SN0002"));
        info.clear();

        assert!(!info.is_valid());
        assert_eq!(info, DeviceInfo::new());
    }

    #[test]
    fn test_serialize_mac_as_string() {
        let mut info = DeviceInfo::new();
        info.set(&make_payload("SN0003"));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["mac"], "00:14:2d:aa:bb:cc");
        assert_eq!(json["serial_number"], "SN0003");
        assert!(json.get("valid").is_none());
    }
}
