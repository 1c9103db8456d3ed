//! CLI-facing result types.

use std::net::Ipv4Addr;

use gvdiscover_core::DeviceInfo;
use serde::Serialize;

/// One discovered device, flattened for display.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceRow {
    /// Local interface the answer arrived on
    pub interface: String,
    pub model: String,
    pub serial: String,
    /// Device's current IP address
    pub ip: String,
    pub mac: String,
    /// Firmware/device version string
    pub firmware: String,
    /// User-defined device name
    pub name: String,
}

impl DeviceRow {
    pub fn from_info(interface: Ipv4Addr, info: &DeviceInfo) -> Self {
        Self {
            interface: interface.to_string(),
            model: info.model_name().to_string(),
            serial: info.serial_number().to_string(),
            ip: info.ip().to_string(),
            mac: info.mac_string(),
            firmware: info.device_version().to_string(),
            name: info.user_name().to_string(),
        }
    }
}
