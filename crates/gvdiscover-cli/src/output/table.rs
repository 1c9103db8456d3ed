//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};

use super::OutputFormatter;
use crate::types::DeviceRow;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, devices: &[DeviceRow]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Interface",
            "Model",
            "Serial",
            "IP",
            "MAC",
            "Firmware",
            "Name",
        ]);

        for device in devices {
            table.add_row(vec![
                Cell::new(&device.interface),
                Cell::new(&device.model),
                Cell::new(&device.serial),
                Cell::new(&device.ip),
                Cell::new(&device.mac),
                Cell::new(&device.firmware),
                Cell::new(&device.name),
            ]);
        }

        format!(
            "{}\n\nFound {} device(s)",
            table,
            devices.len().to_string().green()
        )
    }
}
