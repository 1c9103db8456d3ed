//! Discover command implementation.

use std::time::Duration;

use colored::*;
use gvdiscover_core::Discoverer;

use crate::cli::DiscoverArgs;
use crate::error::{CliError, Result};
use crate::output::get_formatter;
use crate::types::DeviceRow;

/// Run the discover command
pub async fn run_discover(args: DiscoverArgs, timeout_ms: u64, json: bool) -> Result<()> {
    let discoverer = Discoverer::new()?;

    if !json {
        println!(
            "{}",
            format!(
                "Discovering on {} interface(s), {} ms per attempt...",
                discoverer.sockets().len(),
                timeout_ms
            )
            .dimmed()
        );
    }

    discoverer.broadcast_request().await?;

    let (_, infos) = discoverer
        .get_response(Duration::from_millis(timeout_ms))
        .await?;

    // Results line up with sockets; keep the interfaces that answered.
    let mut rows: Vec<DeviceRow> = discoverer
        .sockets()
        .iter()
        .zip(&infos)
        .filter(|(_, info)| info.is_valid())
        .map(|(socket, info)| DeviceRow::from_info(socket.interface(), info))
        .collect();

    if let Some(serial) = &args.serial {
        rows.retain(|row| row.serial.contains(serial.as_str()));
    }

    let formatter = get_formatter(json);
    println!("{}", formatter.format_devices(&rows));

    if rows.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    Ok(())
}
