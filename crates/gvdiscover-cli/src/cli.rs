//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// gvdiscover - discover GigE-Vision-style devices on the local network
#[derive(Parser, Debug)]
#[command(name = "gvdiscover")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Per-attempt receive timeout in milliseconds
    #[arg(long, global = true, default_value = "1000", env = "GVDISCOVER_TIMEOUT")]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover devices on all broadcast-capable interfaces
    Discover(DiscoverArgs),
}

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Only show devices whose serial number contains this string
    #[arg(long)]
    pub serial: Option<String>,
}
