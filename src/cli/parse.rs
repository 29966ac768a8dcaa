//! CLI parse: clap types for canopy. No behavior; definitions only.

use clap::{Parser, Subcommand};

/// Canopy CLI - deterministic Merkle commitment trees over ordered records
#[derive(Parser)]
#[command(name = "canopy")]
#[command(about = "Build Merkle commitment trees over ordered records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a tree and print its root digest and pre-order dump
    Build {
        /// Records, in commitment order (omit to read one per line from stdin)
        records: Vec<String>,
        /// Prompt for a record count and then each record
        #[arg(long)]
        interactive: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Print the root digest only
        #[arg(long)]
        quiet: bool,
    },
    /// Export the node/edge enumeration for external rendering
    Export {
        /// Records, in commitment order (omit to read one per line from stdin)
        records: Vec<String>,
        /// Prompt for a record count and then each record
        #[arg(long)]
        interactive: bool,
        /// Output format (dot or json)
        #[arg(long, default_value = "dot")]
        format: String,
    },
}
