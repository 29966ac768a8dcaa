//! Canopy CLI Binary
//!
//! Command-line interface for building Merkle commitment trees over ordered
//! records and exporting their structure.

use canopy::cli::{self, Cli, Commands};
use canopy::error::AppError;
use canopy::logging::{init_logging, LoggingConfig};
use canopy::tree::builder::{Tree, TreeBuilder};
use canopy::tree::view;
use clap::Parser;
use dialoguer::Input;
use std::io::BufRead;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Initialize logging early
    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Canopy CLI starting");

    match run(&cli) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Execute the parsed command and return its printable output.
fn run(cli: &Cli) -> Result<String, AppError> {
    match &cli.command {
        Commands::Build {
            records,
            interactive,
            format,
            quiet,
        } => {
            let tree = build_tree(records, *interactive)?;
            match format.as_str() {
                "json" => {
                    let enumeration = view::enumerate(Some(&tree));
                    cli::format_enumeration_json(&tree, &enumeration)
                }
                "text" => {
                    let mut out = format!("Root hash: {}", tree.root_digest());
                    if !*quiet {
                        out.push_str("\n\n");
                        out.push_str(&cli::format_tree_text(&tree));
                    }
                    Ok(out)
                }
                other => Err(AppError::Config(format!(
                    "Invalid output format: {} (must be 'text' or 'json')",
                    other
                ))),
            }
        }
        Commands::Export {
            records,
            interactive,
            format,
        } => {
            let tree = build_tree(records, *interactive)?;
            let enumeration = view::enumerate(Some(&tree));
            match format.as_str() {
                "dot" => Ok(cli::format_enumeration_dot(&tree, &enumeration)),
                "json" => cli::format_enumeration_json(&tree, &enumeration),
                other => Err(AppError::Config(format!(
                    "Invalid export format: {} (must be 'dot' or 'json')",
                    other
                ))),
            }
        }
    }
}

/// Collect records from CLI arguments, an interactive prompt loop, or stdin,
/// then build the tree.
fn build_tree(records: &[String], interactive: bool) -> Result<Tree, AppError> {
    let mut builder = TreeBuilder::new();

    if interactive {
        collect_interactive(&mut builder)?;
    } else if records.is_empty() {
        collect_stdin(&mut builder)?;
    } else {
        for record in records {
            builder.push(record.clone());
        }
    }

    Ok(builder.build()?)
}

/// Prompt for a record count and then each record in order.
fn collect_interactive(builder: &mut TreeBuilder) -> Result<(), AppError> {
    let count: usize = Input::new()
        .with_prompt("Number of records")
        .interact_text()
        .map_err(|e| AppError::Input(e.to_string()))?;

    for i in 0..count {
        let record: String = Input::new()
            .with_prompt(format!("Record {}", i + 1))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Input(e.to_string()))?;
        builder.push(record);
    }

    Ok(())
}

/// Read one record per line from stdin until EOF.
fn collect_stdin(builder: &mut TreeBuilder) -> Result<(), AppError> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| AppError::Input(e.to_string()))?;
        builder.push(line);
    }
    Ok(())
}

/// Build logging configuration from CLI arguments
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = LoggingConfig::default();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
