//! slaveinfo2xml - Main entry point
//!
//! Reads a slave information report (the output of the `ethercat` tool) and
//! prints the generated ESI XML device description to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use ethercat_esi::{load_report_from_str, save_esi_to_string};
use log::debug;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slaveinfo2xml")]
#[command(about = "Converts an EtherCAT slave information report into an ESI XML device description")]
#[command(version)]
struct Args {
    /// Slave information report to convert
    #[arg(value_name = "FILE", default_value = "info")]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    debug!("reading slave information report {}", args.file.display());
    let report = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read report {}", args.file.display()))?;

    let device = load_report_from_str(&report)
        .with_context(|| format!("failed to parse report {}", args.file.display()))?;
    let xml = save_esi_to_string(&device)?;

    println!("{}", xml);
    Ok(())
}
