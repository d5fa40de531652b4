//! Command-line interface for cify-mosc
//!
//! Takes exactly two positionals, `OUTPUT` then `INPUT`, to match how the
//! build scripts invoke it.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::GenerateConfig;
use crate::transcode;

/// Convert a Mosc library to a C string literal
#[derive(Parser)]
#[command(name = "cify-mosc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The output file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// The source .msc (or .wren) file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for GenerateConfig {
    fn from(cli: &Cli) -> Self {
        GenerateConfig::new(cli.output.clone(), cli.input.clone())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = GenerateConfig::from(&cli);
    transcode::run(config)?;
    Ok(())
}
