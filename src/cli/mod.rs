//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ConvertCommand, SimulateCommand, ValidateCommand, WatchCommand};
use std::ffi::OsString;

/// Temperature conversion dashboard with a scripted CI pipeline simulator
#[derive(Debug, Parser, Clone)]
#[command(name = "thermoci")]
#[command(author = "thermoci Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Temperature conversion dashboard with a scripted CI pipeline simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Convert a temperature reading
    Convert(ConvertCommand),

    /// Play the pipeline simulation once
    Simulate(SimulateCommand),

    /// Validate a timeline configuration
    Validate(ValidateCommand),

    /// Interactive session: live conversion plus the pipeline trigger
    Watch(WatchCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
