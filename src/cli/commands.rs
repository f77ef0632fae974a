//! CLI command definitions

use clap::Args;

/// Convert a temperature reading
#[derive(Debug, Args, Clone)]
pub struct ConvertCommand {
    /// Raw input value (validated like the interactive field, so "12abc" is 12)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Treat the input as Fahrenheit and convert to Celsius
    #[arg(long)]
    pub fahrenheit: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Play the pipeline simulation once
#[derive(Debug, Args, Clone)]
pub struct SimulateCommand {
    /// Path to a timeline YAML file (defaults to the built-in reference timeline)
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Validate a timeline configuration
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to a timeline YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Interactive session
#[derive(Debug, Args, Clone)]
pub struct WatchCommand {
    /// Path to a timeline YAML file for the `run` trigger
    #[arg(short, long)]
    pub file: Option<String>,
}
