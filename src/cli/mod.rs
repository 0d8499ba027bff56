// ABOUTME: CLI argument parsing and command routing for autopilot-onboard
//
// Provides command-line interface for:
// - Running the onboarding wizard (tui, default)
// - Checking identity details without the TUI (validate)
// - Inspecting the effective configuration (config)

pub mod config;
pub mod validate;

use clap::{Parser, Subcommand, ValueEnum};

/// Onboarding wizard for the Instagram & YouTube growth autopilot
#[derive(Parser)]
#[command(name = "autopilot-onboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the onboarding wizard (default if no command given)
    Tui(TuiArgs),

    /// Validate identity details without opening the wizard
    Validate(ValidateArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the tui command
#[derive(clap::Args, Default)]
pub struct TuiArgs {
    /// Ask for each password twice (overrides config)
    #[arg(long)]
    pub confirm_secrets: Option<bool>,
}

/// Arguments for the validate command
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,
}

/// Arguments for the config command
#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Print the config file location instead of its contents
    #[arg(long)]
    pub path: bool,
}
