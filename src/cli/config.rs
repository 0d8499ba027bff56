// ABOUTME: CLI config command - prints the effective configuration or its path

use anyhow::{Context, Result};

use super::{ConfigArgs, OutputFormat};
use autopilot_onboard::config::AppConfig;

pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    if args.path {
        let path = AppConfig::user_config_path()?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "path": path })),
            OutputFormat::Text => println!("{}", path.display()),
        }
        return Ok(());
    }

    let config = AppConfig::load()?;
    println!("{}", render(&config, format)?);
    Ok(())
}

fn render(config: &AppConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize config")
        }
        OutputFormat::Text => toml::to_string_pretty(config).context("Failed to serialize config"),
    }
}
