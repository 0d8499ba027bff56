// ABOUTME: CLI validate command - runs the identity validator headlessly
//
// Prints one line per failing field (or a JSON report) and exits non-zero
// when anything failed.

use anyhow::{Context, Result};
use serde::Serialize;

use super::{OutputFormat, ValidateArgs};
use autopilot_onboard::components::onboarding::{validate_identity, Identity, ValidationErrors};

/// JSON output structure for the validate command
#[derive(Debug, Serialize)]
pub struct ValidateOutput<'a> {
    pub valid: bool,
    pub errors: &'a ValidationErrors,
}

impl ValidateArgs {
    fn into_identity(self) -> Identity {
        Identity {
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
        }
    }
}

pub fn execute(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let errors = validate_identity(&args.into_identity());

    match format {
        OutputFormat::Json => {
            let output = ValidateOutput {
                valid: errors.is_empty(),
                errors: &errors,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize report")?
            );
        }
        OutputFormat::Text => print!("{}", render_text(&errors)),
    }

    errors.into_result()?;
    Ok(())
}

fn render_text(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        return "Identity details look good.\n".to_string();
    }

    let mut out = String::new();
    for (field, message) in errors.iter() {
        out.push_str(&format!("{:<14} {}\n", field.label(), message));
    }
    out
}
