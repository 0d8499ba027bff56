// ABOUTME: Integration tests for config files, env overrides and the audit trail location

use autopilot_onboard::audit::{audit_step_advanced, AuditEntry, AuditLogger};
use autopilot_onboard::config::{AppConfig, ConfigError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
version = "0.1.0"

[wizard]
confirm_secrets = false
mask_char = "*"

[logging]
filter = "autopilot_onboard=debug"
directory = "/tmp/autopilot-logs"

[ui]
tick_rate_ms = 100
cursor_blink = false
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert!(!config.wizard.confirm_secrets);
    assert_eq!(config.wizard.mask_char, '*');
    assert_eq!(config.logging.filter, "autopilot_onboard=debug");
    assert_eq!(config.log_dir(), std::path::PathBuf::from("/tmp/autopilot-logs"));
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(!config.ui.cursor_blink);

    let options = config.wizard_options();
    assert!(!options.confirm_secrets);
    assert_eq!(options.mask_char, '*');
}

#[test]
fn test_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_blank_mask_char_rejected() {
    let mut config = AppConfig::default();
    config.wizard.mask_char = '\t';
    assert_eq!(config.validate(), Err(ConfigError::InvisibleMaskChar('\t')));
}

#[test]
fn test_audit_log_written_as_jsonl() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("audit.jsonl");

    AuditLogger::init_at(&path).unwrap();
    assert_eq!(AuditLogger::active_path(), Some(path.clone()));

    audit_step_advanced(1, 2);

    let content = fs::read_to_string(&path).unwrap();
    let last = content.lines().last().unwrap();
    let entry: AuditEntry = serde_json::from_str(last).unwrap();
    assert_eq!(entry.step, Some(2));
    assert_eq!(entry.details.as_deref(), Some("1 -> 2"));
}
