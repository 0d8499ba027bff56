// ABOUTME: Audit logging for wizard milestones
//
// Records when a wizard run starts, moves forward, completes or is abandoned.
// Entries never carry credentials; only step numbers, the chosen niche and
// the submission id.
//
// Audit log is written to: ~/.autopilot-onboard/logs/audit.jsonl
// Format: JSON Lines (one JSON object per line) for easy grep/parsing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::AppConfig;

/// Types of auditable actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    WizardStarted,
    StepAdvanced,
    WizardCompleted,
    WizardAbandoned,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::WizardStarted => write!(f, "WIZARD_STARTED"),
            AuditAction::StepAdvanced => write!(f, "STEP_ADVANCED"),
            AuditAction::WizardCompleted => write!(f, "WIZARD_COMPLETED"),
            AuditAction::WizardAbandoned => write!(f, "WIZARD_ABANDONED"),
        }
    }
}

/// Result of an audited action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditResult {
    Success,
    Failed(String),
}

/// What triggered the audit action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditTrigger {
    /// User pressed a key (e.g., "enter")
    UserKeypress(String),
    /// Startup initialization
    Startup,
    /// Shutdown cleanup
    Shutdown,
}

impl std::fmt::Display for AuditTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditTrigger::UserKeypress(key) => write!(f, "keypress:{}", key),
            AuditTrigger::Startup => write!(f, "startup"),
            AuditTrigger::Shutdown => write!(f, "shutdown"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action occurred
    pub timestamp: DateTime<Utc>,

    /// Type of action
    pub action: AuditAction,

    /// Result of the action
    pub result: AuditResult,

    /// Step number the action refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,

    /// Submission id for completed runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Uuid>,

    /// Additional context/details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Trigger source
    pub trigger: AuditTrigger,
}

impl AuditEntry {
    pub fn new(action: AuditAction, trigger: AuditTrigger) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            result: AuditResult::Success,
            step: None,
            submission_id: None,
            details: None,
            trigger,
        }
    }
}

/// Global audit logger
static AUDIT_LOGGER: Mutex<Option<AuditLogger>> = Mutex::new(None);

/// Audit logger that writes to a JSONL file
pub struct AuditLogger {
    writer: BufWriter<File>,
    log_path: PathBuf,
}

impl AuditLogger {
    /// Initialize the global audit logger at the default location
    pub fn init() -> std::io::Result<()> {
        Self::init_at(&Self::log_path())
    }

    /// Initialize the global audit logger writing to `log_path`
    pub fn init_at(log_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(log_path)?;

        let logger = AuditLogger {
            writer: BufWriter::new(file),
            log_path: log_path.to_path_buf(),
        };

        let mut global = AUDIT_LOGGER
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        *global = Some(logger);

        info!("Audit logging initialized: {:?}", log_path);
        Ok(())
    }

    /// Get the audit log file path
    pub fn log_path() -> PathBuf {
        AppConfig::default_log_dir().join("audit.jsonl")
    }

    /// Path of the currently open audit file, if any
    pub fn active_path() -> Option<PathBuf> {
        AUDIT_LOGGER
            .lock()
            .ok()
            .and_then(|g| g.as_ref().map(|l| l.log_path.clone()))
    }

    /// Write an entry to the audit log
    fn write_entry(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Log an audit entry (main API)
pub fn audit_log(entry: AuditEntry) {
    // Also log to tracing for immediate visibility
    info!(
        target: "audit",
        action = %entry.action,
        result = ?entry.result,
        trigger = %entry.trigger,
        step = ?entry.step,
        submission_id = ?entry.submission_id,
        "AUDIT: {}",
        entry.action
    );

    let mut global = match AUDIT_LOGGER.lock() {
        Ok(g) => g,
        Err(e) => {
            error!("Failed to acquire audit logger lock: {}", e);
            return;
        }
    };

    // Without an initialized logger the entry only goes to tracing
    if let Some(ref mut logger) = *global {
        if let Err(e) = logger.write_entry(&entry) {
            error!("Failed to write audit entry: {}", e);
        }
    }
}

// ============================================================================
// Convenience functions for common audit scenarios
// ============================================================================

/// Log the start of a wizard run
pub fn audit_wizard_started(confirm_secrets: bool) {
    let mut entry = AuditEntry::new(AuditAction::WizardStarted, AuditTrigger::Startup);
    entry.step = Some(1);
    entry.details = Some(format!("confirm_secrets: {}", confirm_secrets));
    audit_log(entry);
}

/// Log a forward step transition
pub fn audit_step_advanced(from: usize, to: usize) {
    let mut entry = AuditEntry::new(
        AuditAction::StepAdvanced,
        AuditTrigger::UserKeypress("enter".to_string()),
    );
    entry.step = Some(to);
    entry.details = Some(format!("{} -> {}", from, to));
    audit_log(entry);
}

/// Log a finished wizard
pub fn audit_wizard_completed(submission_id: Uuid, niche: &str, result: AuditResult) {
    let mut entry = AuditEntry::new(
        AuditAction::WizardCompleted,
        AuditTrigger::UserKeypress("enter".to_string()),
    );
    entry.result = result;
    entry.step = Some(5);
    entry.submission_id = Some(submission_id);
    entry.details = Some(format!("niche: {}", niche));
    audit_log(entry);
}

/// Log a run that was quit before finishing
pub fn audit_wizard_abandoned(step: usize) {
    let mut entry = AuditEntry::new(AuditAction::WizardAbandoned, AuditTrigger::Shutdown);
    entry.step = Some(step);
    audit_log(entry);
}
