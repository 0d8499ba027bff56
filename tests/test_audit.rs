// ABOUTME: Audit trail entries written when a wizard run completes
// One test per binary: the audit logger is process-global

use autopilot_onboard::app::AppState;
use autopilot_onboard::audit::{AuditAction, AuditEntry, AuditLogger, AuditResult};
use autopilot_onboard::completion::{CompletionDispatcher, CompletionSink};
use autopilot_onboard::components::onboarding::{
    FieldId, Niche, OnboardingSubmission, WizardOptions,
};
use std::fs;
use tempfile::TempDir;

struct OfflineSink;

impl CompletionSink for OfflineSink {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn deliver(&mut self, _submission: &OnboardingSubmission) -> anyhow::Result<()> {
        anyhow::bail!("dashboard unreachable")
    }
}

fn complete_run(completion: CompletionDispatcher, niche: Niche) {
    let mut state = AppState::with_dispatcher(WizardOptions::default(), completion);
    state.submit_step();

    let wizard = &mut state.onboarding;
    wizard.set_field(FieldId::FullName, "Jane Doe");
    wizard.set_field(FieldId::Phone, "+15551234567");
    wizard.set_field(FieldId::Email, "jane@example.com");
    state.submit_step();

    state.onboarding.select_niche(niche);
    state.submit_step();

    let wizard = &mut state.onboarding;
    wizard.set_field(FieldId::InstagramUsername, "janedoe");
    wizard.set_field(FieldId::InstagramPassword, "ig-pass");
    wizard.set_field(FieldId::InstagramPasswordConfirm, "ig-pass");
    wizard.set_field(FieldId::YoutubeEmail, "jane@channel.com");
    wizard.set_field(FieldId::YoutubePassword, "yt-pass");
    wizard.set_field(FieldId::YoutubePasswordConfirm, "yt-pass");
    state.submit_step();

    state.finish_onboarding();
    state.finish_onboarding();
    assert!(state.acknowledgement.is_some());
}

#[test]
fn test_completion_audit_records_sink_failures() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.jsonl");
    AuditLogger::init_at(&path).unwrap();

    let mut failing = CompletionDispatcher::new();
    failing.register(Box::new(OfflineSink));
    complete_run(failing, Niche::Business);
    complete_run(CompletionDispatcher::with_default_sinks(), Niche::Tech);

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("ig-pass"));
    assert!(!content.contains("yt-pass"));

    let completed: Vec<AuditEntry> = content
        .lines()
        .map(|line| serde_json::from_str::<AuditEntry>(line).unwrap())
        .filter(|entry| entry.action == AuditAction::WizardCompleted)
        .collect();

    // Repeated finish does not add entries
    assert_eq!(completed.len(), 2);

    assert_eq!(
        completed[0].result,
        AuditResult::Failed("sinks failed: offline".to_string())
    );
    assert_eq!(completed[0].details.as_deref(), Some("niche: business"));

    assert_eq!(completed[1].result, AuditResult::Success);
    assert_eq!(completed[1].details.as_deref(), Some("niche: tech"));
    assert!(completed[1].submission_id.is_some());

    let advances = content
        .lines()
        .filter(|line| line.contains("\"step_advanced\""))
        .count();
    assert_eq!(advances, 8);
}
