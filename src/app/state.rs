// ABOUTME: Application state for the onboarding TUI
// Owns the wizard state, completion sinks and the overlay dialogs

use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::{
    audit_step_advanced, audit_wizard_abandoned, audit_wizard_completed, audit_wizard_started,
    AuditResult,
};
use crate::completion::{CompletionDispatcher, ACKNOWLEDGEMENT};
use crate::components::onboarding::{OnboardingState, SubmitOutcome, WizardOptions};
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_action: ConfirmAction,
    pub selected_option: bool, // true = Yes, false = No
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    QuitWizard,
}

#[derive(Debug)]
pub struct AppState {
    pub onboarding: OnboardingState,
    /// Receivers of the finished submission
    pub completion: CompletionDispatcher,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    /// Shown after finish; any confirm key exits
    pub acknowledgement: Option<String>,
    /// Id of the submission handed to the sinks
    pub submission_id: Option<Uuid>,
    pub cursor_blink: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(options: WizardOptions) -> Self {
        Self::with_dispatcher(options, CompletionDispatcher::with_default_sinks())
    }

    pub fn with_dispatcher(options: WizardOptions, completion: CompletionDispatcher) -> Self {
        Self {
            onboarding: OnboardingState::new(options),
            completion,
            confirmation_dialog: None,
            acknowledgement: None,
            submission_id: None,
            cursor_blink: true,
            should_quit: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut state = Self::new(config.wizard_options());
        state.cursor_blink = config.ui.cursor_blink;
        state
    }

    /// Exit immediately
    pub fn quit(&mut self) {
        if !self.should_quit && !self.onboarding.is_finished() {
            audit_wizard_abandoned(self.onboarding.progress.current());
        }
        self.should_quit = true;
    }

    /// Ask before discarding an unfinished run
    pub fn request_quit(&mut self) {
        if self.onboarding.is_finished() {
            self.quit();
            return;
        }
        self.confirmation_dialog = Some(ConfirmationDialog {
            title: " Quit setup? ".to_string(),
            message: "Your answers are only kept in memory and will be lost.".to_string(),
            confirm_action: ConfirmAction::QuitWizard,
            selected_option: false,
        });
    }

    /// Confirm the current wizard step
    pub fn submit_step(&mut self) -> SubmitOutcome {
        let from = self.onboarding.progress.current();
        let outcome = self.onboarding.submit();
        if let SubmitOutcome::Advanced(step) = outcome {
            audit_step_advanced(from, step.number());
        }
        outcome
    }

    /// Finish the wizard and hand the data to every sink
    pub fn finish_onboarding(&mut self) {
        let Some(submission) = self.onboarding.finish() else {
            return;
        };

        if self.completion.is_empty() {
            warn!("No completion sinks registered; submission only reaches the audit log");
        }

        info!("Dispatching onboarding submission {}", submission.submission_id);
        let failed = self.completion.dispatch(&submission);
        let result = if failed.is_empty() {
            AuditResult::Success
        } else {
            warn!("Some completion sinks failed: {:?}", failed);
            AuditResult::Failed(format!("sinks failed: {}", failed.join(", ")))
        };
        audit_wizard_completed(submission.submission_id, submission.niche.id(), result);

        self.submission_id = Some(submission.submission_id);
        self.acknowledgement = Some(ACKNOWLEDGEMENT.to_string());
    }

    /// Cursor blink on each tick
    pub fn on_tick(&mut self) {
        if self.cursor_blink {
            self.onboarding.toggle_cursor();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(config),
        }
    }

    pub fn init(&mut self) {
        audit_wizard_started(self.state.onboarding.options.confirm_secrets);
    }

    pub fn tick(&mut self) {
        self.state.on_tick();
    }
}
