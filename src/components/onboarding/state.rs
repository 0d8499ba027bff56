// ABOUTME: State management for onboarding wizard
// Tracks current step, user inputs, focus and validation results

use std::collections::HashSet;
use tracing::info;

use super::input::TextCursor;
use super::model::{Accounts, Identity, Niche, OnboardingSubmission};
use super::validation::{validate_accounts, validate_identity, FieldId, ValidationErrors};

/// Steps in the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    Identity,
    Niche,
    Credentials,
    Success,
}

impl OnboardingStep {
    /// Get all steps in order
    pub fn all() -> &'static [OnboardingStep] {
        &[
            Self::Welcome,
            Self::Identity,
            Self::Niche,
            Self::Credentials,
            Self::Success,
        ]
    }

    /// Get the step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::Identity => 2,
            Self::Niche => 3,
            Self::Credentials => 4,
            Self::Success => 5,
        }
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        5
    }

    /// Step for a 1-indexed counter value
    pub fn from_number(number: usize) -> Option<Self> {
        Self::all().get(number.checked_sub(1)?).copied()
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Identity => "About You",
            Self::Niche => "Niche",
            Self::Credentials => "Accounts",
            Self::Success => "Live",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Welcome => "Grow your Instagram & YouTube on autopilot",
            Self::Identity => "Tell us about yourself",
            Self::Niche => "Choose your content niche",
            Self::Credentials => "Connect your accounts",
            Self::Success => "Your automation is now live!",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_number(advance(self.number(), Self::total()))
            .filter(|next| next != self)
    }
}

/// Forward-only step transition, saturating at `max`
pub fn advance(current: usize, max: usize) -> usize {
    if current < max {
        current + 1
    } else {
        current
    }
}

/// 1-indexed step counter bounded to `[1, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardProgress {
    current: usize,
    max: usize,
}

impl WizardProgress {
    pub fn new() -> Self {
        Self {
            current: 1,
            max: OnboardingStep::total(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn step(&self) -> OnboardingStep {
        OnboardingStep::from_number(self.current).unwrap_or(OnboardingStep::Welcome)
    }

    /// Move forward one step; returns whether the counter changed
    pub fn advance(&mut self) -> bool {
        let next = advance(self.current, self.max);
        let moved = next != self.current;
        self.current = next;
        moved
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.max
    }
}

impl Default for WizardProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Feature switches for the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    /// Ask for each password twice and allow revealing secret fields
    pub confirm_secrets: bool,
    /// Character drawn in place of hidden secret characters
    pub mask_char: char,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            confirm_secrets: true,
            mask_char: '•',
        }
    }
}

/// What happened when the user confirmed the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved to the given step
    Advanced(OnboardingStep),
    /// Validator reported field errors
    Invalid(usize),
    /// The step's action is disabled (no niche selected)
    Disabled,
    /// Terminal step; only finish applies
    Terminal,
}

/// Full onboarding wizard state
#[derive(Debug)]
pub struct OnboardingState {
    /// Step counter
    pub progress: WizardProgress,
    pub options: WizardOptions,
    pub identity: Identity,
    /// Selected niche, if any
    pub niche: Option<Niche>,
    pub accounts: Accounts,
    /// Errors from the last submit of the current step
    pub errors: ValidationErrors,
    /// Index into the current step's field list
    pub focus_index: usize,
    /// Cursor within the focused field
    pub cursor: TextCursor,
    /// Highlighted row on the niche step
    pub niche_cursor: usize,
    /// Secret fields the user chose to reveal
    pub revealed: HashSet<FieldId>,
    /// Whether to show cursor
    pub show_cursor: bool,
    finished: bool,
}

impl OnboardingState {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            progress: WizardProgress::new(),
            options,
            identity: Identity::default(),
            niche: None,
            accounts: Accounts::default(),
            errors: ValidationErrors::new(),
            focus_index: 0,
            cursor: TextCursor::default(),
            niche_cursor: 0,
            revealed: HashSet::new(),
            show_cursor: true,
            finished: false,
        }
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.progress.step()
    }

    /// Input fields on the current step, in tab order
    pub fn fields(&self) -> &'static [FieldId] {
        match self.current_step() {
            OnboardingStep::Identity => FieldId::identity_fields(),
            OnboardingStep::Credentials => FieldId::credential_fields(self.options.confirm_secrets),
            _ => &[],
        }
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.fields().get(self.focus_index).copied()
    }

    pub fn field_value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.identity.full_name,
            FieldId::Phone => &self.identity.phone,
            FieldId::Email => &self.identity.email,
            FieldId::InstagramUsername => &self.accounts.instagram.identifier,
            FieldId::InstagramPassword => self.accounts.instagram.secret.expose(),
            FieldId::InstagramPasswordConfirm => {
                self.accounts.instagram.secret_confirmation.expose()
            }
            FieldId::YoutubeEmail => &self.accounts.youtube.identifier,
            FieldId::YoutubePassword => self.accounts.youtube.secret.expose(),
            FieldId::YoutubePasswordConfirm => self.accounts.youtube.secret_confirmation.expose(),
        }
    }

    fn field_value_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.identity.full_name,
            FieldId::Phone => &mut self.identity.phone,
            FieldId::Email => &mut self.identity.email,
            FieldId::InstagramUsername => &mut self.accounts.instagram.identifier,
            FieldId::InstagramPassword => self.accounts.instagram.secret.as_mut_string(),
            FieldId::InstagramPasswordConfirm => {
                self.accounts.instagram.secret_confirmation.as_mut_string()
            }
            FieldId::YoutubeEmail => &mut self.accounts.youtube.identifier,
            FieldId::YoutubePassword => self.accounts.youtube.secret.as_mut_string(),
            FieldId::YoutubePasswordConfirm => {
                self.accounts.youtube.secret_confirmation.as_mut_string()
            }
        }
    }

    /// Set a field's value directly and park the cursor at its end
    pub fn set_field(&mut self, field: FieldId, value: &str) {
        let target = self.field_value_mut(field);
        target.clear();
        target.push_str(value);
        if self.focused_field() == Some(field) {
            self.cursor = TextCursor::at_end(value);
        }
    }

    /// Run the current step's validator without changing state
    pub fn validate_current_step(&self) -> ValidationErrors {
        match self.current_step() {
            OnboardingStep::Identity => validate_identity(&self.identity),
            OnboardingStep::Credentials => {
                validate_accounts(&self.accounts, self.options.confirm_secrets)
            }
            _ => ValidationErrors::new(),
        }
    }

    /// Whether the current step's forward action is enabled
    pub fn can_advance(&self) -> bool {
        match self.current_step() {
            OnboardingStep::Welcome | OnboardingStep::Identity | OnboardingStep::Credentials => {
                true
            }
            OnboardingStep::Niche => self.niche.is_some(),
            OnboardingStep::Success => false,
        }
    }

    /// Confirm the current step: validate, then move forward
    pub fn submit(&mut self) -> SubmitOutcome {
        let step = self.current_step();
        if step == OnboardingStep::Success {
            return SubmitOutcome::Terminal;
        }
        if !self.can_advance() {
            return SubmitOutcome::Disabled;
        }

        let errors = self.validate_current_step();
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            self.jump_to_first_error();
            return SubmitOutcome::Invalid(count);
        }

        self.progress.advance();
        let next = self.current_step();
        info!("Onboarding advanced from step {} to step {}", step.number(), next.number());
        self.enter_step();
        SubmitOutcome::Advanced(next)
    }

    fn enter_step(&mut self) {
        self.errors = ValidationErrors::new();
        self.focus_index = 0;
        self.niche_cursor = self
            .niche
            .and_then(|n| Niche::all().iter().position(|x| *x == n))
            .unwrap_or(0);
        self.reset_cursor();
    }

    fn jump_to_first_error(&mut self) {
        if let Some(idx) = self.fields().iter().position(|f| self.errors.contains(*f)) {
            self.focus_index = idx;
            self.reset_cursor();
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = match self.focused_field() {
            Some(field) => TextCursor::at_end(self.field_value(field)),
            None => TextCursor::default(),
        };
    }

    /// Hand off the collected data; yields it at most once per session
    pub fn finish(&mut self) -> Option<OnboardingSubmission> {
        if self.finished || self.current_step() != OnboardingStep::Success {
            return None;
        }
        let niche = self.niche?;
        self.finished = true;
        Some(OnboardingSubmission::new(
            self.identity.clone(),
            niche,
            self.accounts.clone(),
        ))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Check if we're on the final step
    pub fn is_final_step(&self) -> bool {
        self.progress.is_terminal()
    }

    /// Focus the next field, wrapping around
    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus_index = (self.focus_index + 1) % count;
            self.reset_cursor();
        }
    }

    /// Focus the previous field, wrapping around
    pub fn focus_previous(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus_index = (self.focus_index + count - 1) % count;
            self.reset_cursor();
        }
    }

    /// Handle text input character
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut cursor = self.cursor;
            cursor.insert_char(self.field_value_mut(field), c);
            self.cursor = cursor;
        }
    }

    /// Insert pasted text at the cursor
    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.focused_field() {
            let mut cursor = self.cursor;
            cursor.insert_str(self.field_value_mut(field), text);
            self.cursor = cursor;
        }
    }

    /// Handle backspace
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut cursor = self.cursor;
            cursor.backspace(self.field_value_mut(field));
            self.cursor = cursor;
        }
    }

    /// Handle delete key
    pub fn delete(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut cursor = self.cursor;
            cursor.delete(self.field_value_mut(field));
            self.cursor = cursor;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor.left();
    }

    pub fn cursor_right(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut cursor = self.cursor;
            cursor.right(self.field_value(field));
            self.cursor = cursor;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor.home();
    }

    pub fn cursor_end(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut cursor = self.cursor;
            cursor.end(self.field_value(field));
            self.cursor = cursor;
        }
    }

    /// Select a niche, replacing any earlier choice
    pub fn select_niche(&mut self, niche: Niche) {
        if self.current_step() != OnboardingStep::Niche {
            return;
        }
        self.niche = Some(niche);
        if let Some(idx) = Niche::all().iter().position(|n| *n == niche) {
            self.niche_cursor = idx;
        }
    }

    /// Select the niche under the highlight
    pub fn select_highlighted_niche(&mut self) {
        if let Some(niche) = Niche::all().get(self.niche_cursor).copied() {
            self.select_niche(niche);
        }
    }

    pub fn niche_cursor_next(&mut self) {
        self.niche_cursor = (self.niche_cursor + 1) % Niche::all().len();
    }

    pub fn niche_cursor_previous(&mut self) {
        let count = Niche::all().len();
        self.niche_cursor = (self.niche_cursor + count - 1) % count;
    }

    /// Flip reveal/mask for a secret field; no-op without secret confirmation
    pub fn toggle_visibility(&mut self, field: FieldId) {
        if !self.options.confirm_secrets || !field.is_secret() {
            return;
        }
        if !self.revealed.remove(&field) {
            self.revealed.insert(field);
        }
    }

    pub fn toggle_focused_visibility(&mut self) {
        if let Some(field) = self.focused_field() {
            self.toggle_visibility(field);
        }
    }

    /// Whether a field is drawn masked
    pub fn is_masked(&self, field: FieldId) -> bool {
        field.is_secret() && !self.revealed.contains(&field)
    }

    /// Toggle cursor visibility (for blinking)
    pub fn toggle_cursor(&mut self) {
        self.show_cursor = !self.show_cursor;
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_identity(state: &mut OnboardingState) {
        state.set_field(FieldId::FullName, "Jane Doe");
        state.set_field(FieldId::Phone, "+15551234567");
        state.set_field(FieldId::Email, "jane@example.com");
    }

    #[test]
    fn test_advance_function() {
        assert_eq!(advance(1, 5), 2);
        assert_eq!(advance(4, 5), 5);
        assert_eq!(advance(5, 5), 5);
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(OnboardingStep::Welcome.next(), Some(OnboardingStep::Identity));
        assert_eq!(OnboardingStep::Credentials.next(), Some(OnboardingStep::Success));
        assert_eq!(OnboardingStep::Success.next(), None);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(OnboardingStep::Welcome.number(), 1);
        assert_eq!(OnboardingStep::Success.number(), 5);
        assert_eq!(OnboardingStep::total(), 5);
        assert_eq!(OnboardingStep::from_number(3), Some(OnboardingStep::Niche));
        assert_eq!(OnboardingStep::from_number(0), None);
        assert_eq!(OnboardingStep::from_number(6), None);
    }

    #[test]
    fn test_progress_saturates() {
        let mut progress = WizardProgress::new();
        assert_eq!(progress.current(), 1);
        for _ in 0..10 {
            progress.advance();
        }
        assert_eq!(progress.current(), 5);
        assert!(progress.is_terminal());
        assert!(!progress.advance());
    }

    #[test]
    fn test_state_initialization() {
        let state = OnboardingState::default();
        assert_eq!(state.current_step(), OnboardingStep::Welcome);
        assert!(state.niche.is_none());
        assert!(!state.is_finished());
        assert!(state.options.confirm_secrets);
    }

    #[test]
    fn test_welcome_is_ungated() {
        let mut state = OnboardingState::default();
        assert_eq!(state.submit(), SubmitOutcome::Advanced(OnboardingStep::Identity));
    }

    #[test]
    fn test_identity_rejects_then_accepts() {
        let mut state = OnboardingState::default();
        state.submit();

        assert_eq!(state.submit(), SubmitOutcome::Invalid(3));
        assert_eq!(state.current_step(), OnboardingStep::Identity);
        assert_eq!(state.errors.get(FieldId::Phone), Some("Phone number is required"));

        fill_identity(&mut state);
        assert_eq!(state.submit(), SubmitOutcome::Advanced(OnboardingStep::Niche));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut state = OnboardingState::default();
        state.submit();
        state.set_field(FieldId::FullName, "Jane");
        state.set_field(FieldId::Phone, "555");
        state.set_field(FieldId::Email, "nope");

        state.submit();
        assert_eq!(state.focused_field(), Some(FieldId::Email));
        assert_eq!(state.cursor.position(), 4);
    }

    #[test]
    fn test_errors_persist_until_next_submit() {
        let mut state = OnboardingState::default();
        state.submit();
        state.submit();
        state.input_char('J');
        assert!(state.errors.contains(FieldId::FullName));
    }

    #[test]
    fn test_niche_disabled_until_selected() {
        let mut state = OnboardingState::default();
        state.submit();
        fill_identity(&mut state);
        state.submit();

        assert!(!state.can_advance());
        assert_eq!(state.submit(), SubmitOutcome::Disabled);
        assert!(state.errors.is_empty());

        state.select_niche(Niche::Love);
        state.select_niche(Niche::Tech);
        assert_eq!(state.niche, Some(Niche::Tech));
        assert!(state.can_advance());
        assert_eq!(state.submit(), SubmitOutcome::Advanced(OnboardingStep::Credentials));
    }

    #[test]
    fn test_select_niche_outside_step_is_ignored() {
        let mut state = OnboardingState::default();
        state.select_niche(Niche::Asmr);
        assert!(state.niche.is_none());
    }

    #[test]
    fn test_niche_cursor_wraps() {
        let mut state = OnboardingState::default();
        state.niche_cursor_previous();
        assert_eq!(state.niche_cursor, Niche::all().len() - 1);
        state.niche_cursor_next();
        assert_eq!(state.niche_cursor, 0);
    }

    #[test]
    fn test_text_input_goes_to_focused_field() {
        let mut state = OnboardingState::default();
        state.submit();

        state.input_char('a');
        state.input_char('b');
        assert_eq!(state.identity.full_name, "ab");

        state.focus_next();
        state.input_char('5');
        assert_eq!(state.identity.phone, "5");

        state.backspace();
        assert_eq!(state.identity.phone, "");

        state.focus_previous();
        state.focus_previous();
        assert_eq!(state.focused_field(), Some(FieldId::Email));
    }

    #[test]
    fn test_input_ignored_without_fields() {
        let mut state = OnboardingState::default();
        state.input_char('x');
        state.paste("hello");
        assert_eq!(state.identity, Identity::default());
    }

    #[test]
    fn test_visibility_toggle_requires_confirm_variant() {
        let mut state = OnboardingState::new(WizardOptions {
            confirm_secrets: false,
            ..WizardOptions::default()
        });
        state.toggle_visibility(FieldId::InstagramPassword);
        assert!(state.is_masked(FieldId::InstagramPassword));

        let mut state = OnboardingState::default();
        assert!(state.is_masked(FieldId::YoutubePasswordConfirm));
        state.toggle_visibility(FieldId::YoutubePasswordConfirm);
        assert!(!state.is_masked(FieldId::YoutubePasswordConfirm));
        assert!(state.is_masked(FieldId::YoutubePassword));
        state.toggle_visibility(FieldId::YoutubePasswordConfirm);
        assert!(state.is_masked(FieldId::YoutubePasswordConfirm));

        state.toggle_visibility(FieldId::Email);
        assert!(!state.is_masked(FieldId::Email));
    }

    #[test]
    fn test_credential_fields_follow_variant() {
        let mut state = OnboardingState::new(WizardOptions {
            confirm_secrets: false,
            ..WizardOptions::default()
        });
        state.progress = WizardProgress {
            current: 4,
            max: 5,
        };
        assert_eq!(state.fields().len(), 4);

        state.options.confirm_secrets = true;
        assert_eq!(state.fields().len(), 6);
    }

    #[test]
    fn test_finish_only_on_success_step() {
        let mut state = OnboardingState::default();
        assert!(state.finish().is_none());
        assert!(!state.is_finished());
    }
}
