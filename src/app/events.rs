// ABOUTME: Event handling system for keyboard input and wizard actions

use crate::app::state::{AppState, ConfirmAction};
use crate::components::onboarding::{Niche, OnboardingStep};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    RequestQuit,
    // Confirmation dialog events
    ConfirmationToggle,  // Switch between Yes/No
    ConfirmationConfirm, // Confirm action
    ConfirmationCancel,  // Cancel dialog
    // Wizard navigation
    Submit,
    Finish,
    DismissAcknowledgement,
    // Form field events
    FocusNext,
    FocusPrevious,
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    PasteFromClipboard,
    ToggleVisibility,
    // Niche selection events
    NicheNext,
    NichePrevious,
    NicheSelectHighlighted,
    NicheSelect(Niche),
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        // Ctrl+C always exits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // Handle confirmation dialog first (highest priority)
        if state.confirmation_dialog.is_some() {
            return match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(AppEvent::ConfirmationToggle),
                KeyCode::Enter => Some(AppEvent::ConfirmationConfirm),
                KeyCode::Esc => Some(AppEvent::ConfirmationCancel),
                _ => None,
            };
        }

        if state.acknowledgement.is_some() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc => Some(AppEvent::DismissAcknowledgement),
                _ => None,
            };
        }

        if key_event.code == KeyCode::Esc {
            return Some(AppEvent::RequestQuit);
        }

        match state.onboarding.current_step() {
            OnboardingStep::Welcome => match key_event.code {
                KeyCode::Enter => Some(AppEvent::Submit),
                _ => None,
            },
            OnboardingStep::Identity | OnboardingStep::Credentials => {
                Self::handle_form_keys(key_event)
            }
            OnboardingStep::Niche => Self::handle_niche_keys(key_event),
            OnboardingStep::Success => match key_event.code {
                KeyCode::Enter => Some(AppEvent::Finish),
                _ => None,
            },
        }
    }

    fn handle_form_keys(key_event: KeyEvent) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('v') => Some(AppEvent::PasteFromClipboard),
                KeyCode::Char('r') => Some(AppEvent::ToggleVisibility),
                KeyCode::Char('a') => Some(AppEvent::CursorHome),
                KeyCode::Char('e') => Some(AppEvent::CursorEnd),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::FocusPrevious),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Delete => Some(AppEvent::Delete),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Home => Some(AppEvent::CursorHome),
            KeyCode::End => Some(AppEvent::CursorEnd),
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    fn handle_niche_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => {
                Some(AppEvent::NicheNext)
            }
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
                Some(AppEvent::NichePrevious)
            }
            KeyCode::Char(' ') => Some(AppEvent::NicheSelectHighlighted),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(|d| d.checked_sub(1))
                .and_then(|idx| Niche::all().get(idx).copied())
                .map(AppEvent::NicheSelect),
            _ => None,
        }
    }

    /// Get text from system clipboard
    fn get_clipboard_text() -> Result<String, Box<dyn std::error::Error>> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        let text = clipboard.get_text()?;
        Ok(text)
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        // Typed characters may belong to a password field
        if !matches!(event, AppEvent::InputChar(_)) {
            debug!("Processing event {:?}", event);
        }

        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::RequestQuit => state.request_quit(),
            AppEvent::ConfirmationToggle => {
                if let Some(ref mut dialog) = state.confirmation_dialog {
                    dialog.selected_option = !dialog.selected_option;
                }
            }
            AppEvent::ConfirmationConfirm => {
                if let Some(dialog) = state.confirmation_dialog.take() {
                    if dialog.selected_option {
                        match dialog.confirm_action {
                            ConfirmAction::QuitWizard => state.quit(),
                        }
                    }
                    // If not confirmed, just close the dialog
                }
            }
            AppEvent::ConfirmationCancel => {
                state.confirmation_dialog = None;
            }
            AppEvent::Submit => {
                state.submit_step();
            }
            AppEvent::Finish => state.finish_onboarding(),
            AppEvent::DismissAcknowledgement => {
                state.acknowledgement = None;
                state.quit();
            }
            AppEvent::FocusNext => state.onboarding.focus_next(),
            AppEvent::FocusPrevious => state.onboarding.focus_previous(),
            AppEvent::InputChar(c) => state.onboarding.input_char(c),
            AppEvent::Backspace => state.onboarding.backspace(),
            AppEvent::Delete => state.onboarding.delete(),
            AppEvent::CursorLeft => state.onboarding.cursor_left(),
            AppEvent::CursorRight => state.onboarding.cursor_right(),
            AppEvent::CursorHome => state.onboarding.cursor_home(),
            AppEvent::CursorEnd => state.onboarding.cursor_end(),
            AppEvent::PasteFromClipboard => match Self::get_clipboard_text() {
                Ok(text) => state.onboarding.paste(&text),
                Err(e) => warn!("Clipboard unavailable: {}", e),
            },
            AppEvent::ToggleVisibility => state.onboarding.toggle_focused_visibility(),
            AppEvent::NicheNext => state.onboarding.niche_cursor_next(),
            AppEvent::NichePrevious => state.onboarding.niche_cursor_previous(),
            AppEvent::NicheSelectHighlighted => state.onboarding.select_highlighted_niche(),
            AppEvent::NicheSelect(niche) => state.onboarding.select_niche(niche),
        }
    }
}
