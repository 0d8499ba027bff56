// ABOUTME: Main layout component stacking the wizard with its overlays

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);

use super::{ConfirmationDialogComponent, OnboardingComponent};
use crate::app::AppState;

pub struct LayoutComponent {
    onboarding: OnboardingComponent,
    confirmation_dialog: ConfirmationDialogComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            onboarding: OnboardingComponent::new(),
            confirmation_dialog: ConfirmationDialogComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        self.onboarding.render(frame, area, &state.onboarding);

        if let Some(message) = &state.acknowledgement {
            Self::render_acknowledgement(frame, centered_rect(60, 30, area), message);
        }

        // Dialog goes last so it sits on top
        self.confirmation_dialog.render(frame, area, state);
    }

    fn render_acknowledgement(frame: &mut Frame, area: Rect, message: &str) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SELECTION_GREEN))
            .style(Style::default().bg(PANEL_BG))
            .title(" Done ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(" to exit", Style::default().fg(MUTED_GRAY)),
            ]),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        frame.render_widget(text, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
