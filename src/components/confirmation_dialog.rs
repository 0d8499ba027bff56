// ABOUTME: Confirmation dialog component for displaying yes/no prompts with keyboard navigation

use crate::app::state::AppState;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);

pub struct ConfirmationDialogComponent;

impl ConfirmationDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(dialog) = &state.confirmation_dialog else {
            return;
        };

        // Center the dialog, shrinking on tiny terminals
        let dialog_width = 60.min(area.width.saturating_sub(4));
        let dialog_height = 8.min(area.height);

        let dialog_area = Rect {
            x: area.x + (area.width - dialog_width) / 2,
            y: area.y + (area.height - dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        // Clear ONLY the dialog area, not the entire screen
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(dialog.title.clone())
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GOLD))
            .style(Style::default().bg(PANEL_BG));

        let inner_area = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(2), // Buttons
            ])
            .split(inner_area);

        let message = Paragraph::new(dialog.message.clone())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(SOFT_WHITE));
        frame.render_widget(message, chunks[0]);

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let selected = Style::default().fg(Color::Black).bg(SOFT_WHITE);
        let unselected = Style::default().fg(SOFT_WHITE);

        let yes_style = if dialog.selected_option { selected } else { unselected };
        let yes_button = Paragraph::new("Yes").style(yes_style).alignment(Alignment::Center);
        frame.render_widget(yes_button, button_chunks[0]);

        let no_style = if dialog.selected_option { unselected } else { selected };
        let no_button = Paragraph::new("No").style(no_style).alignment(Alignment::Center);
        frame.render_widget(no_button, button_chunks[1]);
    }
}

impl Default for ConfirmationDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
