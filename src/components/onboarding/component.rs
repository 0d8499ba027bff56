// ABOUTME: Main onboarding wizard component
// Renders the header, the active step view and the navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::model::{Niche, Platform};
use super::progress::ProgressIndicator;
use super::state::{OnboardingState, OnboardingStep};
use super::validation::FieldId;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const INSTAGRAM_PINK: Color = Color::Rgb(225, 48, 108);
const YOUTUBE_RED: Color = Color::Rgb(255, 0, 0);

const FIELD_HEIGHT: u16 = 4;

/// The main onboarding wizard component
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        // Clear background
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        // Main layout: header, content, footer
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(15),   // Main content
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_navigation(frame, layout[2], state);
    }

    /// Render the header with step progress
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(2), // Progress indicator
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🚀 ", Style::default()),
            Span::styled(
                "Autopilot Setup",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        ProgressIndicator::render(
            frame,
            header_layout[1],
            state.progress.current(),
            state.progress.max(),
        );
    }

    /// Render the main step content
    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        match state.current_step() {
            OnboardingStep::Welcome => self.render_welcome(frame, area),
            OnboardingStep::Identity => self.render_identity(frame, area, state),
            OnboardingStep::Niche => self.render_niche(frame, area, state),
            OnboardingStep::Credentials => self.render_credentials(frame, area, state),
            OnboardingStep::Success => self.render_success(frame, area, state),
        }
    }

    fn step_block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    /// Render welcome step
    fn render_welcome(&self, frame: &mut Frame, area: Rect) {
        let block = Self::step_block("Welcome");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Headline
                Constraint::Length(3), // Platform badges
                Constraint::Min(3),    // Call to action
            ])
            .split(inner);

        let headline = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Welcome! We help you grow your ", Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    "Instagram & YouTube",
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "channel 100% on autopilot.",
                Style::default().fg(SOFT_WHITE),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(headline, content_layout[0]);

        let badges = Paragraph::new(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(INSTAGRAM_PINK)),
            Span::styled("Instagram", Style::default().fg(SOFT_WHITE)),
            Span::styled("     ", Style::default()),
            Span::styled("▶ ", Style::default().fg(YOUTUBE_RED)),
            Span::styled("YouTube", Style::default().fg(SOFT_WHITE)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(badges, content_layout[1]);

        let cta = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(" to get started", Style::default().fg(MUTED_GRAY)),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(cta, content_layout[2]);
    }

    /// Text shown inside an input box
    fn field_line(state: &OnboardingState, field: FieldId, focused: bool) -> Line<'static> {
        let raw = state.field_value(field);

        if raw.is_empty() && !focused {
            return Line::from(Span::styled(
                field.placeholder(),
                Style::default().fg(MUTED_GRAY),
            ));
        }

        let shown: String = if state.is_masked(field) {
            std::iter::repeat(state.options.mask_char)
                .take(raw.chars().count())
                .collect()
        } else {
            raw.to_string()
        };

        if focused && state.show_cursor {
            let (before, after) = state.cursor.split(&shown);
            Line::from(vec![
                Span::styled(before.to_string(), Style::default().fg(SOFT_WHITE)),
                Span::styled("│", Style::default().fg(GOLD)),
                Span::styled(after.to_string(), Style::default().fg(SOFT_WHITE)),
            ])
        } else {
            Line::from(Span::styled(shown, Style::default().fg(SOFT_WHITE)))
        }
    }

    /// Render one labelled input with its inline error
    fn render_field(&self, frame: &mut Frame, area: Rect, state: &OnboardingState, field: FieldId) {
        let focused = state.focused_field() == Some(field);
        let error = state.errors.get(field);

        let border_color = if error.is_some() {
            ERROR_RED
        } else if focused {
            GOLD
        } else {
            SUBDUED_BORDER
        };

        let mut title = vec![Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(if focused { GOLD } else { SOFT_WHITE }),
        )];
        if field.is_secret() && state.options.confirm_secrets {
            let hint = if state.is_masked(field) { "hidden" } else { "shown" };
            title.push(Span::styled(format!("({hint}) "), Style::default().fg(MUTED_GRAY)));
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(Self::field_line(state, field, focused)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(Line::from(title))
                .style(Style::default().bg(DARK_BG)),
        );
        frame.render_widget(input, rows[0]);

        if let Some(message) = error {
            let err = Paragraph::new(Span::styled(
                format!("  {message}"),
                Style::default().fg(ERROR_RED),
            ));
            frame.render_widget(err, rows[1]);
        }
    }

    fn render_fields(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &OnboardingState,
        fields: &[FieldId],
    ) {
        let mut constraints: Vec<Constraint> =
            fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, field) in fields.iter().enumerate() {
            self.render_field(frame, rows[idx], state, *field);
        }
    }

    /// Render identity step
    fn render_identity(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::step_block(OnboardingStep::Identity.description());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(12)])
            .split(inner);

        let desc = Paragraph::new(Span::styled(
            "We'll use this to set up your automation profile",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(desc, content_layout[0]);

        self.render_fields(frame, content_layout[1], state, state.fields());
    }

    /// Render niche selection step
    fn render_niche(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::step_block(OnboardingStep::Niche.description());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Min(8),    // Niche list
                Constraint::Length(2), // Instructions
            ])
            .split(inner);

        let desc = Paragraph::new(Span::styled(
            "What kind of content should we create for you?",
            Style::default().fg(SOFT_WHITE),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(desc, content_layout[0]);

        let items: Vec<ListItem> = Niche::all()
            .iter()
            .enumerate()
            .map(|(idx, niche)| {
                let is_selected = state.niche == Some(*niche);
                let is_highlighted = idx == state.niche_cursor;

                let (icon, icon_color) = if is_selected {
                    ("◉", SELECTION_GREEN)
                } else {
                    ("○", MUTED_GRAY)
                };

                let name_style = if is_selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };

                let bg_style = if is_highlighted {
                    Style::default().bg(Color::Rgb(40, 40, 60))
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {} ", idx + 1), Style::default().fg(MUTED_GRAY)),
                    Span::styled(icon, Style::default().fg(icon_color)),
                    Span::styled(format!(" {} ", niche.emoji()), Style::default()),
                    Span::styled(niche.name(), name_style),
                    Span::styled(
                        format!("  {}", niche.description()),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]))
                .style(bg_style)
            })
            .collect();

        let list = List::new(items).style(Style::default().bg(PANEL_BG));
        frame.render_widget(list, content_layout[1]);

        let instructions = match state.niche {
            Some(niche) => format!("Selected: {} • Press Enter to continue", niche.name()),
            None => "Use ↑/↓ and Space (or 1-6) to pick a niche".to_string(),
        };
        let instr_widget =
            Paragraph::new(Span::styled(instructions, Style::default().fg(MUTED_GRAY)))
                .alignment(Alignment::Center);
        frame.render_widget(instr_widget, content_layout[2]);
    }

    /// Render credentials step
    fn render_credentials(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::step_block(OnboardingStep::Credentials.description());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let per_platform = u16::try_from(state.fields().len() / 2).unwrap_or(3);
        let section_height = 1 + per_platform * FIELD_HEIGHT;

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(section_height),
                Constraint::Length(section_height),
                Constraint::Min(0),
            ])
            .split(inner);

        for (idx, platform) in [Platform::Instagram, Platform::YouTube].iter().enumerate() {
            let section = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(content_layout[idx]);

            let (glyph, color) = match platform {
                Platform::Instagram => ("◆ ", INSTAGRAM_PINK),
                Platform::YouTube => ("▶ ", YOUTUBE_RED),
            };
            let heading = Paragraph::new(Line::from(vec![
                Span::styled(glyph, Style::default().fg(color)),
                Span::styled(
                    platform.label(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
            ]));
            frame.render_widget(heading, section[0]);

            let fields: Vec<FieldId> = state
                .fields()
                .iter()
                .copied()
                .filter(|f| f.platform() == Some(*platform))
                .collect();
            self.render_fields(frame, section[1], state, &fields);
        }
    }

    /// Render success step
    fn render_success(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::step_block("All Set");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(4), // Success message
                Constraint::Min(5),    // Summary items
                Constraint::Length(3), // Finish button
            ])
            .split(inner);

        let success = vec![
            Line::from(Span::styled("🎉", Style::default())),
            Line::from(Span::styled(
                OnboardingStep::Success.description(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Sit back and watch your growth",
                Style::default().fg(MUTED_GRAY),
            )),
        ];
        let success_widget = Paragraph::new(success).alignment(Alignment::Center);
        frame.render_widget(success_widget, content_layout[0]);

        let bullets = [
            "Content will be posted automatically",
            "Engagement tracking starts immediately",
            "You'll receive weekly growth reports",
        ];
        let mut summary_items: Vec<Line> = bullets
            .iter()
            .map(|text| {
                Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(SELECTION_GREEN)),
                    Span::styled(*text, Style::default().fg(SOFT_WHITE)),
                ])
            })
            .collect();

        if let Some(niche) = state.niche {
            summary_items.push(Line::from(""));
            summary_items.push(Line::from(vec![
                Span::styled("  Niche: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("{} {}", niche.emoji(), niche.name()),
                    Style::default().fg(SOFT_WHITE),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(summary_items), content_layout[1]);

        let finish_hint = if state.is_finished() {
            "Setup complete"
        } else {
            " to finish"
        };
        let mut spans = Vec::new();
        if !state.is_finished() {
            spans.push(Span::styled("Press ", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled(
                "Enter",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(finish_hint, Style::default().fg(MUTED_GRAY)));
        let finish = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(finish, content_layout[2]);
    }

    fn action_label(step: OnboardingStep) -> &'static str {
        match step {
            OnboardingStep::Welcome => "Get Started",
            OnboardingStep::Identity | OnboardingStep::Niche => "Next",
            OnboardingStep::Credentials => "Activate Automation",
            OnboardingStep::Success => "Finish",
        }
    }

    fn key_hint(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str) {
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(key, Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(MUTED_GRAY)));
        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
    }

    /// Render navigation footer
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let step = state.current_step();
        let mut spans = vec![Span::styled("  ", Style::default())];

        if !state.fields().is_empty() {
            Self::key_hint(&mut spans, "Tab", "Next field");
        }
        if step == OnboardingStep::Credentials && state.options.confirm_secrets {
            Self::key_hint(&mut spans, "Ctrl+R", "Show/Hide");
        }

        // Primary action, muted while disabled
        let enabled = state.can_advance() || (state.is_final_step() && !state.is_finished());
        let (key_style, label_style) = if enabled {
            (Style::default().fg(GOLD), Style::default().fg(SOFT_WHITE))
        } else {
            (Style::default().fg(MUTED_GRAY), Style::default().fg(MUTED_GRAY))
        };
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Enter", key_style));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(format!(" {}", Self::action_label(step)), label_style));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Esc", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Quit", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
