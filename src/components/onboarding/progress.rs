// ABOUTME: Step progress indicator for the onboarding header
// Markers are derived only from the current step and total step count

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::state::OnboardingStep;

const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// Visual state of one step marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Completed,
    Active,
    Pending,
}

/// One numbered marker in the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMarker {
    pub number: usize,
    pub state: MarkerState,
    /// Connector after this marker is lit (step already passed)
    pub connector_lit: Option<bool>,
}

/// Build markers for steps `1..=total`
pub fn markers(current: usize, total: usize) -> Vec<StepMarker> {
    (1..=total)
        .map(|number| {
            let state = if number < current {
                MarkerState::Completed
            } else if number == current {
                MarkerState::Active
            } else {
                MarkerState::Pending
            };
            let connector_lit = (number < total).then_some(number < current);
            StepMarker {
                number,
                state,
                connector_lit,
            }
        })
        .collect()
}

pub struct ProgressIndicator;

impl ProgressIndicator {
    /// Spans for the marker row
    pub fn line(current: usize, total: usize) -> Line<'static> {
        let mut spans = Vec::new();

        for marker in markers(current, total) {
            let (icon, style) = match marker.state {
                MarkerState::Completed => ("✓".to_string(), Style::default().fg(SELECTION_GREEN)),
                MarkerState::Active => (
                    marker.number.to_string(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                MarkerState::Pending => (marker.number.to_string(), Style::default().fg(MUTED_GRAY)),
            };

            spans.push(Span::styled("(", style));
            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(")", style));

            if let Some(lit) = marker.connector_lit {
                let color = if lit { SELECTION_GREEN } else { SUBDUED_BORDER };
                spans.push(Span::styled("───", Style::default().fg(color)));
            }
        }

        Line::from(spans)
    }

    pub fn render(frame: &mut Frame, area: Rect, current: usize, total: usize) {
        let mut lines = vec![Self::line(current, total)];

        if let Some(step) = OnboardingStep::from_number(current) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Step {current} of {total}: "),
                    Style::default().fg(MUTED_GRAY),
                ),
                Span::styled(step.title(), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        let progress = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_first_step() {
        let m = markers(1, 5);
        assert_eq!(m.len(), 5);
        assert_eq!(m[0].state, MarkerState::Active);
        assert!(m[1..].iter().all(|x| x.state == MarkerState::Pending));
        assert_eq!(m[4].connector_lit, None);
        assert_eq!(m[0].connector_lit, Some(false));
    }

    #[test]
    fn test_markers_middle_step() {
        let m = markers(3, 5);
        assert_eq!(m[0].state, MarkerState::Completed);
        assert_eq!(m[1].state, MarkerState::Completed);
        assert_eq!(m[2].state, MarkerState::Active);
        assert_eq!(m[3].state, MarkerState::Pending);
        assert_eq!(m[1].connector_lit, Some(true));
        assert_eq!(m[2].connector_lit, Some(false));
    }

    #[test]
    fn test_line_text() {
        let text: String = ProgressIndicator::line(2, 3)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "(✓)───(2)───(3)");
    }
}
