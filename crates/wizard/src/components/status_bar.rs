use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::{
    action::Action,
    state::{Focus, State},
    style::Theme,
    tui::Frame,
};

/// Bottom line: step counter, key hints for the focused element and the
/// last reported error.
pub struct StatusBar {
    theme: Theme,
    error: Option<String>,
}

impl StatusBar {
    pub fn new(theme: Theme) -> Self {
        Self { theme, error: None }
    }

    fn hints(focus: Option<Focus>) -> &'static str {
        match focus {
            Some(Focus::Text(_)) => "Tab next field · Enter continue",
            Some(Focus::Option(..)) => "Space toggle · Tab next",
            Some(Focus::Button(_)) => "Enter press · Tab next",
            None => "Tab next",
        }
    }
}

impl Component for StatusBar {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(1)
    }

    fn update(&mut self, action: Action, _state: &mut State) -> Result<Option<Action>> {
        match action {
            Action::Error(msg) => self.error = Some(msg),
            Action::StepChanged(_) => self.error = None,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let steps = state.form.steps();
        let mut spans = vec![
            Span::styled(
                format!(" Step {}/{} ", steps.current_step() + 1, steps.step_count()),
                self.theme.focused(),
            ),
            Span::styled(
                format!("│ {} · PgDn/PgUp step · Esc quit ", Self::hints(state.focused())),
                self.theme.subtle(),
            ),
        ];
        if let Some(err) = &self.error {
            spans.push(Span::styled(
                format!("│ {err}"),
                Style::default().fg(self.theme.roles.danger),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
        Ok(())
    }
}
