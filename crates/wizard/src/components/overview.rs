use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::{state::State, style::Theme, tui::Frame};

/// Step overview: one marker per step, the current one highlighted.
pub struct Overview {
    title: String,
    theme: Theme,
}

impl Overview {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            theme,
        }
    }

    fn markers(&self, state: &State) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, marker) in state.form.view().markers().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ── ", self.theme.subtle()));
            }
            let (glyph, style) = if marker.current {
                (
                    "●",
                    Style::default()
                        .fg(self.theme.roles.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", Style::default().fg(self.theme.roles.muted))
            };
            spans.push(Span::styled(format!("{glyph} {}", marker.label), style));
        }
        Line::from(spans)
    }
}

impl Component for Overview {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(3)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_style(self.theme.focused())
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.theme.roles.muted));
        f.render_widget(Paragraph::new(self.markers(state)).centered().block(block), area);
        Ok(())
    }
}
