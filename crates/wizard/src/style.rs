//! Semantic colors for the wizard. Components ask for a role, never for a
//! concrete color.

use ratatui::style::{Color, Modifier, Style};
use stepform::InputStyle;

#[derive(Debug, Clone)]
pub struct RoleColors {
    pub text: Color,
    pub subtle_text: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub muted: Color,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub roles: RoleColors,
}

impl Default for Theme {
    fn default() -> Self {
        default_dark_theme()
    }
}

impl Theme {
    /// Value color of a text input in the given validation style.
    pub fn input(&self, style: InputStyle) -> Style {
        match style {
            InputStyle::Neutral => Style::default().fg(self.roles.text),
            InputStyle::Error => Style::default().fg(self.roles.danger),
            InputStyle::Success => Style::default().fg(self.roles.success),
        }
    }

    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.roles.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtle(&self) -> Style {
        Style::default().fg(self.roles.subtle_text)
    }

    pub fn message(&self) -> Style {
        Style::default().fg(self.roles.danger)
    }
}

pub fn default_dark_theme() -> Theme {
    Theme {
        roles: RoleColors {
            text: Color::Rgb(220, 220, 220),
            subtle_text: Color::Rgb(130, 130, 130),
            primary: Color::Rgb(255, 154, 79), // warm orange
            accent: Color::Rgb(99, 205, 218),  // teal-cyan
            success: Color::Rgb(102, 187, 106),
            danger: Color::Rgb(239, 83, 80),
            muted: Color::Rgb(120, 120, 128),
        },
    }
}
