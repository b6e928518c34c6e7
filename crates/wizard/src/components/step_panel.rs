use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use stepform::{ChoiceKind, ClickRole, MessageSlot, PanelItem, SubmitOutcome, TextField};
use tracing::info;
use tui_input::{Input, InputRequest};

use super::Component;
use crate::{
    action::Action,
    state::{Button, Focus, State},
    style::Theme,
    tui::{EventResponse, Frame},
};

/// Label column width, including the `": "` separator.
const LABEL_WIDTH: usize = 10;

/// The active step: its inputs, choice groups and buttons.
pub struct StepPanel {
    theme: Theme,
    input: Input,
    /// Field mirrored by `input`.
    editing: Option<TextField>,
}

impl StepPanel {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            input: Input::default(),
            editing: None,
        }
    }

    /// Point `input` at the focused text field, picking up its stored value.
    fn sync_input(&mut self, state: &State) {
        match state.focused() {
            Some(Focus::Text(field)) if self.editing != Some(field) => {
                self.input = Input::new(state.form.view().input(field).value.clone());
                self.editing = Some(field);
            }
            Some(Focus::Text(_)) => {}
            _ => self.editing = None,
        }
    }

    fn edit(&mut self, state: &mut State, requests: impl IntoIterator<Item = InputRequest>) {
        let Some(field) = self.editing else {
            return;
        };
        let mut changed = false;
        for req in requests {
            changed |= self.input.handle(req).is_some();
        }
        if changed {
            state.form.edit(field, self.input.value());
        }
    }

    fn press(&mut self, button: Button, state: &mut State) -> Action {
        if button == Button::Submit {
            return self.submit(state);
        }
        state.blur_focused();
        if state.click(ClickRole::from_classes(button.classes())) {
            Action::StepChanged(state.form.current_step())
        } else {
            Action::Update
        }
    }

    fn submit(&mut self, state: &mut State) -> Action {
        match state.form.submit() {
            SubmitOutcome::Accepted(submission) => {
                info!(services = submission.services.len(), "form submitted");
                state.submission = Some(submission);
                Action::Submitted
            }
            SubmitOutcome::Rejected => {
                state.focus_on(Focus::Text(TextField::Phone));
                Action::Update
            }
        }
    }

    fn message_line(&self, slot: &MessageSlot) -> Option<Line<'static>> {
        slot.visible.then(|| {
            Line::styled(
                format!("{:w$}✗ {}", "", slot.text, w = LABEL_WIDTH),
                self.theme.message(),
            )
        })
    }
}

/// Visible part of the edited value in a `width`-cell column and the cursor
/// offset inside it, scrolled so the cursor stays in view.
fn scrolled(input: &Input, width: usize) -> (String, usize) {
    let width = width.max(1);
    let cursor = input.cursor();
    let scroll = cursor.saturating_sub(width - 1);
    let visible = input.value().chars().skip(scroll).take(width).collect();
    (visible, cursor - scroll)
}

fn input_request(key: KeyEvent) -> Option<InputRequest> {
    use InputRequest::*;
    match (key.code, key.modifiers) {
        (KeyCode::Backspace, KeyModifiers::NONE) => Some(DeletePrevChar),
        (KeyCode::Delete, KeyModifiers::NONE) => Some(DeleteNextChar),
        (KeyCode::Left, KeyModifiers::NONE) => Some(GoToPrevChar),
        (KeyCode::Right, KeyModifiers::NONE) => Some(GoToNextChar),
        (KeyCode::Left, KeyModifiers::CONTROL) => Some(GoToPrevWord),
        (KeyCode::Right, KeyModifiers::CONTROL) => Some(GoToNextWord),
        (KeyCode::Home, _) => Some(GoToStart),
        (KeyCode::End, _) => Some(GoToEnd),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(DeleteLine),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Some(DeletePrevWord),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(InsertChar(c)),
        _ => None,
    }
}

impl Component for StepPanel {
    fn init(&mut self, state: &State) -> Result<()> {
        self.sync_input(state);
        Ok(())
    }

    fn height_constraint(&self) -> Constraint {
        Constraint::Min(8)
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        self.sync_input(state);
        let action = match (key.code, state.focused()) {
            (KeyCode::Tab | KeyCode::Down, _) => {
                state.move_focus(true);
                Action::Update
            }
            (KeyCode::BackTab | KeyCode::Up, _) => {
                state.move_focus(false);
                Action::Update
            }
            (KeyCode::PageDown, _) => self.press(Button::Next, state),
            (KeyCode::PageUp, _) => self.press(Button::Previous, state),
            (KeyCode::Enter, Some(Focus::Button(button))) => self.press(button, state),
            (KeyCode::Enter, Some(Focus::Text(_))) => {
                state.move_focus(true);
                Action::Update
            }
            (KeyCode::Enter | KeyCode::Char(' '), Some(Focus::Option(group, option))) => {
                state.form.toggle_option(group, option);
                Action::Update
            }
            (_, Some(Focus::Text(_))) => match input_request(key) {
                Some(req) => {
                    self.edit(state, [req]);
                    Action::Update
                }
                None => return Ok(None),
            },
            _ => return Ok(None),
        };
        self.sync_input(state);
        Ok(Some(EventResponse::Stop(action)))
    }

    fn handle_paste(
        &mut self,
        text: String,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        self.sync_input(state);
        if self.editing.is_none() {
            return Ok(None);
        }
        let chars = text.chars().filter(|c| !c.is_control());
        self.edit(state, chars.map(InputRequest::InsertChar));
        Ok(Some(EventResponse::Stop(Action::Update)))
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        self.sync_input(state);
        let doc = state.form.view();
        let Some((index, panel)) = doc.active_panel() else {
            return Ok(());
        };
        let focused = state.focused();

        let block = Block::bordered()
            .title(format!(" {}. {} ", index + 1, panel.title))
            .title_style(self.theme.focused())
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.theme.roles.muted));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let value_width = usize::from(inner.width).saturating_sub(LABEL_WIDTH);
        let mut lines: Vec<Line> = Vec::new();
        let mut cursor = None;
        for item in &panel.items {
            match *item {
                PanelItem::Text(field) => {
                    let input = doc.input(field);
                    let has_focus = focused == Some(Focus::Text(field));
                    let (label_style, value) = if has_focus {
                        let (visible, offset) = scrolled(&self.input, value_width);
                        cursor = Some((lines.len(), LABEL_WIDTH + offset));
                        (self.theme.focused(), visible)
                    } else {
                        (self.theme.subtle(), input.value.clone())
                    };
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{:>w$}: ", field.label(), w = LABEL_WIDTH - 2),
                            label_style,
                        ),
                        Span::styled(value, self.theme.input(input.style)),
                    ]));
                    lines.extend(self.message_line(&input.feedback));
                }
                PanelItem::Group(group) => {
                    let choices = doc.group(group);
                    lines.push(Line::styled(group.label(), self.theme.subtle()));
                    for (i, option) in choices.options.iter().enumerate() {
                        let mark = match (choices.kind(), option.checked) {
                            (ChoiceKind::Checkbox, true) => "[x]",
                            (ChoiceKind::Checkbox, false) => "[ ]",
                            (ChoiceKind::Radio, true) => "(•)",
                            (ChoiceKind::Radio, false) => "( )",
                        };
                        let style = if focused == Some(Focus::Option(group, i)) {
                            self.theme.focused().add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default().fg(self.theme.roles.text)
                        };
                        lines.push(Line::styled(format!("  {mark} {}", option.label), style));
                    }
                    lines.extend(self.message_line(&choices.feedback));
                }
            }
            lines.push(Line::default());
        }

        let mut buttons = Vec::new();
        for focus in state.focus_ring() {
            let Focus::Button(button) = focus else {
                continue;
            };
            let style = if focused == Some(focus) {
                self.theme.focused().add_modifier(Modifier::REVERSED)
            } else {
                self.theme.subtle()
            };
            buttons.push(Span::styled(format!("[ {} ]", button.label()), style));
            buttons.push(Span::raw("  "));
        }
        lines.push(Line::from(buttons));

        f.render_widget(Paragraph::new(lines), inner);
        if let Some((row, col)) = cursor {
            if row < usize::from(inner.height) && col < usize::from(inner.width) {
                f.set_cursor_position((inner.x + col as u16, inner.y + row as u16));
            }
        }
        Ok(())
    }
}
