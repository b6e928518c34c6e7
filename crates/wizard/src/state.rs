use stepform::{
    ChoiceGroup, ClickRole, FormController, FormDocument, PanelItem, Submission, TextField,
};

/// A focusable element of the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text(TextField),
    Option(ChoiceGroup, usize),
    Button(Button),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Next,
    Previous,
    Submit,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Next => "Next",
            Button::Previous => "Previous",
            Button::Submit => "Submit",
        }
    }

    /// Class list the button would carry on a page.
    pub fn classes(self) -> [&'static str; 2] {
        match self {
            Button::Next => ["btn", "next"],
            Button::Previous => ["btn", "previous"],
            Button::Submit => ["btn", "submit"],
        }
    }
}

pub struct State {
    pub form: FormController<FormDocument>,
    /// Position in `focus_ring()`.
    pub focus: usize,
    pub submission: Option<Submission>,
}

impl State {
    pub fn new(document: FormDocument) -> Self {
        Self {
            form: FormController::new(document),
            focus: 0,
            submission: None,
        }
    }

    /// Focusable elements of the active step: its controls in order, then
    /// the forward button, then `Previous` when there is a step behind.
    pub fn focus_ring(&self) -> Vec<Focus> {
        let doc = self.form.view();
        let mut ring = Vec::new();
        if let Some((_, panel)) = doc.active_panel() {
            for item in &panel.items {
                match *item {
                    PanelItem::Text(field) => ring.push(Focus::Text(field)),
                    PanelItem::Group(group) => ring.extend(
                        (0..doc.group(group).options.len()).map(|i| Focus::Option(group, i)),
                    ),
                }
            }
        }
        let steps = self.form.steps();
        ring.push(Focus::Button(if steps.is_last() {
            Button::Submit
        } else {
            Button::Next
        }));
        if !steps.is_first() {
            ring.push(Focus::Button(Button::Previous));
        }
        ring
    }

    pub fn focused(&self) -> Option<Focus> {
        self.focus_ring().get(self.focus).copied()
    }

    /// Fire `blur` on the focused text field, if any.
    pub fn blur_focused(&mut self) {
        if let Some(Focus::Text(field)) = self.focused() {
            self.form.blur(field);
        }
    }

    /// Move focus around the ring, leaving the current element first.
    pub fn move_focus(&mut self, forward: bool) {
        let len = self.focus_ring().len();
        if len == 0 {
            return;
        }
        self.blur_focused();
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    pub fn focus_on(&mut self, target: Focus) {
        if let Some(i) = self.focus_ring().iter().position(|f| *f == target) {
            self.focus = i;
        }
    }

    /// Delegated click; focus restarts at the top of a new step.
    pub fn click(&mut self, role: ClickRole) -> bool {
        let changed = self.form.click(role);
        if changed {
            self.focus = 0;
        }
        changed
    }
}
