//! Event wiring.
//!
//! `FormController` owns the step index and the view and exposes one method
//! per event a page can deliver: a delegated click, leaving an input, typing
//! into an input, clicking a choice and submitting the form.

use serde::Serialize;
use tracing::debug;

use crate::feedback::set_success;
use crate::field::{ChoiceGroup, InputStyle, PanelItem, TextField};
use crate::rules;
use crate::steps::StepController;
use crate::validator::{validate_group_input, validate_phone_input, validate_text_input};
use crate::view::FormView;

/// Role of a clicked element inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRole {
    Next,
    Previous,
    Ignored,
}

impl ClickRole {
    /// Resolve a role from the element's class list. `previous` wins over
    /// `next` when an element carries both.
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut role = ClickRole::Ignored;
        for class in classes {
            match class {
                "previous" => return ClickRole::Previous,
                "next" => role = ClickRole::Next,
                _ => {}
            }
        }
        role
    }
}

/// Values collected from an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub services: Vec<String>,
    pub budget: Option<String>,
    pub phone: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    /// Final-step validation failed; the form stays open.
    Rejected,
}

pub struct FormController<V: FormView> {
    steps: StepController,
    view: V,
}

impl<V: FormView> FormController<V> {
    /// Take ownership of `view` and show its first step.
    pub fn new(mut view: V) -> Self {
        let steps = StepController::new(view.panel_count());
        steps.synchronize_visuals(&mut view);
        Self { steps, view }
    }

    pub fn current_step(&self) -> usize {
        self.steps.current_step()
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Delegated click. Returns whether the step changed.
    ///
    /// `Previous` always steps back without validating. `Next` validates every
    /// control on the current panel and advances only if all of them passed.
    /// The last step has no `Next`; it is finished through `submit`.
    pub fn click(&mut self, role: ClickRole) -> bool {
        let before = self.steps.current_step();
        match role {
            ClickRole::Ignored => return false,
            ClickRole::Previous => {
                self.steps.retreat(&mut self.view);
            }
            ClickRole::Next => {
                if !self.steps.is_last() && self.validate_panel(before) {
                    self.steps.advance(&mut self.view);
                }
            }
        }
        self.steps.current_step() != before
    }

    /// Click on an element described by its class list.
    pub fn click_element<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) -> bool {
        self.click(ClickRole::from_classes(classes))
    }

    /// Run the rule of every control on panel `position`. All of them run so
    /// every failing message shows; `Company` has no rule and always passes.
    fn validate_panel(&mut self, position: usize) -> bool {
        let view = &mut self.view;
        view.panel_items(position)
            .into_iter()
            .fold(true, |all_valid, item| {
                let valid = match item {
                    PanelItem::Text(field) => validate_text_input(&mut *view, field).unwrap_or(true),
                    PanelItem::Group(group) => validate_group_input(&mut *view, group),
                };
                all_valid & valid
            })
    }

    /// Focus left `field`.
    pub fn blur(&mut self, field: TextField) -> Option<bool> {
        validate_text_input(&mut self.view, field)
    }

    /// `field` changed; re-validate only while it shows an error.
    pub fn input(&mut self, field: TextField) -> Option<bool> {
        if field.is_validated() && self.view.input_style(field) == InputStyle::Error {
            validate_text_input(&mut self.view, field)
        } else {
            None
        }
    }

    /// Store a new value for `field` and fire `input`.
    pub fn edit(&mut self, field: TextField, value: impl Into<String>) -> Option<bool> {
        self.view.set_text_value(field, value.into());
        self.input(field)
    }

    /// Click on a checkbox or radio option. Any click clears the group's
    /// message; the group is validated again on the next `Next`.
    pub fn toggle_option(&mut self, group: ChoiceGroup, option: usize) {
        self.view.toggle_choice(group, option);
        set_success(&mut self.view, group.into());
    }

    /// Final-step validation. A rejected submission leaves the phone message
    /// in the view.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !validate_phone_input(&mut self.view) {
            debug!("submission rejected");
            return SubmitOutcome::Rejected;
        }
        let submission = self.collect();
        debug!(services = submission.services.len(), "submission accepted");
        SubmitOutcome::Accepted(submission)
    }

    fn collect(&self) -> Submission {
        let labels = |group: ChoiceGroup| -> Vec<String> {
            self.view
                .checked_options(group)
                .into_iter()
                .filter_map(|i| self.view.option_label(group, i).map(str::to_string))
                .collect()
        };
        Submission {
            name: rules::trim_name(self.view.text_value(TextField::Name)).to_string(),
            email: self.view.text_value(TextField::Email).to_string(),
            services: labels(ChoiceGroup::Services),
            budget: labels(ChoiceGroup::Budget).into_iter().next(),
            phone: self.view.text_value(TextField::Phone).to_string(),
            company: self.view.text_value(TextField::Company).to_string(),
        }
    }
}
