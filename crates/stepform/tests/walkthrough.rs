//! End-to-end walkthroughs of the four-step form:
//! - the in-memory `FormDocument`
//! - a class-list view that records markers the way a page would

use std::collections::{BTreeSet, HashMap};

use pretty_assertions::assert_eq;
use stepform::document::standard_steps;
use stepform::{
    ChoiceGroup, ClickRole, FeedbackTarget, FormController, FormDocument, FormView, InputStyle,
    PanelItem, SubmitOutcome, TextField,
};

fn standard() -> FormController<FormDocument> {
    let doc = FormDocument::standard(
        ["Development", "Web Design", "Marketing"],
        ["$5.000 - $10.000", "$10.000 - $20.000", "$20.000+"],
    )
    .expect("standard layout");
    FormController::new(doc)
}

fn active_positions(doc: &FormDocument) -> (Vec<usize>, Vec<usize>) {
    let panels = doc
        .panels()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.active)
        .map(|(i, _)| i)
        .collect();
    let markers = doc
        .markers()
        .iter()
        .enumerate()
        .filter(|(_, m)| m.current)
        .map(|(i, _)| i)
        .collect();
    (panels, markers)
}

#[test]
fn next_then_previous_without_revalidation() {
    let mut form = standard();
    form.edit(TextField::Name, "Grace");
    form.edit(TextField::Email, "grace@navy.mil");

    assert!(form.click_element(["button", "next"]));
    assert_eq!(form.current_step(), 1);
    assert_eq!(active_positions(form.view()), (vec![1], vec![1]));

    // break step one; going back must not touch its feedback
    form.edit(TextField::Email, "broken");
    assert!(form.click_element(["button", "previous"]));
    assert_eq!(form.current_step(), 0);
    assert_eq!(active_positions(form.view()), (vec![0], vec![0]));
    assert_eq!(form.view().input(TextField::Email).style, InputStyle::Success);
    assert!(!form.view().input(TextField::Email).feedback.visible);
}

#[test]
fn full_walkthrough_to_submission() {
    let mut form = standard();

    form.edit(TextField::Name, "Grace Hopper");
    form.edit(TextField::Email, "grace@navy.mil");
    assert!(form.click(ClickRole::Next));

    assert!(!form.click(ClickRole::Next), "no service checked");
    assert_eq!(form.current_step(), 1);
    form.toggle_option(ChoiceGroup::Services, 2);
    assert!(form.click(ClickRole::Next));

    assert!(!form.click(ClickRole::Next), "no budget picked");
    assert_eq!(
        form.view().group(ChoiceGroup::Budget).feedback.text,
        "Select a budget"
    );
    form.toggle_option(ChoiceGroup::Budget, 0);
    form.toggle_option(ChoiceGroup::Budget, 2);
    assert!(form.click(ClickRole::Next));
    assert_eq!(form.current_step(), 3);
    assert!(form.steps().is_last());

    form.edit(TextField::Phone, "12345abcde");
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(
        form.view().input(TextField::Phone).feedback.text,
        "Enter numbers only"
    );

    form.edit(TextField::Phone, "5551234567");
    let SubmitOutcome::Accepted(submission) = form.submit() else {
        panic!("submission should pass");
    };
    let json = serde_json::to_value(&submission).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@navy.mil",
            "services": ["Marketing"],
            "budget": "$20.000+",
            "phone": "5551234567",
            "company": ""
        })
    );
}

#[test]
fn exclusivity_holds_for_any_click_sequence() {
    let mut form = standard();
    form.edit(TextField::Name, "Grace");
    form.edit(TextField::Email, "grace@navy.mil");
    form.toggle_option(ChoiceGroup::Services, 0);
    form.toggle_option(ChoiceGroup::Budget, 1);

    let clicks = [
        ClickRole::Previous,
        ClickRole::Next,
        ClickRole::Next,
        ClickRole::Previous,
        ClickRole::Next,
        ClickRole::Next,
        ClickRole::Next,
        ClickRole::Next,
        ClickRole::Previous,
        ClickRole::Previous,
        ClickRole::Previous,
        ClickRole::Previous,
    ];
    for role in clicks {
        form.click(role);
        let i = form.current_step();
        assert!(i < 4);
        assert_eq!(active_positions(form.view()), (vec![i], vec![i]));
    }
    assert_eq!(form.current_step(), 0);
}

#[test]
fn next_validates_whatever_the_panel_holds() {
    let doc = FormDocument::builder()
        .step("About you", [PanelItem::Text(TextField::Name), PanelItem::Text(TextField::Email)])
        .step(
            "Project",
            [PanelItem::Group(ChoiceGroup::Services), PanelItem::Group(ChoiceGroup::Budget)],
        )
        .step("Reach you", [PanelItem::Text(TextField::Phone), PanelItem::Text(TextField::Company)])
        .options(ChoiceGroup::Services, ["Web", "Mobile"])
        .options(ChoiceGroup::Budget, ["Small", "Large"])
        .build()
        .expect("three-step layout");
    let mut form = FormController::new(doc);
    form.edit(TextField::Name, "Grace");
    form.edit(TextField::Email, "grace@navy.mil");
    assert!(form.click(ClickRole::Next));

    // services alone is not enough, budget shares the panel
    form.toggle_option(ChoiceGroup::Services, 0);
    assert!(!form.click(ClickRole::Next));
    assert_eq!(form.current_step(), 1);
    let budget = &form.view().group(ChoiceGroup::Budget).feedback;
    assert_eq!((budget.text.as_str(), budget.visible), ("Select a budget", true));
    assert!(!form.view().group(ChoiceGroup::Services).feedback.visible);

    form.toggle_option(ChoiceGroup::Budget, 1);
    assert!(form.click(ClickRole::Next));
    assert_eq!(form.current_step(), 2);
    assert!(form.steps().is_last());
    assert!(!form.click(ClickRole::Next));
    assert_eq!(form.view().input(TextField::Phone).style, InputStyle::Neutral);

    form.edit(TextField::Phone, "5551234567");
    let SubmitOutcome::Accepted(submission) = form.submit() else {
        panic!("submission should pass");
    };
    assert_eq!(submission.budget.as_deref(), Some("Large"));
}

/// A page-like view: every element is a class set plus a text slot.
#[derive(Default)]
struct ClassListView {
    panels: Vec<BTreeSet<&'static str>>,
    markers: Vec<BTreeSet<&'static str>>,
    items: Vec<Vec<PanelItem>>,
    values: HashMap<TextField, String>,
    classes: HashMap<TextField, BTreeSet<&'static str>>,
    checked: HashMap<ChoiceGroup, Vec<bool>>,
    messages: HashMap<FeedbackTarget, (String, bool)>,
}

impl ClassListView {
    fn new(steps: usize) -> Self {
        let mut view = Self {
            panels: vec![BTreeSet::new(); steps],
            markers: vec![BTreeSet::new(); steps],
            items: standard_steps().into_iter().take(steps).collect(),
            ..Self::default()
        };
        view.checked.insert(ChoiceGroup::Services, vec![false; 3]);
        view.checked.insert(ChoiceGroup::Budget, vec![false; 2]);
        view
    }

    fn toggle(set: &mut BTreeSet<&'static str>, class: &'static str, on: bool) {
        if on {
            set.insert(class);
        } else {
            set.remove(class);
        }
    }
}

impl FormView for ClassListView {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn set_panel_active(&mut self, position: usize, active: bool) {
        Self::toggle(&mut self.panels[position], "active", active);
    }

    fn set_marker_current(&mut self, position: usize, current: bool) {
        Self::toggle(&mut self.markers[position], "current-step", current);
    }

    fn panel_items(&self, position: usize) -> Vec<PanelItem> {
        self.items.get(position).cloned().unwrap_or_default()
    }

    fn text_value(&self, field: TextField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    fn set_text_value(&mut self, field: TextField, value: String) {
        self.values.insert(field, value);
    }

    fn checked_options(&self, group: ChoiceGroup) -> Vec<usize> {
        self.checked[&group]
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| i)
            .collect()
    }

    fn toggle_choice(&mut self, group: ChoiceGroup, option: usize) {
        let boxes = self.checked.get_mut(&group).expect("group exists");
        boxes[option] = !boxes[option];
    }

    fn option_label(&self, _group: ChoiceGroup, _option: usize) -> Option<&str> {
        Some("option")
    }

    fn input_style(&self, field: TextField) -> InputStyle {
        match self.classes.get(&field) {
            Some(c) if c.contains("input-error") => InputStyle::Error,
            Some(c) if c.contains("input-success") => InputStyle::Success,
            _ => InputStyle::Neutral,
        }
    }

    fn set_input_style(&mut self, field: TextField, style: InputStyle) {
        let set = self.classes.entry(field).or_default();
        Self::toggle(set, "input-error", style == InputStyle::Error);
        Self::toggle(set, "input-success", style == InputStyle::Success);
    }

    fn set_message(&mut self, target: FeedbackTarget, message: &str, visible: bool) {
        self.messages.insert(target, (message.to_string(), visible));
    }
}

#[test]
fn controller_drives_any_view() {
    let mut form = FormController::new(ClassListView::new(4));
    assert!(form.view().panels[0].contains("active"));
    assert!(form.view().markers[0].contains("current-step"));

    assert!(!form.click(ClickRole::Next));
    let view = form.view();
    assert!(view.classes[&TextField::Name].contains("input-error"));
    assert_eq!(
        view.messages[&FeedbackTarget::Field(TextField::Name)],
        ("Name is required".to_string(), true)
    );

    form.edit(TextField::Name, "Grace");
    form.edit(TextField::Email, "grace@navy.mil");
    assert!(form.view().classes[&TextField::Name].contains("input-success"));
    assert!(!form.view().classes[&TextField::Name].contains("input-error"));

    assert!(form.click(ClickRole::Next));
    let view = form.view();
    assert!(!view.panels[0].contains("active"));
    assert!(view.panels[1].contains("active"));
    assert!(view.markers[1].contains("current-step"));

    assert!(!form.click(ClickRole::Next));
    assert_eq!(
        form.view().messages[&FeedbackTarget::Group(ChoiceGroup::Services)],
        ("Select at least one option".to_string(), true)
    );
    assert!(!form.view().classes.contains_key(&TextField::Phone));
}
