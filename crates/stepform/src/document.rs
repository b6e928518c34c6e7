//! In-memory form document.
//!
//! `FormDocument` is the headless counterpart of a rendered page: it owns the
//! step panels, the overview markers, every input value and every feedback
//! slot, and implements `FormView` over them. Front ends render straight from
//! it; tests assert against it.
//!
//! The layout is checked once in `FormDocumentBuilder::build`, so lookups by
//! `TextField` / `ChoiceGroup` never fail afterwards.
//!
//! ```
//! use stepform::{ChoiceGroup, FormDocument, PanelItem, TextField};
//!
//! let doc = FormDocument::builder()
//!     .step("Who", [PanelItem::Text(TextField::Name), PanelItem::Text(TextField::Email)])
//!     .step("What", [PanelItem::Group(ChoiceGroup::Services)])
//!     .step("How much", [PanelItem::Group(ChoiceGroup::Budget)])
//!     .step("Reach you", [PanelItem::Text(TextField::Phone), PanelItem::Text(TextField::Company)])
//!     .options(ChoiceGroup::Services, ["Web", "Mobile"])
//!     .options(ChoiceGroup::Budget, ["Small", "Large"])
//!     .build()
//!     .unwrap();
//! assert_eq!(doc.panels().len(), 4);
//! ```

use std::collections::HashSet;

use strum::{EnumCount, IntoEnumIterator};

use crate::error::LayoutError;
use crate::field::{ChoiceGroup, ChoiceKind, FeedbackTarget, InputStyle, PanelItem, TextField};
use crate::view::FormView;

/// Titles of the four standard steps.
pub const STANDARD_TITLES: [&str; 4] = ["Your details", "Services", "Budget", "Contact"];

/// Controls of the four standard steps, in order.
pub fn standard_steps() -> [Vec<PanelItem>; 4] {
    [
        vec![PanelItem::Text(TextField::Name), PanelItem::Text(TextField::Email)],
        vec![PanelItem::Group(ChoiceGroup::Services)],
        vec![PanelItem::Group(ChoiceGroup::Budget)],
        vec![PanelItem::Text(TextField::Phone), PanelItem::Text(TextField::Company)],
    ]
}

/// Error-message slot sitting next to an input or group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSlot {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub field: TextField,
    pub value: String,
    pub style: InputStyle,
    pub feedback: MessageSlot,
}

impl TextInput {
    fn new(field: TextField) -> Self {
        Self {
            field,
            value: String::new(),
            style: InputStyle::Neutral,
            feedback: MessageSlot::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroupState {
    pub group: ChoiceGroup,
    pub options: Vec<ChoiceOption>,
    pub feedback: MessageSlot,
}

impl ChoiceGroupState {
    fn new(group: ChoiceGroup, labels: Vec<String>) -> Self {
        Self {
            group,
            options: labels
                .into_iter()
                .map(|label| ChoiceOption {
                    label,
                    checked: false,
                })
                .collect(),
            feedback: MessageSlot::default(),
        }
    }

    pub fn kind(&self) -> ChoiceKind {
        self.group.kind()
    }
}

/// One step section of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub items: Vec<PanelItem>,
    pub active: bool,
}

/// One overview indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct FormDocument {
    panels: Vec<Panel>,
    markers: Vec<Marker>,
    inputs: [TextInput; TextField::COUNT],
    groups: [ChoiceGroupState; ChoiceGroup::COUNT],
}

impl FormDocument {
    pub fn builder() -> FormDocumentBuilder {
        FormDocumentBuilder::default()
    }

    /// The standard four-step layout with the given option labels.
    pub fn standard<S, B>(services: S, budgets: B) -> Result<Self, LayoutError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        STANDARD_TITLES
            .into_iter()
            .zip(standard_steps())
            .fold(Self::builder(), |b, (title, items)| b.step(title, items))
            .options(ChoiceGroup::Services, services)
            .options(ChoiceGroup::Budget, budgets)
            .build()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The first panel flagged active, if any.
    pub fn active_panel(&self) -> Option<(usize, &Panel)> {
        self.panels.iter().enumerate().find(|(_, p)| p.active)
    }

    pub fn input(&self, field: TextField) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn group(&self, group: ChoiceGroup) -> &ChoiceGroupState {
        &self.groups[group.index()]
    }

    pub fn inputs(&self) -> impl Iterator<Item = &TextInput> {
        self.inputs.iter()
    }

    fn slot_mut(&mut self, target: FeedbackTarget) -> &mut MessageSlot {
        match target {
            FeedbackTarget::Field(field) => &mut self.inputs[field.index()].feedback,
            FeedbackTarget::Group(group) => &mut self.groups[group.index()].feedback,
        }
    }
}

impl FormView for FormDocument {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn set_panel_active(&mut self, position: usize, active: bool) {
        if let Some(panel) = self.panels.get_mut(position) {
            panel.active = active;
        }
    }

    fn set_marker_current(&mut self, position: usize, current: bool) {
        if let Some(marker) = self.markers.get_mut(position) {
            marker.current = current;
        }
    }

    fn panel_items(&self, position: usize) -> Vec<PanelItem> {
        self.panels
            .get(position)
            .map(|panel| panel.items.clone())
            .unwrap_or_default()
    }

    fn text_value(&self, field: TextField) -> &str {
        &self.inputs[field.index()].value
    }

    fn set_text_value(&mut self, field: TextField, value: String) {
        self.inputs[field.index()].value = value;
    }

    fn checked_options(&self, group: ChoiceGroup) -> Vec<usize> {
        self.groups[group.index()]
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.checked)
            .map(|(i, _)| i)
            .collect()
    }

    fn toggle_choice(&mut self, group: ChoiceGroup, option: usize) {
        let state = &mut self.groups[group.index()];
        if option >= state.options.len() {
            return;
        }
        match group.kind() {
            ChoiceKind::Checkbox => {
                let o = &mut state.options[option];
                o.checked = !o.checked;
            }
            ChoiceKind::Radio => {
                for (i, o) in state.options.iter_mut().enumerate() {
                    o.checked = i == option;
                }
            }
        }
    }

    fn option_label(&self, group: ChoiceGroup, option: usize) -> Option<&str> {
        self.groups[group.index()]
            .options
            .get(option)
            .map(|o| o.label.as_str())
    }

    fn input_style(&self, field: TextField) -> InputStyle {
        self.inputs[field.index()].style
    }

    fn set_input_style(&mut self, field: TextField, style: InputStyle) {
        self.inputs[field.index()].style = style;
    }

    fn set_message(&mut self, target: FeedbackTarget, message: &str, visible: bool) {
        let slot = self.slot_mut(target);
        slot.text = message.to_string();
        slot.visible = visible;
    }
}

/// Collects steps and options, then checks the layout in `build`.
#[derive(Debug, Default, Clone)]
pub struct FormDocumentBuilder {
    steps: Vec<(String, Vec<PanelItem>)>,
    markers: Option<Vec<String>>,
    options: [Vec<String>; ChoiceGroup::COUNT],
}

impl FormDocumentBuilder {
    /// Append a step panel. Unless `markers` is called, each step also gets
    /// an overview marker labelled with its title.
    pub fn step(
        mut self,
        title: impl Into<String>,
        items: impl IntoIterator<Item = PanelItem>,
    ) -> Self {
        self.steps
            .push((title.into(), items.into_iter().collect()));
        self
    }

    /// Override the overview marker labels.
    pub fn markers<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.markers = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn options<I>(mut self, group: ChoiceGroup, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.options[group.index()] = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<FormDocument, LayoutError> {
        if self.steps.is_empty() {
            return Err(LayoutError::NoSteps);
        }

        let mut placed = HashSet::new();
        for item in self.steps.iter().flat_map(|(_, items)| items.iter()) {
            if !placed.insert(*item) {
                return Err(LayoutError::DuplicateControl(*item));
            }
        }
        let required = TextField::iter()
            .map(PanelItem::Text)
            .chain(ChoiceGroup::iter().map(PanelItem::Group));
        for item in required {
            if !placed.contains(&item) {
                return Err(LayoutError::MissingControl(item));
            }
        }
        for group in ChoiceGroup::iter() {
            if self.options[group.index()].is_empty() {
                return Err(LayoutError::EmptyGroup(group));
            }
        }

        let markers = self
            .markers
            .unwrap_or_else(|| self.steps.iter().map(|(title, _)| title.clone()).collect())
            .into_iter()
            .map(|label| Marker {
                label,
                current: false,
            })
            .collect();
        let panels = self
            .steps
            .into_iter()
            .map(|(title, items)| Panel {
                title,
                items,
                active: false,
            })
            .collect();
        let mut options = self.options;
        let mut take = |group: ChoiceGroup| std::mem::take(&mut options[group.index()]);

        Ok(FormDocument {
            panels,
            markers,
            inputs: [
                TextInput::new(TextField::Name),
                TextInput::new(TextField::Email),
                TextInput::new(TextField::Phone),
                TextInput::new(TextField::Company),
            ],
            groups: [
                ChoiceGroupState::new(ChoiceGroup::Services, take(ChoiceGroup::Services)),
                ChoiceGroupState::new(ChoiceGroup::Budget, take(ChoiceGroup::Budget)),
            ],
        })
    }
}
