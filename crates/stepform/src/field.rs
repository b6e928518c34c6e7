//! Field handles & presentation markers.
//!
//! These are the stable names the controller uses to address the view:
//! - `TextField`: single-line text inputs
//! - `ChoiceGroup`: checkbox / radio groups, addressed as a whole
//! - `FeedbackTarget`: anything that owns an error-message slot
//! - `InputStyle`: the error/success marker a text input carries
//!
//! Iteration always goes through `TextField::iter()` / `ChoiceGroup::iter()`
//! so the order is fixed and independent of how a view stores its controls.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// A named text input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Name,
    Email,
    Phone,
    Company,
}

impl TextField {
    /// Slot index inside fixed-size per-field storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            TextField::Name => "Name",
            TextField::Email => "Email",
            TextField::Phone => "Phone",
            TextField::Company => "Company",
        }
    }

    /// Whether any rule is attached to this field.
    pub fn is_validated(self) -> bool {
        !matches!(self, TextField::Company)
    }
}

/// Checkbox groups allow any number of checked options, radio groups at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceKind {
    Checkbox,
    Radio,
}

/// A named group of checkbox or radio options.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChoiceGroup {
    Services,
    Budget,
}

impl ChoiceGroup {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> ChoiceKind {
        match self {
            ChoiceGroup::Services => ChoiceKind::Checkbox,
            ChoiceGroup::Budget => ChoiceKind::Radio,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChoiceGroup::Services => "Services",
            ChoiceGroup::Budget => "Budget",
        }
    }
}

/// Something placed on a step panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelItem {
    Text(TextField),
    Group(ChoiceGroup),
}

impl std::fmt::Display for PanelItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelItem::Text(field) => write!(f, "{field}"),
            PanelItem::Group(group) => write!(f, "{group}"),
        }
    }
}

/// Owner of an error-message slot.
///
/// Only `Field` targets carry an input style; groups just show or hide their
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTarget {
    Field(TextField),
    Group(ChoiceGroup),
}

impl From<TextField> for FeedbackTarget {
    fn from(field: TextField) -> Self {
        FeedbackTarget::Field(field)
    }
}

impl From<ChoiceGroup> for FeedbackTarget {
    fn from(group: ChoiceGroup) -> Self {
        FeedbackTarget::Group(group)
    }
}

/// Visual marker of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum InputStyle {
    /// Never validated.
    #[default]
    Neutral,
    Error,
    Success,
}
