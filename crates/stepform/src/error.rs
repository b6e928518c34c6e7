use thiserror::Error;

use crate::field::{ChoiceGroup, PanelItem};

/// A `FormDocument` layout that does not satisfy the view contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("a form needs at least one step")]
    NoSteps,

    #[error("control {0} is not placed on any step")]
    MissingControl(PanelItem),

    #[error("control {0} is placed more than once")]
    DuplicateControl(PanelItem),

    #[error("choice group {0} has no options")]
    EmptyGroup(ChoiceGroup),
}
