use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),
    /// Form state changed; redraw.
    Update,
    /// The form switched to another step.
    StepChanged(usize),
    /// Final step accepted; the submission is stored in `State`.
    Submitted,
}
