//! Inline feedback.
//!
//! Groups (checkbox/radio) only get the message; the red/green input style is
//! reserved for text inputs.

use crate::field::{FeedbackTarget, InputStyle};
use crate::view::FormView;

/// Show `message` under `target` and mark a text input as erroneous.
pub fn set_error<V: FormView + ?Sized>(view: &mut V, target: FeedbackTarget, message: &str) {
    view.set_message(target, message, true);
    if let FeedbackTarget::Field(field) = target {
        view.set_input_style(field, InputStyle::Error);
    }
}

/// Clear and hide the message under `target` and mark a text input as valid.
pub fn set_success<V: FormView + ?Sized>(view: &mut V, target: FeedbackTarget) {
    view.set_message(target, "", false);
    if let FeedbackTarget::Field(field) = target {
        view.set_input_style(field, InputStyle::Success);
    }
}
