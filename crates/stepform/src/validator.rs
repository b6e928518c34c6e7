//! Field validators.
//!
//! Each validator reads the live value from the view, runs the matching rule
//! from `rules` and renders the outcome through `feedback`. The boolean result
//! is all the caller needs; the message already sits in the view.

use crate::feedback::{set_error, set_success};
use crate::field::{ChoiceGroup, FeedbackTarget, TextField};
use crate::rules::{self, Validation};
use crate::view::FormView;

fn render<V: FormView + ?Sized>(view: &mut V, target: FeedbackTarget, result: Validation) -> bool {
    match result.message {
        Some(message) if !result.is_valid => set_error(view, target, message),
        _ => set_success(view, target),
    }
    result.is_valid
}

pub fn validate_name_input<V: FormView + ?Sized>(view: &mut V) -> bool {
    let result = rules::validate_name(view.text_value(TextField::Name));
    render(view, TextField::Name.into(), result)
}

pub fn validate_email_input<V: FormView + ?Sized>(view: &mut V) -> bool {
    let result = rules::validate_email(view.text_value(TextField::Email));
    render(view, TextField::Email.into(), result)
}

pub fn validate_phone_input<V: FormView + ?Sized>(view: &mut V) -> bool {
    let result = rules::validate_phone(view.text_value(TextField::Phone));
    render(view, TextField::Phone.into(), result)
}

pub fn validate_services_input<V: FormView + ?Sized>(view: &mut V) -> bool {
    let result = rules::validate_services(&view.checked_options(ChoiceGroup::Services));
    render(view, ChoiceGroup::Services.into(), result)
}

pub fn validate_budget_input<V: FormView + ?Sized>(view: &mut V) -> bool {
    let result = rules::validate_budget(&view.checked_options(ChoiceGroup::Budget));
    render(view, ChoiceGroup::Budget.into(), result)
}

/// Dispatch by field. `Company` has no rule and yields `None`.
pub fn validate_text_input<V: FormView + ?Sized>(view: &mut V, field: TextField) -> Option<bool> {
    match field {
        TextField::Name => Some(validate_name_input(view)),
        TextField::Email => Some(validate_email_input(view)),
        TextField::Phone => Some(validate_phone_input(view)),
        TextField::Company => None,
    }
}

/// Dispatch by group kind.
pub fn validate_group_input<V: FormView + ?Sized>(view: &mut V, group: ChoiceGroup) -> bool {
    match group {
        ChoiceGroup::Services => validate_services_input(view),
        ChoiceGroup::Budget => validate_budget_input(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FormDocument;
    use crate::field::InputStyle;
    use crate::rules::{
        BUDGET_REQUIRED, EMAIL_INVALID, NAME_REQUIRED, NAME_TOO_SHORT, PHONE_NOT_NUMERIC,
        PHONE_TOO_SHORT, SERVICES_REQUIRED,
    };

    fn doc() -> FormDocument {
        FormDocument::standard(["Dev", "Design"], ["Low", "High"]).expect("standard layout")
    }

    fn message(doc: &FormDocument, field: TextField) -> &str {
        &doc.input(field).feedback.text
    }

    #[test]
    fn name_input_messages() {
        let mut doc = doc();
        assert!(!validate_name_input(&mut doc));
        assert_eq!(message(&doc, TextField::Name), NAME_REQUIRED);

        doc.set_text_value(TextField::Name, "   ".into());
        assert!(!validate_name_input(&mut doc));
        assert_eq!(message(&doc, TextField::Name), NAME_REQUIRED);

        doc.set_text_value(TextField::Name, "Al".into());
        assert!(!validate_name_input(&mut doc));
        assert_eq!(message(&doc, TextField::Name), NAME_TOO_SHORT);
        assert_eq!(doc.input(TextField::Name).style, InputStyle::Error);

        doc.set_text_value(TextField::Name, "Ada".into());
        assert!(validate_name_input(&mut doc));
        assert_eq!(message(&doc, TextField::Name), "");
        assert_eq!(doc.input(TextField::Name).style, InputStyle::Success);
    }

    #[test]
    fn email_input_messages() {
        let mut doc = doc();
        for (value, valid) in [("mail@me.com", true), ("mail@me", false), ("mail.me.com", false)] {
            doc.set_text_value(TextField::Email, value.into());
            assert_eq!(validate_email_input(&mut doc), valid, "{value}");
            let expected = if valid { "" } else { EMAIL_INVALID };
            assert_eq!(message(&doc, TextField::Email), expected);
        }
    }

    #[test]
    fn phone_input_messages() {
        let mut doc = doc();
        doc.set_text_value(TextField::Phone, "12345".into());
        assert!(!validate_phone_input(&mut doc));
        assert_eq!(message(&doc, TextField::Phone), PHONE_TOO_SHORT);

        doc.set_text_value(TextField::Phone, "12345abcde".into());
        assert!(!validate_phone_input(&mut doc));
        assert_eq!(message(&doc, TextField::Phone), PHONE_NOT_NUMERIC);

        doc.set_text_value(TextField::Phone, "1234567890".into());
        assert!(validate_phone_input(&mut doc));
        assert!(!doc.input(TextField::Phone).feedback.visible);
    }

    #[test]
    fn group_inputs() {
        let mut doc = doc();
        assert!(!validate_services_input(&mut doc));
        assert_eq!(doc.group(ChoiceGroup::Services).feedback.text, SERVICES_REQUIRED);
        doc.toggle_choice(ChoiceGroup::Services, 1);
        assert!(validate_services_input(&mut doc));
        assert!(!doc.group(ChoiceGroup::Services).feedback.visible);

        assert!(!validate_budget_input(&mut doc));
        assert_eq!(doc.group(ChoiceGroup::Budget).feedback.text, BUDGET_REQUIRED);
        doc.toggle_choice(ChoiceGroup::Budget, 0);
        assert!(validate_budget_input(&mut doc));
    }

    #[test]
    fn company_has_no_rule() {
        let mut doc = doc();
        assert_eq!(validate_text_input(&mut doc, TextField::Company), None);
        assert_eq!(doc.input(TextField::Company).style, InputStyle::Neutral);
        assert_eq!(validate_text_input(&mut doc, TextField::Name), Some(false));
    }
}
