use crate::field::{ChoiceGroup, FeedbackTarget, InputStyle, PanelItem, TextField};

/// The presentation surface a `FormController` drives.
///
/// A view owns the live field values and every presentational marker. The
/// controller only reads values and writes markers, with two exceptions that
/// mirror what a browser does on user input before the matching event fires:
/// `set_text_value` and `toggle_choice`.
///
/// Positions passed to the panel/marker setters are always `< panel_count()` /
/// `< marker_count()`.
pub trait FormView {
    fn panel_count(&self) -> usize;

    fn marker_count(&self) -> usize;

    fn set_panel_active(&mut self, position: usize, active: bool);

    fn set_marker_current(&mut self, position: usize, current: bool);

    /// Controls placed on panel `position`, in display order.
    fn panel_items(&self, position: usize) -> Vec<PanelItem>;

    fn text_value(&self, field: TextField) -> &str;

    fn set_text_value(&mut self, field: TextField, value: String);

    /// Positions of the checked options, ascending.
    fn checked_options(&self, group: ChoiceGroup) -> Vec<usize>;

    /// Click on an option: checkboxes flip, radios become the only checked option.
    fn toggle_choice(&mut self, group: ChoiceGroup, option: usize);

    fn option_label(&self, group: ChoiceGroup, option: usize) -> Option<&str>;

    fn input_style(&self, field: TextField) -> InputStyle;

    fn set_input_style(&mut self, field: TextField, style: InputStyle);

    /// Write the error-message slot of `target` and show or hide it.
    fn set_message(&mut self, target: FeedbackTarget, message: &str, visible: bool);
}
