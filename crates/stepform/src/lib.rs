//! Multi-step form controller.
//!
//! The crate is split the same way the form is used:
//! - `steps`      : `StepController`, owns the step index and keeps panels/markers in sync
//! - `rules`      : pure predicates per field, producing a `Validation`
//! - `validator`  : reads live values from a view, applies a rule, renders feedback
//! - `feedback`   : `set_error` / `set_success`
//! - `view`       : the `FormView` capability everything above talks to
//! - `document`   : `FormDocument`, an in-memory `FormView`
//! - `controller` : `FormController`, wires click/blur/input/submit events together
//!
//! ```
//! use stepform::{ClickRole, FormController, FormDocument, TextField};
//!
//! let doc = FormDocument::standard(["Development", "Design"], ["< 5k", "5k+"]).unwrap();
//! let mut form = FormController::new(doc);
//! form.edit(TextField::Name, "Ada");
//! form.edit(TextField::Email, "ada@example.com");
//! assert!(form.click(ClickRole::Next));
//! assert_eq!(form.current_step(), 1);
//! ```

pub mod controller;
pub mod document;
pub mod error;
pub mod feedback;
pub mod field;
pub mod rules;
pub mod steps;
pub mod validator;
pub mod view;

pub use controller::{ClickRole, FormController, Submission, SubmitOutcome};
pub use document::{
    ChoiceGroupState, ChoiceOption, FormDocument, FormDocumentBuilder, Marker, MessageSlot, Panel,
    TextInput,
};
pub use error::LayoutError;
pub use field::{ChoiceGroup, ChoiceKind, FeedbackTarget, InputStyle, PanelItem, TextField};
pub use rules::Validation;
pub use steps::{synchronize_visuals, StepController};
pub use view::FormView;
