//! Contact form: field values, validation rules and the submission lifecycle.
//!
//! [`ContactForm`] is the synchronous state machine; [`ContactFormController`]
//! wraps it with an async [`ContactSender`] and guarantees a single in-flight
//! submission.

mod controller;
mod fields;
mod form;
mod validation;

pub use controller::{
    retain_timer, ContactFormController, ContactSender, ContactSettings, SubmitOutcome,
};
pub use fields::{FieldKey, FormFields};
pub use form::{
    ContactForm, DismissTicket, FormSnapshot, SubmissionError, SubmissionState, SubmitStart,
};
pub use validation::{validate, ValidationError, ValidationErrors, MIN_MESSAGE_CHARS};
