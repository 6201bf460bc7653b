use thiserror::Error;

use super::fields::{FieldKey, FormFields};
use super::validation::{validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Whole-form failure reported by the send collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Message was rejected: {0}")]
    Rejected(String),
    #[error("Couldn't send message: {0}")]
    Transport(String),
}

/// Identifies the success acknowledgement a dismissal timer was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    generation: u64,
}

#[derive(Debug)]
pub enum SubmitStart {
    /// Validation failed; errors are recorded on the form.
    Blocked,
    /// A send is already in flight.
    InFlight,
    /// The caller must send these fields and report back via `finish_submit`.
    Started(FormFields),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub errors: ValidationErrors,
    pub state: SubmissionState,
    pub notice: Option<SubmissionError>,
}

impl FormSnapshot {
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }
}

/// Synchronous contact form state machine.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: ValidationErrors,
    state: SubmissionState,
    notice: Option<SubmissionError>,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn notice(&self) -> Option<&SubmissionError> {
        self.notice.as_ref()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            state: self.state,
            notice: self.notice.clone(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.fields)
    }

    /// Stores the value as typed. Clears that field's error but does not re-validate.
    pub fn update_field(&mut self, key: FieldKey, value: String) {
        self.fields.set(key, value);
        self.errors.clear(key);
        match self.state {
            SubmissionState::Succeeded => self.dismiss_success(),
            SubmissionState::Failed => {
                self.state = SubmissionState::Idle;
                self.notice = None;
            }
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.state == SubmissionState::Submitting {
            return SubmitStart::InFlight;
        }
        if self.state == SubmissionState::Succeeded {
            self.dismiss_success();
        }
        self.notice = None;

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.state = SubmissionState::Idle;
            return SubmitStart::Blocked;
        }

        self.errors = errors;
        self.state = SubmissionState::Submitting;
        SubmitStart::Started(self.fields.clone())
    }

    /// Settles an in-flight submission. Returns a ticket for the success
    /// acknowledgement, or None if nothing was in flight or the send failed.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> Option<DismissTicket> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        match result {
            Ok(()) => {
                self.fields = FormFields::default();
                self.errors = ValidationErrors::default();
                self.state = SubmissionState::Succeeded;
                self.generation += 1;
                Some(DismissTicket {
                    generation: self.generation,
                })
            }
            Err(e) => {
                self.state = SubmissionState::Failed;
                self.notice = Some(e);
                None
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
            // invalidate any outstanding ticket
            self.generation += 1;
        }
    }

    /// Timer callback. Only dismisses the acknowledgement the ticket was issued for.
    pub fn expire(&mut self, ticket: DismissTicket) -> bool {
        if self.state == SubmissionState::Succeeded && ticket.generation == self.generation {
            self.dismiss_success();
            true
        } else {
            false
        }
    }
}
