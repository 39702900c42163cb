//! Validated inbound payloads.
//!
//! Every field type is built through `TryFrom<String>`, which either yields a value that
//! upholds the field's rule or a human-readable reason it does not. Payload constructors
//! collect the reasons of all failing fields into [`ValidationErrors`].

use derive_more::Display;

pub mod contact;
pub mod email;
pub mod newsletter;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} at \"{}\"", message, field)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A submitted field as text, or the reason the submitted value is not text.
pub type RawField<T = String> = Result<T, String>;

/// Every field rule a payload violated, in field order.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Validation error: {}", join(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Record the outcome of validating `field`, keeping the value if it passed.
    pub fn check<T>(&mut self, field: &'static str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.push(FieldError { field, message });
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
