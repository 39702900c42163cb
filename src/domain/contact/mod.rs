pub mod message;
pub mod name;

use self::message::Message;
use self::name::Name;
use super::{email::Email, RawField, ValidationErrors};

/// A contact inquiry whose fields all passed validation.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: Name,
    pub email: Email,
    pub subject: Option<String>,
    pub message: Message,
}

impl NewContact {
    /// Validate every field, reporting all failures rather than the first one.
    pub fn parse(
        name: String,
        email: String,
        subject: Option<String>,
        message: String,
    ) -> Result<Self, ValidationErrors> {
        Self::from_fields(Ok(name), Ok(email), Ok(subject), Ok(message))
    }

    /// Like [`NewContact::parse`], for fields that may already have failed to read as text.
    /// Those failures are reported alongside the rule violations of the other fields.
    pub fn from_fields(
        name: RawField,
        email: RawField,
        subject: RawField<Option<String>>,
        message: RawField,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = errors.check("name", name.and_then(Name::try_from));
        let email = errors.check("email", email.and_then(Email::try_from));
        let subject = errors.check("subject", subject);
        let message = errors.check("message", message.and_then(Message::try_from));

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(errors),
        }
    }
}
