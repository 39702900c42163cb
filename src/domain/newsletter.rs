use super::{email::Email, RawField, ValidationErrors};

/// A newsletter signup whose email passed validation.
#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub email: Email,
}

impl NewNewsletter {
    pub fn parse(email: String) -> Result<Self, ValidationErrors> {
        Self::from_field(Ok(email))
    }

    pub fn from_field(email: RawField) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        match errors.check("email", email.and_then(Email::try_from)) {
            Some(email) => Ok(Self { email }),
            None => Err(errors),
        }
    }
}
