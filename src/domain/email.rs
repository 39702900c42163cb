use derive_more::Display;
use validator::validate_email;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let has_dotted_domain = value
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'));

        if has_dotted_domain
            && !value.chars().any(char::is_whitespace)
            && validate_email(&value)
        {
            Ok(Self(value))
        } else {
            Err(INVALID_EMAIL.into())
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
