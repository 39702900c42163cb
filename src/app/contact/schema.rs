use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    app::field,
    domain::{contact::NewContact, ValidationErrors},
    storage::Contact,
};

/// Fields are read as raw JSON so that type mismatches are reported together with the
/// rule violations of the other fields.
#[derive(Deserialize)]
pub struct ContactRequestBody {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub subject: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl TryFrom<ContactRequestBody> for NewContact {
    type Error = ValidationErrors;
    fn try_from(value: ContactRequestBody) -> Result<Self, Self::Error> {
        NewContact::from_fields(
            field::text(value.name),
            field::text(value.email),
            field::optional_text(value.subject),
            field::text(value.message),
        )
    }
}

#[derive(Serialize)]
pub struct ContactResponseBody {
    pub success: bool,
    pub contact: Contact,
}
