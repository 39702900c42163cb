use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::Newsletter;

#[derive(Deserialize)]
pub struct SubscribeRequestBody {
    #[serde(default)]
    pub email: Option<Value>,
}

#[derive(Serialize)]
pub struct SubscribeResponseBody {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<Newsletter>,
}
