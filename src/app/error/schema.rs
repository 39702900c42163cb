/// Body of every failed request.
#[derive(serde::Serialize)]
pub struct Failure {
    pub success: bool,
    pub message: String,
}
