use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::schema::{ContactRequestBody, ContactResponseBody};
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::contact::NewContact,
};

const SUBMIT_FAILED: &str = "Failed to submit contact form";

#[tracing::instrument(name = "Submit contact form", skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequestBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ContactResponseBody>)> {
    let Json(body) = body?;
    let new_contact = NewContact::try_from(body)?;

    let contact = state
        .storage
        .create_contact(new_contact)
        .await
        .map_err(|e| AppError::unexpected(SUBMIT_FAILED, e))?;

    tracing::info!(id = contact.id, "contact form submitted");
    Ok((
        StatusCode::CREATED,
        Json(ContactResponseBody {
            success: true,
            contact,
        }),
    ))
}
