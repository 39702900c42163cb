use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::schema::{SubscribeRequestBody, SubscribeResponseBody};
use crate::{
    app::{
        error::{AppError, AppResult},
        field, AppState,
    },
    domain::newsletter::NewNewsletter,
    storage::Subscription,
};

const SUBSCRIBE_FAILED: &str = "Failed to subscribe to newsletter";
const ALREADY_SUBSCRIBED: &str = "You're already subscribed to our newsletter!";
const SUBSCRIBED: &str = "Thanks for subscribing to our newsletter!";

/// Subscribing an address twice is not an error: the second call reports the existing
/// subscription with `200 OK` and stores nothing.
#[tracing::instrument(name = "Subscribe to newsletter", skip(state, body))]
pub async fn subscribe(
    State(state): State<AppState>,
    body: Result<Json<SubscribeRequestBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SubscribeResponseBody>)> {
    let Json(body) = body?;
    let new_newsletter = NewNewsletter::from_field(field::text(body.email))?;

    let subscription = state
        .storage
        .subscribe(new_newsletter)
        .await
        .map_err(|e| AppError::unexpected(SUBSCRIBE_FAILED, e))?;

    let response = match subscription {
        Subscription::Existing(existing) => {
            tracing::info!(id = existing.id, "email already subscribed");
            (
                StatusCode::OK,
                Json(SubscribeResponseBody {
                    success: true,
                    message: ALREADY_SUBSCRIBED,
                    newsletter: None,
                }),
            )
        }
        Subscription::Created(newsletter) => {
            tracing::info!(id = newsletter.id, "new newsletter subscription");
            (
                StatusCode::CREATED,
                Json(SubscribeResponseBody {
                    success: true,
                    message: SUBSCRIBED,
                    newsletter: Some(newsletter),
                }),
            )
        }
    };

    Ok(response)
}
