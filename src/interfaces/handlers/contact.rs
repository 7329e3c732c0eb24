use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::{
    entities::contact::ContactForm,
    errors::AppError,
    utils::client_id::client_identifier,
    AppState,
};

/// POST /api/contact
///
/// The limiter is charged before the body is even parsed, so malformed
/// requests consume budget like any other. Takes raw bytes instead of a JSON
/// extractor to keep that ordering.
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let identifier = client_identifier(&req);

    let decision = state.rate_limiter.check(&identifier);
    if !decision.allowed {
        return Err(AppError::RateLimitExceeded {
            limit: decision.limit,
            reset_at: decision.reset_at,
            retry_after_secs: decision.retry_after_secs(Utc::now().timestamp_millis()),
        });
    }

    let form: ContactForm = serde_json::from_slice(&body)?;

    // Dropped and dispatched submissions get byte-identical responses.
    state
        .contact_handler
        .handle_submission(form, &identifier)
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header(("X-RateLimit-Limit", decision.limit.to_string()))
        .insert_header(("X-RateLimit-Remaining", decision.remaining.to_string()))
        .insert_header(("X-RateLimit-Reset", decision.reset_at.to_string()))
        .json(serde_json::json!({ "success": true })))
}
