use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    RateLimitExceeded {
        limit: u32,
        reset_at: i64,
        retry_after_secs: u64,
    },
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::RateLimitExceeded { retry_after_secs, .. } => {
                write!(f, "rate limit exceeded, retry after {}s", retry_after_secs)
            }
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(errors) => {
                HttpResponse::build(self.status_code())
                    .insert_header(ContentType::json())
                    .json(serde_json::json!({
                        "error": "Invalid form data",
                        "details": errors
                    }))
            }
            AppError::RateLimitExceeded { limit, reset_at, retry_after_secs } => {
                HttpResponse::build(self.status_code())
                    .insert_header(ContentType::json())
                    .insert_header(("Retry-After", retry_after_secs.to_string()))
                    .insert_header(("X-RateLimit-Limit", limit.to_string()))
                    .insert_header(("X-RateLimit-Remaining", "0"))
                    .insert_header(("X-RateLimit-Reset", reset_at.to_string()))
                    .json(serde_json::json!({
                        "error": "Too many requests. Please try again later.",
                        "retryAfter": retry_after_secs
                    }))
            }
            AppError::InternalError(msg) => {
                // Full detail stays in the logs; the caller only gets an
                // opaque message.
                tracing::error!("internal error: {}", msg);
                HttpResponse::build(self.status_code())
                    .insert_header(ContentType::json())
                    .json(serde_json::json!({"error": "Failed to process request"}))
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Flatten `validator`'s nested error map into per-field descriptors, shared
/// by the server-side conversion below and the form client's local check.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect()
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(field_errors(&errors))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ValidationError(vec![FieldError {
            field: "body".to_string(),
            message: err.to_string(),
        }])
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
