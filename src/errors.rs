use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_derive::Serialize;
use serde_json::json;

/// A field-level rejection of a candidate product.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Failure reported by a storage backend. The message is passed to the
/// client as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(pub String);

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ResponseError for ProductError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(err) => json!({
                "message": err.message,
                "field": err.field,
            }),
            Self::BadRequest(msg) => json!({ "message": msg }),
            Self::Storage(err) => json!({ "message": err.0 }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
