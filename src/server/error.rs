use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::error::ReceiptError;

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// The request body could not be decoded as a receipt.
    #[error("{0}")]
    BadRequest(String),

    /// Query parameters were sent where none are accepted.
    #[error("Query parameters are not supported on this route")]
    UnexpectedQuery,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub msg: String,
    pub timestamp: DateTime<Utc>,
}

/// Status code for a core error.
pub fn status_for(err: &ReceiptError) -> StatusCode {
    match err {
        ReceiptError::MissingField(_) | ReceiptError::InvalidField(_) => StatusCode::BAD_REQUEST,
        ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
        ReceiptError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Receipt(err) => status_for(err),
            ApiError::BadRequest(_) | ApiError::UnexpectedQuery => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        } else {
            warn!(status = status.as_u16(), "{}", self);
        }

        if let ApiError::UnexpectedQuery = self {
            return status.into_response();
        }

        let body = ErrorResponse {
            msg: self.to_string(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
