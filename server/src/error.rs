//! Request-level errors and their HTTP rendering.
//!
//! # Design
//! Client mistakes carry a specific message. Dependency failures are logged
//! here with their cause and rendered with a generic body, so storage and
//! completion details never reach the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;
use crate::summarizer::SummarizeError;

pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// JSON body for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Todo text is required")]
    Validation,

    /// The body could not be read as JSON at all.
    #[error("{0}")]
    BadRequest(String),

    #[error("Todo not found")]
    NotFound,

    #[error("No todos found to summarize.")]
    NothingToSummarize,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Summarizer(#[from] SummarizeError),

    /// A handler panicked.
    #[error("{0}")]
    Panic(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::BadRequest(_) | Self::NothingToSummarize => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Summarizer(_) | Self::Panic(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
