// src/error.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Message sent to clients whenever the upstream call fails. The real cause
/// only goes to the server log.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "The assistant is unavailable right now. Please try again later.";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Missing required form field `msg`")]
    MissingInput,

    #[error("Form body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Upstream completion failed: {0}")]
    Upstream(#[from] UpstreamError),
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request to completion API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion API returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("completion API returned no usable choice")]
    EmptyChoice,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),

    #[error("environment variable {var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingInput => StatusCode::BAD_REQUEST,
            ServiceError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ServiceError::MissingInput | ServiceError::PayloadTooLarge { .. } => self.to_string(),
            ServiceError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message
        }))
    }
}
