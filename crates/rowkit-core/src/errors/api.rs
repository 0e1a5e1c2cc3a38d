// ABOUTME: Error responder core mapping handler errors to an HTTP status and JSON body
// ABOUTME: ApiError carries a deliberate status; everything else flattens to a generic 500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::error::Error;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use super::database::{DatabaseError, EncodingError, InsertError};
use crate::constants::{messages, status};

/// A deliberate, caller-constructed error with an HTTP status and message
///
/// Serializes as `{"statusCode": <u16>, "msg": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("api error: {status_code} - {msg}")]
pub struct ApiError {
    /// HTTP status code sent to the client
    pub status_code: u16,
    /// Message sent to the client
    pub msg: String,
}

impl ApiError {
    /// Build an API error whose message is the rendered `err`
    pub fn new(status_code: u16, err: impl Display) -> Self {
        Self {
            status_code,
            msg: err.to_string(),
        }
    }

    /// Build an API error from a plain message
    pub fn with_message(status_code: u16, msg: impl Into<String>) -> Self {
        Self {
            status_code,
            msg: msg.into(),
        }
    }

    /// 400 for request bodies that are not valid JSON
    #[must_use]
    pub fn invalid_json() -> Self {
        Self::with_message(status::BAD_REQUEST, messages::INVALID_JSON)
    }
}

/// JSON body written for every handler error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Mirrors the HTTP status of the response
    pub status_code: u16,
    /// Client-facing message
    pub msg: String,
}

impl ErrorBody {
    /// The generic 500 body used for every non-API error
    #[must_use]
    pub fn internal() -> Self {
        Self {
            status_code: status::INTERNAL_SERVER_ERROR,
            msg: messages::INTERNAL_SERVER_ERROR.to_owned(),
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(error: &ApiError) -> Self {
        Self {
            status_code: error.status_code,
            msg: error.msg.clone(),
        }
    }
}

/// Error type returned by HTTP handlers
///
/// Only the `Api` variant reaches the client verbatim. `Internal` errors are
/// opaque: the client sees a generic 500 and the caller decides what to log.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Deliberate error with a client-facing status and message
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Any other failure
    #[error("{0}")]
    Internal(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl HandlerError {
    /// Wrap an arbitrary error as an opaque internal failure
    pub fn internal(error: impl Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(error))
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for HandlerError {
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::Internal(error)
    }
}

impl From<InsertError> for HandlerError {
    fn from(error: InsertError) -> Self {
        Self::internal(error)
    }
}

impl From<EncodingError> for HandlerError {
    fn from(error: EncodingError) -> Self {
        Self::internal(error)
    }
}

impl From<DatabaseError> for HandlerError {
    fn from(error: DatabaseError) -> Self {
        Self::internal(error)
    }
}

impl From<ConfigError> for HandlerError {
    fn from(error: ConfigError) -> Self {
        Self::internal(error)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(error)
    }
}

/// Map a handler error to the HTTP status and body sent to the client
#[must_use]
pub fn respond(error: &HandlerError) -> (u16, ErrorBody) {
    match error {
        HandlerError::Api(api_error) => (api_error.status_code, ErrorBody::from(api_error)),
        HandlerError::Internal(_) => (status::INTERNAL_SERVER_ERROR, ErrorBody::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_passes_through() {
        let error = HandlerError::from(ApiError::with_message(404, "not found"));
        let (code, body) = respond(&error);

        assert_eq!(code, 404);
        assert_eq!(body.status_code, 404);
        assert_eq!(body.msg, "not found");
    }

    #[test]
    fn test_internal_error_is_flattened() {
        let error = HandlerError::from(DatabaseError::execution("password authentication failed"));
        let (code, body) = respond(&error);

        assert_eq!(code, 500);
        assert_eq!(body, ErrorBody::internal());
        assert!(!body.msg.contains("password"));
    }

    #[test]
    fn test_body_wire_format() {
        let body = ErrorBody::from(&ApiError::with_message(404, "not found"));
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"statusCode":404,"msg":"not found"}"#);

        let json = serde_json::to_string(&ErrorBody::internal()).unwrap();
        assert_eq!(json, messages::INTERNAL_SERVER_ERROR_BODY);
    }

    #[test]
    fn test_api_error_display_and_constructors() {
        let error = ApiError::new(409, DatabaseError::execution("duplicate key"));
        assert_eq!(error.msg, "statement execution failed: duplicate key");
        assert_eq!(
            error.to_string(),
            "api error: 409 - statement execution failed: duplicate key"
        );

        let error = ApiError::invalid_json();
        assert_eq!(error.status_code, 400);
        assert_eq!(error.msg, "invalid json format");
    }
}
