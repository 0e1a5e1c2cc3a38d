// ABOUTME: Constants for HTTP error bodies produced by the error responder
// ABOUTME: Status codes and the fixed messages clients see
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP status codes used by the error responder
pub mod status {
    /// 400 Bad Request
    pub const BAD_REQUEST: u16 = 400;
    /// 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Messages placed in the `msg` field of error bodies
pub mod messages {
    /// Generic message for every error that is not an `ApiError`
    pub const INTERNAL_SERVER_ERROR: &str = "internal server error";
    /// Message for request bodies that fail to parse as JSON
    pub const INVALID_JSON: &str = "invalid json format";
    /// Pre-rendered internal error body, used if body serialization itself fails
    pub const INTERNAL_SERVER_ERROR_BODY: &str =
        r#"{"statusCode":500,"msg":"internal server error"}"#;
}

/// SQLSTATE codes callers commonly branch on
pub mod sqlstate {
    /// `unique_violation`
    pub const UNIQUE_VIOLATION: &str = "23505";
    /// `foreign_key_violation`
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    /// `not_null_violation`
    pub const NOT_NULL_VIOLATION: &str = "23502";
}
