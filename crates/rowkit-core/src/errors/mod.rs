// ABOUTME: Unified error handling for row encoding, inserts, configuration, and HTTP responses
// ABOUTME: Re-exports the domain error enums and the error responder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Two independent halves live here:
//!
//! - The insert taxonomy: [`EncodingError`] (a record could not be turned into
//!   column bindings), [`DatabaseError`] (the store rejected or never received
//!   the statement), and [`InsertError`] which is one of the two.
//! - The error responder: [`ApiError`] carries a deliberate HTTP status and
//!   message, [`HandlerError`] is what handlers return, and [`respond`] maps a
//!   `HandlerError` to a status code and [`ErrorBody`].

/// Error responder core: `ApiError`, `HandlerError`, `respond`
pub mod api;

/// Configuration errors
pub mod config;

/// Encoding, database, and insert errors
pub mod database;

/// Axum and plain `http` adapters for the error responder
#[cfg(feature = "http-response")]
pub mod response;

pub use api::{respond, ApiError, ErrorBody, HandlerError};
pub use config::ConfigError;
pub use database::{DatabaseError, EncodingError, InsertError};

#[cfg(feature = "http-response")]
pub use response::{http_error_response, http_error_wrapper, write_json};
