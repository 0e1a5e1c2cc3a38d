// ABOUTME: Core error types and HTTP error responder for rowkit
// ABOUTME: Foundation crate with the insert error taxonomy, constants, and JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rowkit Core
//!
//! Foundation crate providing the error taxonomy shared by the row encoder,
//! the insert executor, and HTTP handlers.
//!
//! ## Modules
//!
//! - **errors**: `EncodingError`, `DatabaseError`, `InsertError`, `ConfigError`,
//!   and the error responder (`ApiError`, `HandlerError`, `respond`)
//! - **constants**: Status codes and messages used in error bodies

/// Error taxonomy and the HTTP error responder
pub mod errors;

/// Status codes and messages used in error bodies
pub mod constants;
