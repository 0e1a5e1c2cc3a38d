// ABOUTME: Main library entry point for rowkit
// ABOUTME: Typed single-row PostgreSQL inserts and uniform JSON error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rowkit
//!
//! Two small helpers for web backends:
//!
//! - **Row encoding and inserts**: a [`Record`] describes its fields; [`encode`]
//!   turns it into quoted columns, bound values, and `$n` placeholders, and
//!   [`insert`] runs the resulting `INSERT` against any [`StatementExecutor`],
//!   including `sqlx::PgPool`.
//! - **Error responses**: handlers return [`HandlerError`]; [`respond`] maps it
//!   to a status code and a `{"statusCode", "msg"}` body, with adapters for
//!   axum and for plain `http` handlers.
//!
//! ## Configuration
//!
//! The library reads no environment variables on its own. Build a
//! [`DatabaseConfig`] with [`DatabaseConfig::new`] and pass it to
//! [`PostgresDatabase::connect`]. Binaries that prefer environment-driven
//! setup may opt in to [`DatabaseConfig::from_env`] and
//! [`logging::init_from_env`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use rowkit::{impl_record, DatabaseConfig, PostgresDatabase};
//!
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! impl_record!(User {
//!     value name = "Name",
//!     value tags = "Tags",
//! });
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = DatabaseConfig::new("postgres://localhost/app");
//! config.max_connections = 5;
//! let db = PostgresDatabase::connect(&config).await?;
//! let user = User { name: "a".into(), tags: vec!["x".into(), "y".into()] };
//! // INSERT INTO "users" ("Name", "Tags") VALUES ($1, $2)
//! db.insert("users", &user).await?;
//! # Ok(())
//! # }
//! ```

/// Database connection and pool configuration
pub mod config;

/// Application constants
pub mod constants;

/// Insert executor and PostgreSQL handle
pub mod database;

/// Row encoder
pub mod encoder;

/// Error types and the HTTP error responder
pub mod errors;

/// Logging configuration
pub mod logging;

/// Record mapping and bound column values
pub mod record;

/// Identifier quoting and placeholders
pub mod sql;

pub use config::DatabaseConfig;
pub use database::{build_insert_statement, insert, PostgresDatabase, StatementExecutor};
pub use encoder::{encode, ColumnBinding, EncodedRow, Field, FieldTag, RowEncoder};
pub use errors::{
    respond, ApiError, ConfigError, DatabaseError, EncodingError, ErrorBody, HandlerError,
    InsertError,
};
pub use record::{
    ArrayElement, ArrayValue, ColumnKind, ColumnValue, JsonText, Record, ScalarKind,
    ToColumnValue,
};
