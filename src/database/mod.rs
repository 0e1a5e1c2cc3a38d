// ABOUTME: Insert executor building and running single-row INSERT statements
// ABOUTME: Defines the StatementExecutor seam between statement assembly and the store driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Insert Executor
//!
//! [`insert`] quotes the table name, encodes the record, assembles
//! `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`, and runs it
//! through a [`StatementExecutor`]. There is no retry, no transaction, and
//! no logging; callers that need any of these wrap the call themselves.

use async_trait::async_trait;

use crate::encoder::{encode, EncodedRow};
use crate::errors::{DatabaseError, InsertError};
use crate::record::{ColumnValue, Record};
use crate::sql::quote_identifier;

/// PostgreSQL handle and driver binding
pub mod postgres;

pub use postgres::PostgresDatabase;

/// Store driver boundary: runs one parameterized statement
///
/// Implementations must bind `values[i]` to placeholder `$(i + 1)`.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    /// Execute `sql` with `values` bound positionally; returns rows affected
    async fn execute(&self, sql: &str, values: &[ColumnValue]) -> Result<u64, DatabaseError>;
}

/// Build the INSERT statement for an encoded row
///
/// A row with no columns inserts `DEFAULT VALUES`.
#[must_use]
pub fn build_insert_statement(table: &str, row: &EncodedRow) -> String {
    let table = quote_identifier(table);
    if row.is_empty() {
        return format!("INSERT INTO {table} DEFAULT VALUES");
    }
    format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        row.columns().join(", "),
        row.placeholders().join(", ")
    )
}

/// Insert `record` as one row of `table`
///
/// Returns the number of rows the store reports as affected. Repeated calls
/// insert repeated rows.
pub async fn insert<E, R>(executor: &E, table: &str, record: &R) -> Result<u64, InsertError>
where
    E: StatementExecutor + ?Sized,
    R: Record + ?Sized,
{
    let row = encode(record)?;
    let sql = build_insert_statement(table, &row);

    let rows_affected = executor.execute(&sql, row.values()).await?;
    Ok(rows_affected)
}
