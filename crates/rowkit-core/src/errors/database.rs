// ABOUTME: Structured error types for row encoding and single-row inserts
// ABOUTME: EncodingError, DatabaseError (with sqlx conversion), and the InsertError sum type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sqlstate;

/// A record could not be converted into column bindings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// A nested aggregate failed to serialize to JSON text
    #[error("failed to serialize nested value for column '{column}'")]
    NestedValue {
        /// Resolved (unquoted) column name of the nested field
        column: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl EncodingError {
    /// Column the failure belongs to
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::NestedValue { column, .. } => column,
        }
    }
}

/// Execution against the store failed
///
/// The store driver supplies the detail; this type does not classify failures
/// beyond connection versus execution.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseError {
    /// The store could not be reached or the pool gave up
    #[error("database connection failed: {message}")]
    Connection {
        /// Driver-supplied description
        message: String,
    },

    /// The store rejected the statement (constraint, type mismatch, ...)
    #[error("statement execution failed: {message}")]
    Execution {
        /// Driver-supplied description
        message: String,
        /// SQLSTATE code, when the store reported one
        code: Option<String>,
    },
}

impl DatabaseError {
    /// Connection failure with the given description
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Execution failure without a SQLSTATE code
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
            code: None,
        }
    }

    /// Execution failure carrying a SQLSTATE code
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// SQLSTATE code reported by the store, if any
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Execution { code, .. } => code.as_deref(),
            Self::Connection { .. } => None,
        }
    }

    /// True when the store reported a unique constraint violation
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        self.code() == Some(sqlstate::UNIQUE_VIOLATION)
    }

    /// True when the store reported a foreign key violation
    #[must_use]
    pub fn is_foreign_key_violation(&self) -> bool {
        self.code() == Some(sqlstate::FOREIGN_KEY_VIOLATION)
    }

    /// True when the store reported a NOT NULL violation
    #[must_use]
    pub fn is_not_null_violation(&self) -> bool {
        self.code() == Some(sqlstate::NOT_NULL_VIOLATION)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) => Self::Execution {
                message: db_error.message().to_owned(),
                code: db_error.code().map(|code| code.into_owned()),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::connection(error.to_string()),
            other => Self::execution(other.to_string()),
        }
    }
}

/// Failure of a single-row insert
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// The record could not be encoded; nothing was sent to the store
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The store reported a failure
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_code() {
        let error = DatabaseError::with_code("duplicate key value", sqlstate::UNIQUE_VIOLATION);
        assert_eq!(error.code(), Some("23505"));
        assert!(error.is_unique_violation());

        let error = DatabaseError::connection("connection refused");
        assert_eq!(error.code(), None);
        assert!(!error.is_unique_violation());
    }

    #[test]
    fn test_constraint_violation_helpers() {
        let error = DatabaseError::with_code("insert or update violates foreign key", "23503");
        assert!(error.is_foreign_key_violation());
        assert!(!error.is_unique_violation());
        assert!(!error.is_not_null_violation());

        let error = DatabaseError::with_code("null value in column \"name\"", "23502");
        assert!(error.is_not_null_violation());
        assert!(!error.is_foreign_key_violation());

        let error = DatabaseError::execution("syntax error");
        assert!(!error.is_foreign_key_violation());
        assert!(!error.is_not_null_violation());
    }

    #[test]
    fn test_insert_error_is_transparent() {
        let error = InsertError::from(DatabaseError::execution("relation does not exist"));
        assert_eq!(
            error.to_string(),
            "statement execution failed: relation does not exist"
        );
    }

    #[test]
    fn test_encoding_error_names_column() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = EncodingError::NestedValue {
            column: "profile".to_owned(),
            source,
        };
        assert_eq!(error.column(), "profile");
        assert!(error.to_string().contains("'profile'"));
    }
}
