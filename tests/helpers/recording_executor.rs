// ABOUTME: In-memory StatementExecutor that records statements instead of running them
// ABOUTME: Lets insert tests assert on generated SQL and bound values without a live database

use std::sync::Mutex;

use async_trait::async_trait;
use rowkit::{ColumnValue, DatabaseError, StatementExecutor};

/// One statement the executor received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStatement {
    pub sql: String,
    pub values: Vec<ColumnValue>,
}

/// Records every statement; optionally fails each one with a fixed error
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Mutex<Vec<RecordedStatement>>,
    failure: Option<DatabaseError>,
}

impl RecordingExecutor {
    /// Executor that accepts every statement and reports one affected row
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that records, then rejects, every statement
    #[allow(dead_code)]
    pub fn failing(error: DatabaseError) -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Statements received so far
    pub fn statements(&self) -> Vec<RecordedStatement> {
        self.statements.lock().unwrap().clone()
    }

    /// The single statement received; panics if there were zero or several
    pub fn only_statement(&self) -> RecordedStatement {
        let statements = self.statements();
        assert_eq!(statements.len(), 1, "expected exactly one statement");
        statements.into_iter().next().unwrap()
    }
}

#[async_trait]
impl StatementExecutor for RecordingExecutor {
    async fn execute(&self, sql: &str, values: &[ColumnValue]) -> Result<u64, DatabaseError> {
        self.statements.lock().unwrap().push(RecordedStatement {
            sql: sql.to_owned(),
            values: values.to_vec(),
        });
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(1),
        }
    }
}
