// ABOUTME: PostgreSQL connection handle and sqlx binding for encoded column values
// ABOUTME: Binds typed NULLs, exact JSON text for nested aggregates, and native arrays for sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! PostgreSQL database implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgArguments, PgPoolOptions, PgTypeInfo};
use sqlx::query::Query;
use sqlx::{Encode, PgPool, Postgres, Type};
use tracing::info;
use uuid::Uuid;

use super::StatementExecutor;
use crate::config::DatabaseConfig;
use crate::errors::{DatabaseError, InsertError};
use crate::record::{ArrayValue, ColumnKind, ColumnValue, Record, ScalarKind};

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// `pg_type` OID of `json`
const JSON_OID: Oid = Oid(114);

/// Nested JSON text sent as a `json` parameter
///
/// The binary wire format of `json` is the text itself, so `text`, `varchar`
/// and `json` columns store it unchanged; `jsonb` columns accept it through
/// the built-in `json` to `jsonb` assignment cast.
struct JsonTextParam(String);

impl Type<Postgres> for JsonTextParam {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(JSON_OID)
    }
}

impl Encode<'_, Postgres> for JsonTextParam {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        buf.extend_from_slice(self.0.as_bytes());
        Ok(IsNull::No)
    }
}

/// PostgreSQL database handle
#[derive(Clone, Debug)]
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Open a connection pool using `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        info!(
            db.url = %config.redacted_url(),
            db.max_connections = config.max_connections,
            db.min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DatabaseError::connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Open a connection pool with default pool settings
    pub async fn connect_url(url: &str) -> Result<Self, DatabaseError> {
        Self::connect(&DatabaseConfig::new(url)).await
    }

    /// Wrap an existing pool
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert `record` as one row of `table`
    pub async fn insert<R: Record + ?Sized>(
        &self,
        table: &str,
        record: &R,
    ) -> Result<u64, InsertError> {
        super::insert(&self.pool, table, record).await
    }
}

#[async_trait]
impl StatementExecutor for PgPool {
    async fn execute(&self, sql: &str, values: &[ColumnValue]) -> Result<u64, DatabaseError> {
        let query = values.iter().fold(sqlx::query(sql), bind_value);
        let result = query.execute(self).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl StatementExecutor for PostgresDatabase {
    async fn execute(&self, sql: &str, values: &[ColumnValue]) -> Result<u64, DatabaseError> {
        StatementExecutor::execute(&self.pool, sql, values).await
    }
}

fn bind_value<'q>(query: PgQuery<'q>, value: &ColumnValue) -> PgQuery<'q> {
    match value {
        ColumnValue::Null(kind) => bind_null(query, *kind),
        ColumnValue::Bool(v) => query.bind(*v),
        ColumnValue::SmallInt(v) => query.bind(*v),
        ColumnValue::Int(v) => query.bind(*v),
        ColumnValue::BigInt(v) => query.bind(*v),
        ColumnValue::Real(v) => query.bind(*v),
        ColumnValue::Double(v) => query.bind(*v),
        ColumnValue::Text(v) => query.bind(v.clone()),
        ColumnValue::Json(v) => query.bind(JsonTextParam(v.as_str().to_owned())),
        ColumnValue::Uuid(v) => query.bind(*v),
        ColumnValue::Timestamp(v) => query.bind(*v),
        ColumnValue::Array(array) => bind_array(query, array),
    }
}

fn bind_array<'q>(query: PgQuery<'q>, array: &ArrayValue) -> PgQuery<'q> {
    match array {
        ArrayValue::Bool(v) => query.bind(v.clone()),
        ArrayValue::SmallInt(v) => query.bind(v.clone()),
        ArrayValue::Int(v) => query.bind(v.clone()),
        ArrayValue::BigInt(v) => query.bind(v.clone()),
        ArrayValue::Real(v) => query.bind(v.clone()),
        ArrayValue::Double(v) => query.bind(v.clone()),
        ArrayValue::Text(v) => query.bind(v.clone()),
        ArrayValue::Uuid(v) => query.bind(v.clone()),
        ArrayValue::Timestamp(v) => query.bind(v.clone()),
    }
}

fn bind_null(query: PgQuery<'_>, kind: ColumnKind) -> PgQuery<'_> {
    match kind {
        ColumnKind::Json => query.bind(None::<JsonTextParam>),
        ColumnKind::Scalar(scalar) => match scalar {
            ScalarKind::Bool => query.bind(None::<bool>),
            ScalarKind::SmallInt => query.bind(None::<i16>),
            ScalarKind::Int => query.bind(None::<i32>),
            ScalarKind::BigInt => query.bind(None::<i64>),
            ScalarKind::Real => query.bind(None::<f32>),
            ScalarKind::Double => query.bind(None::<f64>),
            ScalarKind::Text => query.bind(None::<String>),
            ScalarKind::Uuid => query.bind(None::<Uuid>),
            ScalarKind::Timestamp => query.bind(None::<DateTime<Utc>>),
        },
        ColumnKind::Array(element) => match element {
            ScalarKind::Bool => query.bind(None::<Vec<bool>>),
            ScalarKind::SmallInt => query.bind(None::<Vec<i16>>),
            ScalarKind::Int => query.bind(None::<Vec<i32>>),
            ScalarKind::BigInt => query.bind(None::<Vec<i64>>),
            ScalarKind::Real => query.bind(None::<Vec<f32>>),
            ScalarKind::Double => query.bind(None::<Vec<f64>>),
            ScalarKind::Text => query.bind(None::<Vec<String>>),
            ScalarKind::Uuid => query.bind(None::<Vec<Uuid>>),
            ScalarKind::Timestamp => query.bind(None::<Vec<DateTime<Utc>>>),
        },
    }
}
