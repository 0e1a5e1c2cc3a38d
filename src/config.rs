// ABOUTME: PostgreSQL connection and pool configuration, optionally loaded from the environment
// ABOUTME: Validates the connection URL and pool sizing before a pool is opened
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::constants::{database, env_config};
use crate::errors::ConfigError;

/// PostgreSQL connection and pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections kept open
    pub min_connections: u32,
    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Configuration for `url` with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: database::DEFAULT_MAX_CONNECTIONS,
            min_connections: database::DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: database::DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }

    /// Optional convenience: load configuration from environment variables
    ///
    /// Nothing in the library calls this; binaries opt in. `DATABASE_URL` is
    /// required and pool settings fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var(env_config::DATABASE_URL).map_err(|_| ConfigError::Missing {
            key: env_config::DATABASE_URL,
        })?;

        let config = Self {
            url,
            max_connections: env_or(
                env_config::POSTGRES_MAX_CONNECTIONS,
                database::DEFAULT_MAX_CONNECTIONS,
            )?,
            min_connections: env_or(
                env_config::POSTGRES_MIN_CONNECTIONS,
                database::DEFAULT_MIN_CONNECTIONS,
            )?,
            acquire_timeout_secs: env_or(
                env_config::POSTGRES_ACQUIRE_TIMEOUT,
                database::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the URL scheme and pool sizing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !database::URL_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::Invalid {
                key: env_config::DATABASE_URL,
                reason: "expected a postgres:// or postgresql:// URL".to_owned(),
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: env_config::POSTGRES_MAX_CONNECTIONS,
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid {
                key: env_config::POSTGRES_MIN_CONNECTIONS,
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.min_connections, self.max_connections
                ),
            });
        }
        Ok(())
    }

    /// Connection URL with any password replaced, for logging
    #[must_use]
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let Some((credentials, host)) = rest.rsplit_once('@') else {
            return self.url.clone();
        };
        match credentials.split_once(':') {
            Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
            None => self.url.clone(),
        }
    }
}

fn env_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|e| ConfigError::Invalid {
            key,
            reason: format!("{raw:?}: {e}"),
        })
    })
}
