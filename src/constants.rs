// ABOUTME: Environment variable names and default values for rowkit configuration
// ABOUTME: Pool sizing defaults and logging directives live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Environment variable names
pub mod env_config {
    /// PostgreSQL connection URL (required)
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Maximum pool connections
    pub const POSTGRES_MAX_CONNECTIONS: &str = "POSTGRES_MAX_CONNECTIONS";
    /// Minimum pool connections
    pub const POSTGRES_MIN_CONNECTIONS: &str = "POSTGRES_MIN_CONNECTIONS";
    /// Pool acquire timeout in seconds
    pub const POSTGRES_ACQUIRE_TIMEOUT: &str = "POSTGRES_ACQUIRE_TIMEOUT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `compact`, anything else is pretty)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log output when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Connection pool defaults
pub mod database {
    /// Default maximum pool connections
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    /// Default minimum pool connections
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 0;
    /// Default acquire timeout in seconds
    pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
    /// Accepted URL schemes
    pub const URL_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];
}

/// Logging defaults
pub mod logging {
    /// Default log level
    pub const DEFAULT_LEVEL: &str = "info";
    /// Target name of this crate in filter directives
    pub const CRATE_TARGET: &str = "rowkit";
}
