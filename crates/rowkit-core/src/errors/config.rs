// ABOUTME: Configuration error types for environment-driven settings
// ABOUTME: Distinguishes missing variables from unparseable ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing configuration: {key}")]
    Missing {
        /// Environment variable name
        key: &'static str,
    },

    /// An environment variable is set but its value is unusable
    #[error("Invalid configuration for {key}: {reason}")]
    Invalid {
        /// Environment variable name
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}
