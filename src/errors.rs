// ABOUTME: Error types for rowkit, re-exported from rowkit-core
// ABOUTME: Insert taxonomy plus the HTTP error responder and its adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use rowkit_core::errors::*;
