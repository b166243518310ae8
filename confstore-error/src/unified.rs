// Copyright 2026 The Confstore Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error system for confstore
//!
//! All errors raised by the client and the tools are folded into
//! [`ConfStoreError`], grouped by category.

mod network;
mod serialization;
mod tools;

use std::io;

pub use network::NetworkError;
pub use serialization::SerializationError;
use thiserror::Error;
pub use tools::ToolsError;

/// Main error type for all confstore operations
#[derive(Debug, Error)]
pub enum ConfStoreError {
    // ============================================================================
    // Command Errors
    // ============================================================================
    /// Argument, connection and operation errors surfaced by CLI commands
    #[error(transparent)]
    Tools(#[from] ToolsError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Connection, timeout and send/receive failures
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Encoding or decoding of wire payloads failed
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The agent answered with a non-success status
    #[error("Unexpected response code: {status} ({body})")]
    UnexpectedResponse { status: u16, body: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration source could not be parsed
    #[error("Configuration parse error for '{key}': {reason}")]
    ConfigParseFailed { key: &'static str, reason: String },

    /// Configuration value is not acceptable
    #[error("Invalid configuration for '{key}': value='{value}', reason={reason}")]
    ConfigInvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    // ============================================================================
    // System Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Illegal argument: {0}")]
    IllegalArgument(String),
}

/// Result alias used across confstore crates
pub type ConfStoreResult<T> = std::result::Result<T, ConfStoreError>;

impl ConfStoreError {
    /// Create a non-success response error
    #[inline]
    pub fn unexpected_response(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            status,
            body: body.into(),
        }
    }

    /// Create an illegal argument error
    #[inline]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    /// Create an invalid configuration value error
    #[inline]
    pub fn config_invalid_value(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigInvalidValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Error Conversion Implementations
// ============================================================================

#[cfg(feature = "with_serde")]
impl From<serde_json::Error> for ConfStoreError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(SerializationError::from(e))
    }
}

#[cfg(feature = "with_config")]
impl From<config::ConfigError> for ConfStoreError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigParseFailed {
            key: "config_file",
            reason: e.to_string(),
        }
    }
}
