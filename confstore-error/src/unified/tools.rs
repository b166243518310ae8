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

//! CLI command errors
//!
//! The `Display` text of every variant is exactly what the command prints on
//! stderr before exiting with status 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    /// More positional arguments than the command accepts
    #[error("Too many arguments (expected {expected}, got {got})")]
    TooManyArguments { expected: usize, got: usize },

    /// A required positional argument is absent
    #[error("Missing {name} argument")]
    MissingArgument { name: &'static str },

    /// `kv delete` got neither a key nor `-recurse`
    #[error("Error! Missing KEY argument")]
    MissingKey,

    /// Illegal flag combination
    #[error("{message}")]
    InvalidFlags { message: &'static str },

    /// Completion requested for a shell clap_complete does not know
    #[error("Unsupported shell: {shell} (supported: bash, zsh, fish)")]
    UnsupportedShell { shell: String },

    // ============================================================================
    // Connection Errors
    // ============================================================================
    /// The store client could not be constructed
    #[error("Error connecting to agent: {reason}")]
    ConnectFailed { reason: String },

    // ============================================================================
    // Operation Errors
    // ============================================================================
    /// The store call itself failed
    #[error("{context}: {reason}")]
    OperationFailed { context: String, reason: String },

    /// The store refused a check-and-set delete because the index moved
    #[error("Error! Did not delete key {key}: CAS failed")]
    CasFailed { key: String },

    // ============================================================================
    // Resource Errors
    // ============================================================================
    /// The snapshot file could not be opened
    #[error("Error opening snapshot file: {reason}")]
    SnapshotFileOpen { path: String, reason: String },
}

impl ToolsError {
    #[inline]
    pub fn too_many_arguments(expected: usize, got: usize) -> Self {
        Self::TooManyArguments { expected, got }
    }

    #[inline]
    pub fn missing_argument(name: &'static str) -> Self {
        Self::MissingArgument { name }
    }

    #[inline]
    pub fn invalid_flags(message: &'static str) -> Self {
        Self::InvalidFlags { message }
    }

    #[inline]
    pub fn connect_failed(reason: impl ToString) -> Self {
        Self::ConnectFailed {
            reason: reason.to_string(),
        }
    }

    /// Wrap a failed store call with the command's context line
    #[inline]
    pub fn operation_failed(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::OperationFailed {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    #[inline]
    pub fn cas_failed(key: impl Into<String>) -> Self {
        Self::CasFailed { key: key.into() }
    }

    #[inline]
    pub fn snapshot_file_open(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::SnapshotFileOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
