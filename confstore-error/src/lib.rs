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

//! # Confstore Error Handling
//!
//! One error type, [`ConfStoreError`], is shared by the client library and the
//! command-line tools. Each variant names a category of failure:
//!
//! - argument, connection and operation failures raised by the CLI commands
//!   ([`ToolsError`])
//! - transport failures talking to the cluster agent ([`NetworkError`])
//! - wire decoding failures ([`SerializationError`])
//! - non-success HTTP responses from the agent
//!
//! ```rust
//! use confstore_error::ConfStoreError;
//! use confstore_error::ConfStoreResult;
//! use confstore_error::ToolsError;
//!
//! fn require_file(args: &[&str]) -> ConfStoreResult<String> {
//!     match args {
//!         [file] => Ok(file.to_string()),
//!         [] => Err(ToolsError::missing_argument("FILE").into()),
//!         _ => Err(ToolsError::too_many_arguments(1, args.len()).into()),
//!     }
//! }
//!
//! let err = require_file(&[]).unwrap_err();
//! assert!(matches!(err, ConfStoreError::Tools(_)));
//! assert_eq!(err.to_string(), "Missing FILE argument");
//! ```

pub mod unified;

pub use unified::ConfStoreError;
pub use unified::ConfStoreResult;
pub use unified::NetworkError;
pub use unified::SerializationError;
pub use unified::ToolsError;
