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

//! CLI input validators
//!
//! Positional-argument checks shared by the commands. Each runs before any
//! connection to the agent is attempted.

use crate::core::ConfStoreResult;
use crate::core::ToolsError;

/// Strip every leading `/` from a key or prefix.
///
/// Stored keys never start with `/`, but users naturally type `/foo`.
pub fn normalize_key(key: &str) -> &str {
    key.trim_start_matches('/')
}

/// Zero or one positional argument.
pub fn optional_argument(args: &[String]) -> ConfStoreResult<Option<&str>> {
    match args {
        [] => Ok(None),
        [arg] => Ok(Some(arg.as_str())),
        _ => Err(ToolsError::too_many_arguments(1, args.len()).into()),
    }
}

/// Exactly one positional argument, named `name` in the error when absent.
pub fn required_argument<'a>(args: &'a [String], name: &'static str) -> ConfStoreResult<&'a str> {
    optional_argument(args)?.ok_or_else(|| ToolsError::missing_argument(name).into())
}
