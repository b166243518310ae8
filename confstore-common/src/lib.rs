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

pub use crate::utils::env_utils as EnvUtils;
pub use crate::utils::parse_config_file as ParseConfigFile;

pub mod log;
pub mod utils;

/// Environment variable holding the agent address, `host:port` or a full URL
pub const HTTP_ADDR_ENV: &str = "CONFSTORE_HTTP_ADDR";

/// Environment variable holding the ACL token sent with every request
pub const HTTP_TOKEN_ENV: &str = "CONFSTORE_HTTP_TOKEN";

/// Environment variable switching the default scheme to https
pub const HTTP_SSL_ENV: &str = "CONFSTORE_HTTP_SSL";

/// Environment variable holding the whole-request timeout in milliseconds
pub const HTTP_TIMEOUT_ENV: &str = "CONFSTORE_HTTP_TIMEOUT";

/// Agent address used when neither a flag, the environment nor a config file set one
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8500";
