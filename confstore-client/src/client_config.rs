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

use std::path::Path;

use confstore_common::EnvUtils::EnvUtils;
use confstore_common::ParseConfigFile::parse_config_file;
use confstore_common::DEFAULT_HTTP_ADDR;
use confstore_common::HTTP_ADDR_ENV;
use confstore_common::HTTP_SSL_ENV;
use confstore_common::HTTP_TIMEOUT_ENV;
use confstore_common::HTTP_TOKEN_ENV;
use confstore_error::ConfStoreResult;
use confstore_error::NetworkError;
use serde::Deserialize;
use url::Url;

/// Connection settings for the cluster agent.
///
/// Sources are layered by the caller: [`ClientConfig::default`], then an
/// optional file ([`ClientConfig::from_file`]), then the environment
/// ([`ClientConfig::apply_env`]), then command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `host:port`, or a full URL whose scheme wins over [`ClientConfig::scheme`]
    pub address: String,
    pub scheme: String,
    pub token: Option<String>,
    /// Datacenter used when a request does not name one
    pub datacenter: Option<String>,
    /// Whole-request timeout; unset means the transport never gives up on its own
    pub timeout_millis: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_HTTP_ADDR.to_string(),
            scheme: "http".to_string(),
            token: None,
            datacenter: None,
            timeout_millis: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with a configuration file
    pub fn from_file(path: &Path) -> ConfStoreResult<Self> {
        parse_config_file(path)
    }

    /// Overlay `CONFSTORE_HTTP_ADDR`, `CONFSTORE_HTTP_TOKEN`, `CONFSTORE_HTTP_SSL`
    /// and `CONFSTORE_HTTP_TIMEOUT`. Unset, blank or unparsable values are ignored.
    pub fn apply_env(&mut self) {
        if let Some(address) = EnvUtils::get_non_empty_property(HTTP_ADDR_ENV) {
            self.address = address;
        }
        if let Some(token) = EnvUtils::get_non_empty_property(HTTP_TOKEN_ENV) {
            self.token = Some(token);
        }
        if EnvUtils::get_property_as_bool(HTTP_SSL_ENV, false) {
            self.scheme = "https".to_string();
        }
        if let Some(timeout) = EnvUtils::get_property_as_u64(HTTP_TIMEOUT_ENV) {
            self.timeout_millis = Some(timeout);
        }
    }

    /// Root URL every API path is appended to
    pub fn base_url(&self) -> ConfStoreResult<Url> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(NetworkError::invalid_address(address).into());
        }
        let raw = if address.contains("://") {
            address.to_string()
        } else {
            format!("{}://{}", self.scheme.trim(), address)
        };
        let url = Url::parse(&raw).map_err(|_| NetworkError::invalid_address(address))?;
        match url.scheme() {
            "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(url),
            _ => Err(NetworkError::invalid_address(address).into()),
        }
    }
}
