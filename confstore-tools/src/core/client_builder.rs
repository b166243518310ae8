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

//! Store client builder
//!
//! Resolves the layered [`ClientConfig`] (defaults, config file, environment,
//! flags) and constructs the [`HttpStoreClient`] a command talks to.

use std::path::PathBuf;

use confstore_client::ClientConfig;
use confstore_client::HttpStoreClient;
use tracing::debug;

use crate::commands::CommonArgs;
use crate::core::ConfStoreResult;
use crate::core::ToolsError;

/// Builder for the per-invocation store client
///
/// # Examples
///
/// ```rust,ignore
/// use confstore_tools::core::client_builder::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .http_addr("10.0.0.7:8500")
///     .token("b1gs33cr3t")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    http_addr: Option<String>,
    token: Option<String>,
    config_file: Option<PathBuf>,
}

impl ClientBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the flags every command shares
    pub fn from_common_args(args: &CommonArgs) -> Self {
        let mut builder = Self::new();
        if let Some(addr) = &args.http_addr {
            builder = builder.http_addr(addr);
        }
        if let Some(token) = &args.token {
            builder = builder.token(token);
        }
        if let Some(path) = &args.config_file {
            builder = builder.config_file(path.clone());
        }
        builder
    }

    /// Agent address; an empty value leaves lower layers in charge
    #[inline]
    pub fn http_addr(mut self, addr: impl Into<String>) -> Self {
        self.http_addr = Some(addr.into()).filter(|a: &String| !a.trim().is_empty());
        self
    }

    /// ACL token; an empty value leaves lower layers in charge
    #[inline]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|t: &String| !t.is_empty());
        self
    }

    #[inline]
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Merge every configuration layer, highest precedence last
    pub fn resolve_config(&self) -> ConfStoreResult<ClientConfig> {
        let mut config = match &self.config_file {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        config.apply_env();
        if let Some(addr) = &self.http_addr {
            config.address = addr.trim().to_string();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        Ok(config)
    }

    /// Build the client.
    ///
    /// Any failure, including an unreadable config file, is reported as a
    /// connection error.
    pub fn build(self) -> ConfStoreResult<HttpStoreClient> {
        let config = self.resolve_config().map_err(ToolsError::connect_failed)?;
        debug!(address = %config.address, scheme = %config.scheme, "building store client");
        HttpStoreClient::new(config).map_err(|e| ToolsError::connect_failed(e).into())
    }
}
