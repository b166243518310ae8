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

//! Client for the confstore cluster agent
//!
//! Commands talk to the store through [`ClusterStoreClient`]; the
//! production implementation is [`HttpStoreClient`], which speaks the agent's
//! HTTP API.
//!
//! ```rust,ignore
//! use confstore_client::ClientConfig;
//! use confstore_client::ClusterStoreClient;
//! use confstore_client::HttpStoreClient;
//! use confstore_client::QueryOptions;
//!
//! let mut config = ClientConfig::default();
//! config.apply_env();
//! let client = HttpStoreClient::new(config)?;
//! let pairs = client.list("app/", &QueryOptions::default().allow_stale(true)).await?;
//! ```

pub mod client_config;
pub mod http;
pub mod kv;
pub mod store_client;

pub use client_config::ClientConfig;
pub use http::http_store_client::HttpStoreClient;
pub use kv::KVPair;
pub use kv::QueryOptions;
pub use kv::WriteOptions;
pub use store_client::ClusterStoreClient;
