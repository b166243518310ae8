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

use std::time::Duration;
use std::time::Instant;

use confstore_error::ConfStoreError;
use confstore_error::ConfStoreResult;
use confstore_error::NetworkError;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::Body;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::StatusCode;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;
use tracing::debug;
use url::Url;

use crate::client_config::ClientConfig;
use crate::kv::KVPair;
use crate::kv::QueryOptions;
use crate::kv::WriteOptions;
use crate::store_client::ClusterStoreClient;

const KV_PATH: [&str; 2] = ["v1", "kv"];
const SNAPSHOT_PATH: [&str; 2] = ["v1", "snapshot"];

/// [`ClusterStoreClient`] speaking the agent's HTTP API
#[derive(Debug, Clone)]
pub struct HttpStoreClient {
    http: reqwest::Client,
    base_url: Url,
    config: ClientConfig,
}

impl HttpStoreClient {
    /// Validate the configuration and build the underlying HTTP client.
    ///
    /// No request is sent; an unreachable agent is only noticed on first use.
    pub fn new(config: ClientConfig) -> ConfStoreResult<Self> {
        let base_url = config.base_url()?;

        let mut headers = HeaderMap::new();
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ConfStoreError::config_invalid_value("token", "<redacted>", e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("confstore/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = config.timeout_millis {
            builder = builder.timeout(Duration::from_millis(timeout));
        }
        let http = builder
            .build()
            .map_err(|e| NetworkError::connection_failed(base_url.as_str(), e.to_string()))?;

        Ok(Self { http, base_url, config })
    }

    /// `base_url` + fixed segments + each `/`-separated part of `key`, percent-encoded.
    ///
    /// URL path normalization would resolve `.` and `..` parts (encoded or not)
    /// and address a different key, so such keys are rejected before any request.
    pub(crate) fn endpoint(&self, path: &[&str], key: Option<&str>) -> ConfStoreResult<Url> {
        if let Some(key) = key {
            if key.split('/').any(|segment| segment == "." || segment == "..") {
                return Err(ConfStoreError::illegal_argument(format!(
                    "key '{key}' contains a '.' or '..' path segment"
                )));
            }
        }
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| NetworkError::invalid_address(self.base_url.as_str()))?;
            segments.pop_if_empty().extend(path);
            if let Some(key) = key {
                segments.extend(key.split('/'));
            }
        }
        Ok(url)
    }

    fn datacenter<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        requested
            .or(self.config.datacenter.as_deref())
            .filter(|dc| !dc.is_empty())
    }

    fn with_query(mut url: Url, params: &[(&str, Option<&str>)]) -> Url {
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in params {
                match value {
                    Some(value) => query.append_pair(name, value),
                    None => query.append_key_only(name),
                };
            }
        }
        url
    }

    async fn send(&self, method: Method, url: Url, request: RequestBuilder) -> ConfStoreResult<Response> {
        let started = Instant::now();
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        debug!(
            %method,
            path = url.path(),
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "agent request"
        );
        Ok(response)
    }

    async fn require_success(&self, response: Response) -> ConfStoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ConfStoreError::unexpected_response(status.as_u16(), body.trim()))
    }

    fn transport_error(&self, e: reqwest::Error) -> ConfStoreError {
        let addr = self.base_url.as_str();
        if e.is_timeout() {
            NetworkError::request_timeout(addr, self.config.timeout_millis.unwrap_or_default()).into()
        } else if e.is_connect() {
            NetworkError::connection_failed(addr, e.to_string()).into()
        } else if e.is_body() || e.is_decode() {
            NetworkError::receive_failed(addr, e.to_string()).into()
        } else {
            NetworkError::send_failed(addr, e.to_string()).into()
        }
    }

    async fn delete_request(&self, key: &str, extra: &[(&str, Option<&str>)], options: &WriteOptions) -> ConfStoreResult<String> {
        let mut params: Vec<(&str, Option<&str>)> = extra.to_vec();
        if let Some(dc) = self.datacenter(options.datacenter.as_deref()) {
            params.push(("dc", Some(dc)));
        }
        let url = Self::with_query(self.endpoint(&KV_PATH, Some(key))?, &params);
        let request = self.http.delete(url.clone());
        let response = self.send(Method::DELETE, url, request).await?;
        let response = self.require_success(response).await?;
        response.text().await.map_err(|e| self.transport_error(e))
    }
}

impl ClusterStoreClient for HttpStoreClient {
    async fn list(&self, prefix: &str, options: &QueryOptions) -> ConfStoreResult<Vec<KVPair>> {
        let mut params: Vec<(&str, Option<&str>)> = vec![("recurse", None)];
        if let Some(dc) = self.datacenter(options.datacenter.as_deref()) {
            params.push(("dc", Some(dc)));
        }
        if options.allow_stale {
            params.push(("stale", None));
        }
        let url = Self::with_query(self.endpoint(&KV_PATH, Some(prefix))?, &params);
        let request = self.http.get(url.clone());
        let response = self.send(Method::GET, url, request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let response = self.require_success(response).await?;
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        KVPair::decode_list(&body)
    }

    async fn delete(&self, key: &str, options: &WriteOptions) -> ConfStoreResult<()> {
        self.delete_request(key, &[], options).await.map(|_| ())
    }

    async fn delete_tree(&self, prefix: &str, options: &WriteOptions) -> ConfStoreResult<()> {
        self.delete_request(prefix, &[("recurse", None)], options)
            .await
            .map(|_| ())
    }

    async fn delete_cas(&self, key: &str, modify_index: u64, options: &WriteOptions) -> ConfStoreResult<bool> {
        let index = modify_index.to_string();
        let body = self
            .delete_request(key, &[("cas", Some(index.as_str()))], options)
            .await?;
        Ok(body.trim() == "true")
    }

    async fn restore<R>(&self, snapshot: R, options: &WriteOptions) -> ConfStoreResult<()>
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
    {
        let mut params: Vec<(&str, Option<&str>)> = Vec::new();
        if let Some(dc) = self.datacenter(options.datacenter.as_deref()) {
            params.push(("dc", Some(dc)));
        }
        let url = Self::with_query(self.endpoint(&SNAPSHOT_PATH, None)?, &params);
        let request = self
            .http
            .put(url.clone())
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(Body::wrap_stream(ReaderStream::new(snapshot)));
        let response = self.send(Method::PUT, url, request).await?;
        self.require_success(response).await?;
        Ok(())
    }
}
