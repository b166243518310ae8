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

use confstore_error::ConfStoreResult;
use tokio::io::AsyncRead;

use crate::kv::KVPair;
use crate::kv::QueryOptions;
use crate::kv::WriteOptions;

/// Operations the command-line tools issue against the cluster store.
///
/// Every method is a single request; implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait ClusterStoreClient {
    /// All pairs whose key starts with `prefix`, in the store's key order.
    async fn list(&self, prefix: &str, options: &QueryOptions) -> ConfStoreResult<Vec<KVPair>>;

    /// Remove a single key. Removing an absent key succeeds.
    async fn delete(&self, key: &str, options: &WriteOptions) -> ConfStoreResult<()>;

    /// Remove every key starting with `prefix`.
    async fn delete_tree(&self, prefix: &str, options: &WriteOptions) -> ConfStoreResult<()>;

    /// Remove `key` only if its modify index still equals `modify_index`.
    ///
    /// `Ok(false)` means the store answered and refused the delete.
    async fn delete_cas(&self, key: &str, modify_index: u64, options: &WriteOptions) -> ConfStoreResult<bool>;

    /// Stream a snapshot to the servers, replacing the whole cluster state.
    async fn restore<R>(&self, snapshot: R, options: &WriteOptions) -> ConfStoreResult<()>
    where
        R: AsyncRead + Send + Sync + Unpin + 'static;
}
