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

//! In-memory [`ClusterStoreClient`] recording every call, for command tests

use std::cell::RefCell;
use std::collections::BTreeMap;

use confstore_client::ClusterStoreClient;
use confstore_client::KVPair;
use confstore_client::QueryOptions;
use confstore_client::WriteOptions;
use confstore_error::ConfStoreError;
use confstore_error::ConfStoreResult;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List { prefix: String, options: QueryOptions },
    Delete { key: String, options: WriteOptions },
    DeleteTree { prefix: String, options: WriteOptions },
    DeleteCas { key: String, modify_index: u64, options: WriteOptions },
    Restore { snapshot: Vec<u8>, options: WriteOptions },
}

#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    pairs: RefCell<BTreeMap<String, KVPair>>,
    calls: RefCell<Vec<Call>>,
    failure: Option<(u16, &'static str)>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a pair with the given modify index
    pub(crate) fn with_pair(self, key: &str, flags: u64, value: &'static [u8], modify_index: u64) -> Self {
        let mut pair = KVPair::new(key, flags, value);
        pair.modify_index = modify_index;
        self.pairs.borrow_mut().insert(key.to_string(), pair);
        self
    }

    /// Every call answers with this status
    pub(crate) fn failing(mut self, status: u16, body: &'static str) -> Self {
        self.failure = Some((status, body));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.pairs.borrow().keys().cloned().collect()
    }

    fn record(&self, call: Call) -> ConfStoreResult<()> {
        self.calls.borrow_mut().push(call);
        match self.failure {
            Some((status, body)) => Err(ConfStoreError::unexpected_response(status, body)),
            None => Ok(()),
        }
    }
}

impl ClusterStoreClient for FakeStore {
    async fn list(&self, prefix: &str, options: &QueryOptions) -> ConfStoreResult<Vec<KVPair>> {
        self.record(Call::List {
            prefix: prefix.to_string(),
            options: options.clone(),
        })?;
        Ok(self
            .pairs
            .borrow()
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, pair)| pair.clone())
            .collect())
    }

    async fn delete(&self, key: &str, options: &WriteOptions) -> ConfStoreResult<()> {
        self.record(Call::Delete {
            key: key.to_string(),
            options: options.clone(),
        })?;
        self.pairs.borrow_mut().remove(key);
        Ok(())
    }

    async fn delete_tree(&self, prefix: &str, options: &WriteOptions) -> ConfStoreResult<()> {
        self.record(Call::DeleteTree {
            prefix: prefix.to_string(),
            options: options.clone(),
        })?;
        self.pairs.borrow_mut().retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }

    async fn delete_cas(&self, key: &str, modify_index: u64, options: &WriteOptions) -> ConfStoreResult<bool> {
        self.record(Call::DeleteCas {
            key: key.to_string(),
            modify_index,
            options: options.clone(),
        })?;
        let mut pairs = self.pairs.borrow_mut();
        match pairs.get(key) {
            Some(pair) if pair.modify_index == modify_index => {
                pairs.remove(key);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restore<R>(&self, mut snapshot: R, options: &WriteOptions) -> ConfStoreResult<()>
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
    {
        let mut contents = Vec::new();
        snapshot.read_to_end(&mut contents).await?;
        self.record(Call::Restore {
            snapshot: contents,
            options: options.clone(),
        })
    }
}
