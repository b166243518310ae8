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

//! Key-value entries and per-request options

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use confstore_error::ConfStoreResult;
use confstore_error::SerializationError;
use serde::Deserialize;

/// A stored entry as returned by the agent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KVPair {
    pub key: String,
    pub create_index: u64,
    /// Index of the last write; the expected value for a check-and-set
    pub modify_index: u64,
    pub lock_index: u64,
    /// Opaque client-defined flags
    pub flags: u64,
    pub value: Bytes,
    pub session: Option<String>,
}

impl KVPair {
    pub fn new(key: impl Into<String>, flags: u64, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            flags,
            value: value.into(),
            ..Default::default()
        }
    }

    /// Decode a list response body. A `null` body is an empty list.
    pub fn decode_list(body: &[u8]) -> ConfStoreResult<Vec<KVPair>> {
        let wire: Option<Vec<KVPairWire>> = serde_json::from_slice(body)?;
        wire.unwrap_or_default()
            .into_iter()
            .map(KVPair::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct KVPairWire {
    key: String,
    #[serde(default)]
    create_index: u64,
    #[serde(default)]
    modify_index: u64,
    #[serde(default)]
    lock_index: u64,
    #[serde(default)]
    flags: u64,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    session: Option<String>,
}

impl TryFrom<KVPairWire> for KVPair {
    type Error = SerializationError;

    fn try_from(wire: KVPairWire) -> Result<Self, Self::Error> {
        let value = match wire.value {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| SerializationError::invalid_value("Value", format!("key '{}': {e}", wire.key)))?,
            None => Vec::new(),
        };
        Ok(KVPair {
            key: wire.key,
            create_index: wire.create_index,
            modify_index: wire.modify_index,
            lock_index: wire.lock_index,
            flags: wire.flags,
            value: Bytes::from(value),
            session: wire.session.filter(|s| !s.is_empty()),
        })
    }
}

/// Options for read requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Overrides the client's configured datacenter
    pub datacenter: Option<String>,
    /// Allow any server, not only the leader, to answer
    pub allow_stale: bool,
}

impl QueryOptions {
    pub fn datacenter(mut self, datacenter: Option<String>) -> Self {
        self.datacenter = datacenter.filter(|dc| !dc.is_empty());
        self
    }

    pub fn allow_stale(mut self, allow_stale: bool) -> Self {
        self.allow_stale = allow_stale;
        self
    }
}

/// Options for write requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overrides the client's configured datacenter
    pub datacenter: Option<String>,
}

impl WriteOptions {
    pub fn datacenter(mut self, datacenter: Option<String>) -> Self {
        self.datacenter = datacenter.filter(|dc| !dc.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use confstore_error::ConfStoreError;

    use super::*;

    #[test]
    fn decode_list_keeps_agent_order() {
        let body = br#"[
            {"Key":"a","CreateIndex":10,"ModifyIndex":12,"LockIndex":0,"Flags":0,"Value":"eA=="},
            {"Key":"a/b","CreateIndex":11,"ModifyIndex":11,"LockIndex":1,"Flags":42,"Value":"eQ==","Session":"adf4238a"}
        ]"#;

        let pairs = KVPair::decode_list(body).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key, "a");
        assert_eq!(pairs[0].value, Bytes::from_static(b"x"));
        assert_eq!(pairs[0].modify_index, 12);
        assert_eq!(pairs[1].key, "a/b");
        assert_eq!(pairs[1].flags, 42);
        assert_eq!(pairs[1].lock_index, 1);
        assert_eq!(pairs[1].session.as_deref(), Some("adf4238a"));
    }

    #[test]
    fn null_value_and_null_body_decode_to_empty() {
        let pairs = KVPair::decode_list(br#"[{"Key":"folder/","Flags":0,"Value":null}]"#).unwrap();
        assert_eq!(pairs[0].value, Bytes::new());

        assert!(KVPair::decode_list(b"null").unwrap().is_empty());
    }

    #[test]
    fn bad_base64_is_serialization_error() {
        let err = KVPair::decode_list(br#"[{"Key":"k","Value":"%%%"}]"#).unwrap_err();
        assert!(matches!(
            err,
            ConfStoreError::Serialization(SerializationError::InvalidValue { field: "Value", .. })
        ));
        assert!(err.to_string().contains("key 'k'"));
    }

    #[test]
    fn malformed_body_is_json_error() {
        let err = KVPair::decode_list(b"<html>").unwrap_err();
        assert!(matches!(err, ConfStoreError::Serialization(_)));
    }

    #[test]
    fn empty_datacenter_means_unset() {
        let options = QueryOptions::default().datacenter(Some(String::new())).allow_stale(true);
        assert_eq!(options.datacenter, None);
        assert!(options.allow_stale);

        let options = WriteOptions::default().datacenter(Some("dc3".to_string()));
        assert_eq!(options.datacenter.as_deref(), Some("dc3"));
    }
}
