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

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Parser;
use confstore_client::ClusterStoreClient;
use confstore_client::KVPair;
use serde::Serialize;
use tracing::debug;

use crate::cli::formatters::Formatter;
use crate::cli::formatters::JsonFormatter;
use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::client_builder::ClientBuilder;
use crate::core::ConfStoreResult;
use crate::core::ToolsError;
use crate::ui::output;

/// One exported entry; the value is standard base64
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    pub key: String,
    pub flags: u64,
    pub value: String,
}

impl From<&KVPair> for ExportEntry {
    fn from(pair: &KVPair) -> Self {
        Self {
            key: pair.key.clone(),
            flags: pair.flags,
            value: STANDARD.encode(&pair.value),
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct KvExportSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        long = "stale",
        help = "Permit any server to answer the query instead of only the leader"
    )]
    stale: bool,

    #[arg(value_name = "KEY_OR_PREFIX", num_args = 0..)]
    args: Vec<String>,
}

impl KvExportSubCommand {
    pub(crate) const LONG_ABOUT: &'static str = "Retrieves key-value pairs for the given prefix from the KV store, and writes
a JSON representation to stdout. This can be used with the command
\"confstore kv import\" to move entire trees between clusters.

    $ confstore kv export vault

Omitting the prefix exports the whole tree.";

    /// Prefix to export, leading `/` stripped; empty means everything
    pub fn prefix(&self) -> ConfStoreResult<&str> {
        Ok(validators::optional_argument(&self.args)?
            .map(validators::normalize_key)
            .unwrap_or_default())
    }

    /// List everything under `prefix` and render it as the export document.
    pub async fn export<C: ClusterStoreClient>(&self, client: &C, prefix: &str) -> ConfStoreResult<String> {
        let options = self.common_args.query_options().allow_stale(self.stale);
        let pairs = client
            .list(prefix, &options)
            .await
            .map_err(|e| ToolsError::operation_failed("Error querying agent", e))?;
        debug!(prefix, count = pairs.len(), "exporting pairs");

        let entries: Vec<ExportEntry> = pairs.iter().map(ExportEntry::from).collect();
        JsonFormatter::tabs()
            .format(&entries)
            .map_err(|e| ToolsError::operation_failed("Error exporting KV data", e).into())
    }
}

impl CommandExecute for KvExportSubCommand {
    async fn execute(&self) -> ConfStoreResult<()> {
        let prefix = self.prefix()?;
        let client = ClientBuilder::from_common_args(&self.common_args).build()?;
        let exported = self.export(&client, prefix).await?;
        output::print_result(&exported);
        Ok(())
    }
}
