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

mod kv_commands;
mod snapshot_commands;

#[cfg(test)]
mod fake_store;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use confstore_client::QueryOptions;
use confstore_client::WriteOptions;

use crate::core::ConfStoreResult;

pub use kv_commands::KvCommands;
pub use snapshot_commands::SnapshotCommands;

/// A trait that defines the execution behavior for commands.
///
/// Every command validates its own arguments first, then builds a store
/// client from [`CommonArgs`], performs exactly one store operation and
/// prints the outcome. The returned error's `Display` text is what the
/// binary prints on stderr.
#[allow(async_fn_in_trait)]
pub trait CommandExecute {
    async fn execute(&self) -> ConfStoreResult<()>;
}

#[derive(Debug, Parser, Clone, Default)]
pub struct CommonArgs {
    /// Agent HTTP address
    #[arg(
        long = "http-addr",
        required = false,
        allow_hyphen_values = true,
        help = "Address of the agent, eg: '127.0.0.1:8500' or 'https://agent:8501'. Overrides CONFSTORE_HTTP_ADDR"
    )]
    pub http_addr: Option<String>,

    /// ACL token
    #[arg(
        long = "token",
        required = false,
        allow_hyphen_values = true,
        help = "ACL token to use in the request. Overrides CONFSTORE_HTTP_TOKEN"
    )]
    pub token: Option<String>,

    #[arg(
        long = "datacenter",
        required = false,
        allow_hyphen_values = true,
        help = "Name of the datacenter to query. Defaults to the agent's datacenter"
    )]
    pub datacenter: Option<String>,

    #[arg(
        long = "config-file",
        required = false,
        value_name = "PATH",
        help = "Client configuration file (toml, yaml or json)"
    )]
    pub config_file: Option<PathBuf>,
}

impl CommonArgs {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::default().datacenter(self.datacenter.clone())
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions::default().datacenter(self.datacenter.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Interact with the key-value store")]
    Kv(KvCommands),

    #[command(subcommand)]
    #[command(about = "Save, restore and inspect snapshots of server state")]
    Snapshot(SnapshotCommands),
}

impl CommandExecute for Commands {
    async fn execute(&self) -> ConfStoreResult<()> {
        match self {
            Commands::Kv(value) => value.execute().await,
            Commands::Snapshot(value) => value.execute().await,
        }
    }
}
