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

mod kv_delete_sub_command;
mod kv_export_sub_command;

use clap::Subcommand;

use crate::commands::kv_commands::kv_delete_sub_command::KvDeleteSubCommand;
use crate::commands::kv_commands::kv_export_sub_command::KvExportSubCommand;
use crate::commands::CommandExecute;
use crate::core::ConfStoreResult;

#[derive(Subcommand)]
pub enum KvCommands {
    #[command(
        name = "export",
        about = "Exports a tree from the KV store as JSON",
        long_about = KvExportSubCommand::LONG_ABOUT,
    )]
    Export(KvExportSubCommand),

    #[command(
        name = "delete",
        about = "Removes data from the KV store",
        long_about = KvDeleteSubCommand::LONG_ABOUT,
    )]
    Delete(KvDeleteSubCommand),
}

impl CommandExecute for KvCommands {
    async fn execute(&self) -> ConfStoreResult<()> {
        match self {
            KvCommands::Export(value) => value.execute().await,
            KvCommands::Delete(value) => value.execute().await,
        }
    }
}
