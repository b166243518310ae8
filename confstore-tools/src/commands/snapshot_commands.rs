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

mod snapshot_restore_sub_command;

use clap::Subcommand;

use crate::commands::snapshot_commands::snapshot_restore_sub_command::SnapshotRestoreSubCommand;
use crate::commands::CommandExecute;
use crate::core::ConfStoreResult;

#[derive(Subcommand)]
pub enum SnapshotCommands {
    #[command(
        name = "restore",
        about = "Restores snapshot of server state",
        long_about = SnapshotRestoreSubCommand::LONG_ABOUT,
    )]
    Restore(SnapshotRestoreSubCommand),
}

impl CommandExecute for SnapshotCommands {
    async fn execute(&self) -> ConfStoreResult<()> {
        match self {
            SnapshotCommands::Restore(value) => value.execute().await,
        }
    }
}
