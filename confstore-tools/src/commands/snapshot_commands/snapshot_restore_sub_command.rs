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

use std::path::Path;

use clap::Parser;
use confstore_client::ClusterStoreClient;
use tokio::fs::File;
use tracing::debug;

use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::client_builder::ClientBuilder;
use crate::core::ConfStoreResult;
use crate::core::ToolsError;
use crate::ui::output;
use crate::ui::progress;

#[derive(Debug, Clone, Parser)]
pub struct SnapshotRestoreSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(value_name = "FILE", num_args = 0..)]
    args: Vec<String>,
}

impl SnapshotRestoreSubCommand {
    pub(crate) const LONG_ABOUT: &'static str = "Restores an atomic, point-in-time snapshot of the state of the servers which
includes key/value entries, service catalog, prepared queries, sessions, and
ACLs. The snapshot is read from the given file.

Restores involve a potentially dangerous low-level operation that is not
designed to handle server failures during a restore. This command is primarily
intended to be used when recovering from a disaster, restoring into a fresh
cluster of servers.

To restore a snapshot from the file \"backup.snap\":

    $ confstore snapshot restore backup.snap";

    pub fn snapshot_file(&self) -> ConfStoreResult<&Path> {
        validators::required_argument(&self.args, "FILE").map(Path::new)
    }

    /// Stream the file at `path` to the store.
    ///
    /// The store is not contacted when the file cannot be opened.
    pub async fn restore<C: ClusterStoreClient>(&self, client: &C, path: &Path) -> ConfStoreResult<()> {
        let file = File::open(path)
            .await
            .map_err(|e| ToolsError::snapshot_file_open(path.display().to_string(), e))?;
        debug!(path = %path.display(), "restoring snapshot");

        let spinner = progress::create_spinner("Restoring snapshot");
        let result = client.restore(file, &self.common_args.write_options()).await;
        spinner.finish_and_clear();

        result.map_err(|e| ToolsError::operation_failed("Error restoring snapshot", e).into())
    }
}

impl CommandExecute for SnapshotRestoreSubCommand {
    async fn execute(&self) -> ConfStoreResult<()> {
        let path = self.snapshot_file()?;
        let client = ClientBuilder::from_common_args(&self.common_args).build()?;
        self.restore(&client, path).await?;
        output::print_success("Restored snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use confstore_client::WriteOptions;
    use confstore_error::ConfStoreError;

    use super::*;
    use crate::commands::fake_store::Call;
    use crate::commands::fake_store::FakeStore;

    fn parse(args: &[&str]) -> SnapshotRestoreSubCommand {
        SnapshotRestoreSubCommand::try_parse_from(std::iter::once("restore").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn requires_exactly_one_file() {
        assert_eq!(parse(&["backup.snap"]).snapshot_file().unwrap(), Path::new("backup.snap"));
        assert_eq!(parse(&[]).snapshot_file().unwrap_err().to_string(), "Missing FILE argument");
        assert_eq!(
            parse(&["a.snap", "b.snap"]).snapshot_file().unwrap_err().to_string(),
            "Too many arguments (expected 1, got 2)"
        );
    }

    #[tokio::test]
    async fn argument_errors_never_reach_the_store() {
        for args in [&[][..], &["a.snap", "b.snap"][..]] {
            let err = parse(args).execute().await.unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfStoreError::Tools(ToolsError::MissingArgument { .. } | ToolsError::TooManyArguments { .. })
                ),
                "{err}"
            );
        }
    }

    #[tokio::test]
    async fn streams_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"raft-snapshot-bytes").unwrap();
        let store = FakeStore::new();
        let cmd = parse(&["--datacenter", "dc4", file.path().to_str().unwrap()]);

        cmd.restore(&store, cmd.snapshot_file().unwrap()).await.unwrap();

        assert_eq!(
            store.calls(),
            vec![Call::Restore {
                snapshot: b"raft-snapshot-bytes".to_vec(),
                options: WriteOptions::default().datacenter(Some("dc4".to_string())),
            }]
        );
    }

    #[tokio::test]
    async fn unopenable_file_skips_restore() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.snap");
        let store = FakeStore::new();
        let cmd = parse(&[missing.to_str().unwrap()]);

        let err = cmd.restore(&store, &missing).await.unwrap_err();

        assert!(matches!(err, ConfStoreError::Tools(ToolsError::SnapshotFileOpen { .. })));
        assert!(err.to_string().starts_with("Error opening snapshot file: "), "{err}");
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn restore_failure_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = FakeStore::new().failing(500, "restore failed");
        let cmd = parse(&[file.path().to_str().unwrap()]);

        let err = cmd.restore(&store, file.path()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error restoring snapshot: Unexpected response code: 500 (restore failed)"
        );
        assert_eq!(store.calls().len(), 1);
    }
}
