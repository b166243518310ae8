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

use clap::Parser;
use confstore_client::ClusterStoreClient;
use tracing::debug;

use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::client_builder::ClientBuilder;
use crate::core::ConfStoreResult;
use crate::core::ToolsError;
use crate::ui::output;

/// The single store operation a delete invocation resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest<'a> {
    Tree { prefix: &'a str },
    Cas { key: &'a str, modify_index: u64 },
    Key { key: &'a str },
}

#[derive(Debug, Clone, Parser)]
pub struct KvDeleteSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        long = "cas",
        help = "Perform a Check-And-Set operation. Specifying this value also requires the -modify-index flag"
    )]
    cas: bool,

    #[arg(
        long = "modify-index",
        default_value_t = 0,
        value_name = "INDEX",
        help = "Unsigned integer representing the ModifyIndex of the key. This is used in combination with the -cas flag"
    )]
    modify_index: u64,

    #[arg(
        long = "recurse",
        help = "Recursively delete all keys with the path. The default value is false"
    )]
    recurse: bool,

    #[arg(value_name = "KEY_OR_PREFIX", num_args = 0..)]
    args: Vec<String>,
}

impl KvDeleteSubCommand {
    pub(crate) const LONG_ABOUT: &'static str = "Removes the value from the KV store at the given key. If no key exists at the
path, no action is taken.

To delete the value for the key named \"foo\" in the KV store:

    $ confstore kv delete foo

To delete all keys which start with \"foo\", specify the -recurse option:

    $ confstore kv delete -recurse foo

This will delete the keys named \"foo\", \"food\", and \"foo/bar/zip\" if they
existed.";

    /// Validate flags and arguments, in order, and pick the operation.
    pub fn delete_request(&self) -> ConfStoreResult<DeleteRequest<'_>> {
        let key = validators::optional_argument(&self.args)?
            .map(validators::normalize_key)
            .unwrap_or_default();

        if key.is_empty() && !self.recurse {
            return Err(ToolsError::MissingKey.into());
        }
        if self.cas && self.modify_index == 0 {
            return Err(ToolsError::invalid_flags("Must specify -modify-index with -cas!").into());
        }
        if self.modify_index != 0 && !self.cas {
            return Err(ToolsError::invalid_flags("Cannot specify -modify-index without -cas!").into());
        }
        if self.recurse && self.cas {
            return Err(ToolsError::invalid_flags("Cannot specify both -cas and -recurse!").into());
        }

        Ok(if self.recurse {
            DeleteRequest::Tree { prefix: key }
        } else if self.cas {
            DeleteRequest::Cas {
                key,
                modify_index: self.modify_index,
            }
        } else {
            DeleteRequest::Key { key }
        })
    }

    /// Perform `request` and return the success message.
    pub async fn delete<C: ClusterStoreClient>(&self, client: &C, request: &DeleteRequest<'_>) -> ConfStoreResult<String> {
        let options = self.common_args.write_options();
        debug!(?request, "deleting");
        match *request {
            DeleteRequest::Tree { prefix } => {
                client.delete_tree(prefix, &options).await.map_err(|e| {
                    ToolsError::operation_failed(format!("Error! Did not delete prefix {prefix}"), e)
                })?;
                Ok(format!("Success! Deleted keys with prefix: {prefix}"))
            }
            DeleteRequest::Cas { key, modify_index } => {
                let deleted = client
                    .delete_cas(key, modify_index, &options)
                    .await
                    .map_err(|e| ToolsError::operation_failed(format!("Error! Did not delete key {key}"), e))?;
                if !deleted {
                    return Err(ToolsError::cas_failed(key).into());
                }
                Ok(format!("Success! Deleted key: {key}"))
            }
            DeleteRequest::Key { key } => {
                client
                    .delete(key, &options)
                    .await
                    .map_err(|e| ToolsError::operation_failed(format!("Error deleting key {key}"), e))?;
                Ok(format!("Success! Deleted key: {key}"))
            }
        }
    }
}

impl CommandExecute for KvDeleteSubCommand {
    async fn execute(&self) -> ConfStoreResult<()> {
        let request = self.delete_request()?;
        let client = ClientBuilder::from_common_args(&self.common_args).build()?;
        let message = self.delete(&client, &request).await?;
        output::print_success(&message);
        Ok(())
    }
}
