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

use std::ffi::OsString;
use std::io::Write;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use tracing::debug;

use crate::cli::args::normalize_single_dash_flags;
use crate::cli::args::LongFlags;
use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::core::ConfStoreError;
use crate::core::ConfStoreResult;
use crate::core::ToolsError;
use crate::ui::output;

const BIN_NAME: &str = "confstore";

#[derive(Parser)]
#[command(name = "confstore", version)]
#[command(about = "Command-line client for the confstore cluster agent", long_about = None)]
pub struct ConfStoreCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl ConfStoreCli {
    /// Parse `args` (program name first), accepting single-dash long flags.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let flags = LongFlags::from_command(&Self::command());
        Self::try_parse_from(normalize_single_dash_flags(args, &flags))
    }

    pub async fn run(&self) -> ConfStoreResult<()> {
        if let Some(shell) = &self.completion {
            return generate_completion(shell, &mut std::io::stdout());
        }

        match &self.commands {
            Some(commands) => {
                debug!("dispatching command");
                commands.execute().await
            }
            None => Err(ConfStoreError::illegal_argument(
                "No command specified. Use --help for usage information.",
            )),
        }
    }

    /// Run and render the outcome; returns the process exit status.
    pub async fn handle(&self) -> u8 {
        match self.run().await {
            Ok(()) => 0,
            Err(e) => {
                output::print_error(&e.to_string());
                1
            }
        }
    }
}

pub fn generate_completion(shell: &str, out: &mut impl Write) -> ConfStoreResult<()> {
    let mut cmd = ConfStoreCli::command();
    match shell.to_lowercase().as_str() {
        "bash" => generate(Bash, &mut cmd, BIN_NAME, out),
        "zsh" => generate(Zsh, &mut cmd, BIN_NAME, out),
        "fish" => generate(Fish, &mut cmd, BIN_NAME, out),
        _ => {
            return Err(ToolsError::UnsupportedShell {
                shell: shell.to_string(),
            }
            .into())
        }
    }
    Ok(())
}
