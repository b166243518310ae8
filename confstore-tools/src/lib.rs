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

//! Confstore Tools - command-line client for the cluster agent
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Commands (commands/)             │
//! │  - kv export / kv delete                │
//! │  - snapshot restore                     │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │   Store client (confstore-client)       │
//! │  - ClusterStoreClient trait             │
//! │  - HttpStoreClient                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ```bash
//! confstore kv export app/ > app.json
//! confstore kv delete -recurse app/
//! confstore snapshot restore backup.snap
//! ```

pub mod core {
    //! Client construction shared by every command

    pub mod client_builder;

    pub use confstore_error::ConfStoreError;
    pub use confstore_error::ConfStoreResult;
    pub use confstore_error::ToolsError;
}

pub mod cli {
    //! Argument handling and output rendering used by the commands

    pub mod args;
    pub mod formatters;
    pub mod validators;
}

pub mod ui;

pub mod commands;

pub mod confstore_cli;
