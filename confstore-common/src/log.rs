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

use std::str::FromStr;

const DEFAULT_LEVEL: &str = "WARN";

/// Initializes the logger for command-line use.
///
/// The level comes from `RUST_LOG` and defaults to `WARN`. Output goes to stderr so
/// that command results on stdout stay machine-readable.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG").unwrap_or(String::from(DEFAULT_LEVEL));
    install(parse_level(&level));
}

fn parse_level(level: &str) -> tracing::Level {
    tracing::Level::from_str(level.trim()).unwrap_or(tracing::Level::WARN)
}

fn install(level: tracing::Level) {
    // a second initialisation in the same process keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .with_line_number(true)
        .with_max_level(level)
        .try_init();
}
