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

//! Result and error lines
//!
//! Command results go to stdout, failures to stderr. Colours are only used when
//! both streams are terminals, so piped output stays plain.

use std::io::IsTerminal;

use colored::Colorize;

/// Decide once per process whether to colour output
pub fn init_colors() {
    if !(std::io::stdout().is_terminal() && std::io::stderr().is_terminal()) {
        colored::control::set_override(false);
    }
}

/// Print a success message in green
pub fn print_success(message: &str) {
    println!("{}", message.green());
}

/// Print an error message in red on stderr
pub fn print_error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Print a command result verbatim
pub fn print_result(result: &str) {
    println!("{result}");
}
