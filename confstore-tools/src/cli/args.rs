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

//! Raw argument pre-processing
//!
//! Long options may be spelled with a single dash (`-recurse`,
//! `-modify-index=5`). Those naming a known long option are rewritten to the
//! double-dash form clap parses. The value following an option that takes one
//! is left alone, as is everything after a bare `--`.

use std::collections::HashMap;
use std::ffi::OsString;

use clap::Command;

/// Long option names of a command tree, and whether each takes a value
#[derive(Debug, Clone, Default)]
pub struct LongFlags {
    flags: HashMap<String, bool>,
}

impl LongFlags {
    pub fn from_command(cmd: &Command) -> Self {
        let mut flags = Self::default();
        // generated by clap only when the command is built
        flags.flags.insert("help".to_string(), false);
        flags.flags.insert("version".to_string(), false);
        flags.collect(cmd);
        flags
    }

    fn collect(&mut self, cmd: &Command) {
        for arg in cmd.get_arguments() {
            if let Some(long) = arg.get_long() {
                self.flags.insert(long.to_string(), arg.get_action().takes_values());
            }
        }
        for sub in cmd.get_subcommands() {
            self.collect(sub);
        }
    }

    fn takes_value(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }
}

pub fn normalize_single_dash_flags<I, T>(args: I, flags: &LongFlags) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    let mut value_expected = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough || std::mem::take(&mut value_expected) {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(option) = LongOption::parse(text) else {
                return arg;
            };
            match flags.takes_value(option.name) {
                Some(takes_value) => {
                    value_expected = takes_value && !option.inline_value;
                    if option.double_dash {
                        arg
                    } else {
                        OsString::from(format!("-{text}"))
                    }
                }
                None => arg,
            }
        })
        .collect()
}

/// `-name[=value]` or `--name[=value]`
struct LongOption<'a> {
    name: &'a str,
    double_dash: bool,
    inline_value: bool,
}

impl<'a> LongOption<'a> {
    fn parse(arg: &'a str) -> Option<Self> {
        let (double_dash, body) = match arg.strip_prefix("--") {
            Some(body) => (true, body),
            None => (false, arg.strip_prefix('-')?),
        };
        let (name, inline_value) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };
        (!name.is_empty()).then_some(Self {
            name,
            double_dash,
            inline_value,
        })
    }
}
