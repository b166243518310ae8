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

//! JSON formatter

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use super::Formatter;
use crate::core::ConfStoreResult;

/// Pretty-printed JSON with a configurable indent
pub struct JsonFormatter {
    indent: &'static [u8],
}

impl JsonFormatter {
    /// One tab per nesting level, the layout `kv export` writes
    pub const fn tabs() -> Self {
        Self { indent: b"\t" }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::tabs()
    }
}

impl Formatter for JsonFormatter {
    fn format<T: Serialize>(&self, data: &T) -> ConfStoreResult<String> {
        let mut out = Vec::with_capacity(128);
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(self.indent));
        data.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Entry {
        key: &'static str,
        flags: u64,
    }

    #[test]
    fn test_tab_indented_output() {
        let data = vec![Entry { key: "a", flags: 0 }];
        let output = JsonFormatter::tabs().format(&data).unwrap();
        assert_eq!(output, "[\n\t{\n\t\t\"key\": \"a\",\n\t\t\"flags\": 0\n\t}\n]");
    }

    #[test]
    fn test_empty_list() {
        let data: Vec<Entry> = Vec::new();
        assert_eq!(JsonFormatter::default().format(&data).unwrap(), "[]");
    }
}
