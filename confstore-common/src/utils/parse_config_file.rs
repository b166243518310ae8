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

use std::fmt::Debug;
use std::path::Path;

use config::Config;
use serde::de::DeserializeOwned;

/// Reads a configuration file in any format the `config` crate recognises by
/// extension (toml, yaml, json, ini) and deserializes it into `C`.
pub fn parse_config_file<C>(config_file: &Path) -> confstore_error::ConfStoreResult<C>
where
    C: Debug + DeserializeOwned,
{
    let cfg = Config::builder().add_source(config::File::from(config_file)).build()?;
    let config_file = cfg.try_deserialize::<C>()?;
    Ok(config_file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use confstore_error::ConfStoreError;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct AgentSection {
        address: String,
        #[serde(default)]
        token: Option<String>,
    }

    #[test]
    fn parses_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "address = \"10.1.2.3:8500\"").unwrap();
        writeln!(file, "token = \"secret\"").unwrap();

        let parsed: AgentSection = parse_config_file(file.path()).unwrap();
        assert_eq!(
            parsed,
            AgentSection {
                address: "10.1.2.3:8500".to_string(),
                token: Some("secret".to_string()),
            }
        );
    }

    #[test]
    fn missing_file_is_config_error() {
        let result = parse_config_file::<AgentSection>(Path::new("/nonexistent/confstore.toml"));
        assert!(matches!(result, Err(ConfStoreError::ConfigParseFailed { .. })));
    }
}
