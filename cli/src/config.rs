// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
use std::{fs::File, io::BufReader, path::Path};

use log::{info, warn};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};

use crate::util::string_to_u32;

pub const DEFAULT_CONFIG: &str = "cli-config.json";

/// Defaults for commands that take a machine and a command line.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub machine: Option<String>,
    #[serde(default)]
    pub cmdline: String,
    #[serde(default, deserialize_with = "deserialize_board_id")]
    pub board_id: Option<u32>,
}

// parse a board id given as number or as string, like: "0x0105" -> 261
fn deserialize_board_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoardIdVisitor;

    impl<'de> Visitor<'de> for BoardIdVisitor {
        type Value = Option<u32>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a board id as number or hex string")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map(Some).map_err(de::Error::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            string_to_u32(value).map(Some).map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_option(BoardIdVisitor)
}

impl CliConfig {
    /// The command line to boot with: `cmdline` overrides the configured one,
    /// and the configured board id is appended unless one is already given.
    pub fn cmdline(&self, cmdline: Option<&str>) -> String {
        let mut line = cmdline.unwrap_or(&self.cmdline).trim().to_string();
        if let Some(board_id) = self.board_id {
            if !line.split_whitespace().any(|token| token.starts_with("board_id=")) {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&format!("board_id={:#06x}", board_id));
            }
        }
        line
    }
}

pub fn parse_config(json: &str) -> Result<CliConfig, String> {
    serde_json::from_str(json).map_err(|err| format!("Parse config err: {}", err))
}

/// Load `path`. A missing default file is not an error.
pub fn load_config(path: Option<&str>) -> Result<CliConfig, String> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG, false),
    };
    if !explicit && !Path::new(path).exists() {
        return Ok(CliConfig::default());
    }
    let file = File::open(path).map_err(|err| format!("Open config file {} err: {}", path, err))?;
    let config: CliConfig =
        serde_json::from_reader(BufReader::new(file)).map_err(|err| format!("Parse config {} err: {}", path, err))?;
    info!("loaded config {}", path);
    if config.machine.is_none() && config.board_id.is_some() {
        warn!("{}: board_id given without a machine", path);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_id_as_hex_string_or_number() {
        let hex = parse_config(r#"{"machine": "golden", "board_id": "0x0105"}"#).unwrap();
        assert_eq!(hex.board_id, Some(0x105));
        assert_eq!(hex.machine.as_deref(), Some("golden"));

        let num = parse_config(r#"{"board_id": 258}"#).unwrap();
        assert_eq!(num.board_id, Some(0x102));

        let none = parse_config(r#"{"cmdline": "lpm_boot=1"}"#).unwrap();
        assert_eq!(none.board_id, None);
    }

    #[test]
    fn rejects_bad_board_id_and_unknown_keys() {
        assert!(parse_config(r#"{"board_id": "0xnope"}"#).is_err());
        assert!(parse_config(r#"{"vm_id": 1}"#).is_err());
    }

    #[test]
    fn board_id_is_appended_once() {
        let config = parse_config(r#"{"cmdline": "lpm_boot=1", "board_id": "0x0103"}"#).unwrap();
        assert_eq!(config.cmdline(None), "lpm_boot=1 board_id=0x0103");
        assert_eq!(config.cmdline(Some("board_id=0x0101")), "board_id=0x0101");
        assert_eq!(CliConfig::default().cmdline(None), "");
    }

    #[test]
    fn missing_default_config_is_empty() {
        if !Path::new(DEFAULT_CONFIG).exists() {
            assert_eq!(load_config(None), Ok(CliConfig::default()));
        }
        assert!(load_config(Some("/nonexistent/cli-config.json")).is_err());
    }
}
