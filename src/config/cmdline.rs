// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! The board parameters of the kernel command line.
//!
//! Each recognised `key=value` token is handed to its setup hook, which
//! stores the parsed value into [`BootParams`]. A hook that cannot parse
//! its value logs the problem and leaves the default in place; boot goes on.

use bitflags::bitflags;

use crate::error::{ErrorKind, Result};
use crate::utils::{parse_size, parse_ulong};

bitflags! {
    /// `sec_debug_settings`, the Samsung debug-level bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SecDebugSettings: u32 {
        const ENABLE = 1 << 0;
        const ENABLE_USER = 1 << 1;
        const RAM_DUMP = 1 << 2;
        const CP_CRASH = 1 << 3;
    }
}

/// Where the RAM console lives when `mem_ram_console=` gives no address.
pub const DEFAULT_RAM_CONSOLE_BASE: u64 = 0x1f00_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamConsoleRegion {
    pub base: u64,
    pub size: u64,
}

/// Everything the board code reads from the command line. Built once, never mutated after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BootParams {
    pub board_id: Option<u32>,
    pub sec_debug: SecDebugSettings,
    /// Booted on a factory jig (SMD line test).
    pub jig_smd: bool,
    /// Booted by the charger into low-power charging mode.
    pub lpm_boot: bool,
    pub hats_flag: bool,
    pub ram_console: Option<RamConsoleRegion>,
    /// Tokens not consumed by any hook.
    pub unknown: usize,
}

type SetupHandler = fn(&str, &mut BootParams) -> Result<()>;

declare_setup_hooks! {
    /// The command-line parameters board code answers to.
    pub enum BootParam [pub SETUP_HOOKS => SetupHandler] {
        BoardId("board_id=") => setup_board_id,
        Debug("debug=") => setup_sec_debug,
        JigSmd("jig_smd=") => setup_jig_smd,
        LpmBoot("lpm_boot=") => setup_lpm_boot,
        HatsFlag("hats_flag=") => setup_hats_flag,
        RamConsole("mem_ram_console=") => setup_ram_console,
    }
}

fn parse_u32(value: &str) -> Result<u32> {
    u32::try_from(parse_ulong(value)?).map_err(|_| ErrorKind::InvalidParam.into())
}

fn setup_board_id(value: &str, params: &mut BootParams) -> Result<()> {
    params.board_id = Some(parse_u32(value)?);
    Ok(())
}

fn setup_sec_debug(value: &str, params: &mut BootParams) -> Result<()> {
    params.sec_debug = SecDebugSettings::from_bits_retain(parse_u32(value)?);
    Ok(())
}

fn setup_jig_smd(value: &str, params: &mut BootParams) -> Result<()> {
    params.jig_smd = parse_u32(value)? != 0;
    Ok(())
}

fn setup_lpm_boot(value: &str, params: &mut BootParams) -> Result<()> {
    params.lpm_boot = parse_u32(value)? != 0;
    Ok(())
}

fn setup_hats_flag(value: &str, params: &mut BootParams) -> Result<()> {
    params.hats_flag = parse_u32(value)? != 0;
    Ok(())
}

/// `mem_ram_console=SIZE[@BASE]`
fn setup_ram_console(value: &str, params: &mut BootParams) -> Result<()> {
    let (size, base) = match value.split_once('@') {
        Some((size, base)) => (parse_size(size)?, parse_ulong(base)?),
        None => (parse_size(value)?, DEFAULT_RAM_CONSOLE_BASE),
    };
    if size == 0 {
        return ErrorKind::InvalidParam.into();
    }
    params.ram_console = Some(RamConsoleRegion { base, size });
    Ok(())
}

impl BootParams {
    /// Run every token of `cmdline` through the setup hooks.
    pub fn parse(cmdline: &str) -> BootParams {
        let mut params = BootParams::default();
        for token in cmdline.split_whitespace() {
            let hook = SETUP_HOOKS.iter().find(|(key, _, _)| token.starts_with(key));
            match hook {
                Some((key, param, handler)) => {
                    let value = &token[key.len()..];
                    if let Err(err) = handler(value, &mut params) {
                        error!("invalid {:?} parameter '{}': {}", param, value, err);
                    }
                }
                None => {
                    trace!("cmdline: ignoring '{}'", token);
                    params.unknown += 1;
                }
            }
        }
        params
    }

    /// Sec debug is on at any level.
    pub fn debug_enabled(&self) -> bool {
        self.sec_debug.contains(SecDebugSettings::ENABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_parameters() {
        let params = BootParams::parse(
            "console=ttySAC2,115200 board_id=0x0105 debug=5 jig_smd=1 lpm_boot=0 hats_flag=1 mem_ram_console=1M@0x1ff00000",
        );
        assert_eq!(params.board_id, Some(0x105));
        assert_eq!(params.sec_debug, SecDebugSettings::ENABLE | SecDebugSettings::RAM_DUMP);
        assert!(params.debug_enabled());
        assert!(params.jig_smd);
        assert!(!params.lpm_boot);
        assert!(params.hats_flag);
        assert_eq!(
            params.ram_console,
            Some(RamConsoleRegion {
                base: 0x1ff0_0000,
                size: 1 << 20
            })
        );
        assert_eq!(params.unknown, 1);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let params = BootParams::parse("board_id=golden debug= mem_ram_console=0");
        assert_eq!(params.board_id, None);
        assert_eq!(params.sec_debug, SecDebugSettings::empty());
        assert_eq!(params.ram_console, None);
        assert_eq!(params.unknown, 0);
    }

    #[test]
    fn ram_console_without_base() {
        let params = BootParams::parse("mem_ram_console=256K");
        assert_eq!(
            params.ram_console,
            Some(RamConsoleRegion {
                base: DEFAULT_RAM_CONSOLE_BASE,
                size: 256 << 10
            })
        );
    }

    #[test]
    fn unknown_debug_bits_are_kept() {
        let params = BootParams::parse("debug=0x101");
        assert!(params.debug_enabled());
        assert_eq!(params.sec_debug.bits(), 0x101);
    }

    #[test]
    fn signed_board_id_is_ignored() {
        assert_eq!(BootParams::parse("board_id=+261").board_id, None);
        assert_eq!(BootParams::parse("board_id=0x0101 board_id=-1").board_id, Some(0x0101));
    }

    #[test]
    fn last_board_id_wins() {
        let params = BootParams::parse("board_id=0x0101 board_id=261");
        assert_eq!(params.board_id, Some(261));
    }

    #[test]
    fn hook_table_lists_every_parameter() {
        let keys: Vec<&str> = SETUP_HOOKS.iter().map(|(key, _, _)| *key).collect();
        assert_eq!(
            keys,
            ["board_id=", "debug=", "jig_smd=", "lpm_boot=", "hats_flag=", "mem_ram_console="]
        );
        assert_eq!(SETUP_HOOKS[1].1, BootParam::Debug);
    }
}
