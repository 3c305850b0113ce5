// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use crate::device::{Alt, PinCfg, Pull};

pub const TSP_INT: u32 = 218;
pub const TSP_LDO_ON: u32 = 94;
/// Touch LDO enable from R0.4 on.
pub const TSP_LDO_ON_R0_4: u32 = 208;
pub const KEY_HOME_GPIO: u32 = 91;
pub const KEY_VOLUP_GPIO: u32 = 67;
pub const KEY_VOLDOWN_GPIO: u32 = 92;
pub const PS_INT: u32 = 146;
pub const USB_SWITCH_INT: u32 = 65;
pub const T_FLASH_DETECT: u32 = 193;
pub const LCD_RESET: u32 = 139;
pub const LCD_SPI_CS: u32 = 201;
pub const LCD_SPI_SCL: u32 = 220;
pub const LCD_SPI_SDI: u32 = 224;
pub const WLAN_RST_N: u32 = 215;
pub const BT_EN: u32 = 209;
pub const BL_CTRL: u32 = 68;

pub static ACTIVE_R0_0: [PinCfg; 32] = [
    PinCfg::gpio(147).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(148).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(16).alt(Alt::B).input(Pull::None),
    PinCfg::gpio(17).alt(Alt::B).input(Pull::None),
    PinCfg::gpio(10).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(11).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(229).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(230).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(0).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(1).alt(Alt::A).output_high(),
    PinCfg::gpio(2).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(3).alt(Alt::A).output_high(),
    PinCfg::gpio(29).alt(Alt::C).input(Pull::Up),
    PinCfg::gpio(30).alt(Alt::C).output_high(),
    PinCfg::gpio(18).alt(Alt::A).output_high(),
    PinCfg::gpio(19).alt(Alt::A).output_high(),
    PinCfg::gpio(20).alt(Alt::A).output_high(),
    PinCfg::gpio(22).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(23).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(24).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(T_FLASH_DETECT).input(Pull::None),
    PinCfg::gpio(TSP_INT).input(Pull::None),
    PinCfg::gpio(TSP_LDO_ON).output_low(),
    PinCfg::gpio(KEY_HOME_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLUP_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).input(Pull::Up),
    PinCfg::gpio(PS_INT).input(Pull::None),
    PinCfg::gpio(USB_SWITCH_INT).input(Pull::Up),
    PinCfg::gpio(LCD_RESET).output_high(),
    PinCfg::gpio(LCD_SPI_CS).output_high(),
    PinCfg::gpio(LCD_SPI_SCL).output_high(),
    PinCfg::gpio(LCD_SPI_SDI).output_low(),
];

/// R0.4 moved the touch LDO enable and parks the old line.
pub static ACTIVE_R0_4: [PinCfg; 33] = [
    PinCfg::gpio(147).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(148).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(16).alt(Alt::B).input(Pull::None),
    PinCfg::gpio(17).alt(Alt::B).input(Pull::None),
    PinCfg::gpio(10).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(11).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(229).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(230).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(0).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(1).alt(Alt::A).output_high(),
    PinCfg::gpio(2).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(3).alt(Alt::A).output_high(),
    PinCfg::gpio(29).alt(Alt::C).input(Pull::Up),
    PinCfg::gpio(30).alt(Alt::C).output_high(),
    PinCfg::gpio(18).alt(Alt::A).output_high(),
    PinCfg::gpio(19).alt(Alt::A).output_high(),
    PinCfg::gpio(20).alt(Alt::A).output_high(),
    PinCfg::gpio(22).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(23).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(24).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(T_FLASH_DETECT).input(Pull::None),
    PinCfg::gpio(TSP_INT).input(Pull::None),
    PinCfg::gpio(TSP_LDO_ON).input(Pull::Down),
    PinCfg::gpio(TSP_LDO_ON_R0_4).output_low(),
    PinCfg::gpio(KEY_HOME_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLUP_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).input(Pull::Up),
    PinCfg::gpio(PS_INT).input(Pull::None),
    PinCfg::gpio(USB_SWITCH_INT).input(Pull::Up),
    PinCfg::gpio(LCD_RESET).output_high(),
    PinCfg::gpio(LCD_SPI_CS).output_high(),
    PinCfg::gpio(LCD_SPI_SCL).output_high(),
    PinCfg::gpio(LCD_SPI_SDI).output_low(),
];

pub static SLEEP_R0_0: [PinCfg; 18] = [
    PinCfg::gpio(0).slpm_input(Pull::Up),
    PinCfg::gpio(1).slpm_output_high(),
    PinCfg::gpio(2).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(3).slpm_output_high(),
    PinCfg::gpio(29).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(30).slpm_output_high(),
    PinCfg::gpio(18).slpm_output_low(),
    PinCfg::gpio(19).slpm_output_low(),
    PinCfg::gpio(20).slpm_output_low(),
    PinCfg::gpio(22).slpm_input(Pull::Down),
    PinCfg::gpio(24).slpm_input(Pull::Down),
    PinCfg::gpio(TSP_INT).slpm_input(Pull::None).slpm_pdis_disabled(),
    PinCfg::gpio(TSP_LDO_ON).slpm_output_low(),
    PinCfg::gpio(KEY_HOME_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(KEY_VOLUP_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(USB_SWITCH_INT).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(LCD_RESET).slpm_output_low(),
];

pub static SLEEP_R0_4: [PinCfg; 19] = [
    PinCfg::gpio(0).slpm_input(Pull::Up),
    PinCfg::gpio(1).slpm_output_high(),
    PinCfg::gpio(2).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(3).slpm_output_high(),
    PinCfg::gpio(29).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(30).slpm_output_high(),
    PinCfg::gpio(18).slpm_output_low(),
    PinCfg::gpio(19).slpm_output_low(),
    PinCfg::gpio(20).slpm_output_low(),
    PinCfg::gpio(22).slpm_input(Pull::Down),
    PinCfg::gpio(24).slpm_input(Pull::Down),
    PinCfg::gpio(TSP_INT).slpm_input(Pull::None).slpm_pdis_disabled(),
    PinCfg::gpio(TSP_LDO_ON).slpm_input(Pull::Down),
    PinCfg::gpio(TSP_LDO_ON_R0_4).slpm_output_low(),
    PinCfg::gpio(KEY_HOME_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(KEY_VOLUP_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(USB_SWITCH_INT).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(LCD_RESET).slpm_output_low(),
];
