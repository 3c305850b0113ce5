// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use crate::device::{concat_pins, Alt, PinCfg, Pull};

pub const TSP_INT: u32 = 84;
pub const TSP_LDO_ON: u32 = 94;
pub const KEY_HOME_GPIO: u32 = 91;
pub const KEY_VOLUP_GPIO: u32 = 67;
pub const KEY_VOLDOWN_GPIO: u32 = 92;
pub const PS_INT: u32 = 146;
pub const JACK_NINT: u32 = 95;
pub const USB_SWITCH_INT: u32 = 64;
pub const T_FLASH_DETECT: u32 = 165;
pub const WLAN_RST_N: u32 = 215;
pub const BT_EN: u32 = 209;
pub const BL_CTRL: u32 = 68;
pub const LCD_PWR_EN: u32 = 219;

const ACTIVE_BASE: [PinCfg; 36] = [
    // I2C0..3
    PinCfg::gpio(147).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(148).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(16).alt(Alt::B).input(Pull::None),
    PinCfg::gpio(17).alt(Alt::B).input(Pull::None),
    PinCfg::gpio(10).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(11).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(229).alt(Alt::C).input(Pull::None),
    PinCfg::gpio(230).alt(Alt::C).input(Pull::None),
    // UART0 (BT) and UART2 (console)
    PinCfg::gpio(0).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(1).alt(Alt::A).output_high(),
    PinCfg::gpio(2).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(3).alt(Alt::A).output_high(),
    PinCfg::gpio(29).alt(Alt::C).input(Pull::Up),
    PinCfg::gpio(30).alt(Alt::C).output_high(),
    // MSP0, modem audio
    PinCfg::gpio(12).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(13).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(14).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(15).alt(Alt::A).input(Pull::None),
    // SDI0 card
    PinCfg::gpio(18).alt(Alt::A).output_high(),
    PinCfg::gpio(19).alt(Alt::A).output_high(),
    PinCfg::gpio(20).alt(Alt::A).output_high(),
    PinCfg::gpio(22).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(23).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(24).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(T_FLASH_DETECT).input(Pull::None),
    // Touch, keys, sensors
    PinCfg::gpio(TSP_INT).input(Pull::None),
    PinCfg::gpio(TSP_LDO_ON).output_low(),
    PinCfg::gpio(KEY_HOME_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLUP_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).input(Pull::Up),
    PinCfg::gpio(PS_INT).input(Pull::None),
    PinCfg::gpio(USB_SWITCH_INT).input(Pull::Up),
    PinCfg::gpio(JACK_NINT).input(Pull::None),
    // Connectivity and display power
    PinCfg::gpio(WLAN_RST_N).output_low(),
    PinCfg::gpio(BT_EN).output_low(),
    PinCfg::gpio(BL_CTRL).output_low(),
];

pub static SLEEP: [PinCfg; 22] = [
    PinCfg::gpio(0).slpm_input(Pull::Up),
    PinCfg::gpio(1).slpm_output_high(),
    PinCfg::gpio(2).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(3).slpm_output_high(),
    PinCfg::gpio(29).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(30).slpm_output_high(),
    PinCfg::gpio(12).slpm_input(Pull::Down),
    PinCfg::gpio(13).slpm_input(Pull::Down),
    PinCfg::gpio(14).slpm_input(Pull::Down),
    PinCfg::gpio(15).slpm_input(Pull::Down),
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
    PinCfg::gpio(BL_CTRL).slpm_output_low(),
];

pub static ACTIVE: [PinCfg; 36] = ACTIVE_BASE;

/// From R0.3 the LCD supply has its own enable line.
pub static ACTIVE_R0_3: [PinCfg; 37] = concat_pins(ACTIVE_BASE, [PinCfg::gpio(LCD_PWR_EN).output_high()]);
