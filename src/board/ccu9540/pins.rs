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

pub const TOUCH_INT: u32 = 84;
pub const TOUCH_RST: u32 = 143;
pub const ACCEL_INT: u32 = 82;
pub const MAGNET_DRDY: u32 = 31;
pub const GYRO_INT: u32 = 32;
pub const KEY_VOLUP_GPIO: u32 = 67;
pub const KEY_VOLDOWN_GPIO: u32 = 92;
pub const T_FLASH_DETECT: u32 = 95;
pub const DISP_RESET: u32 = 65;
pub const HDMI_INT: u32 = 192;
pub const HDMI_PWR: u32 = 196;
pub const WLAN_RST_N: u32 = 215;
pub const BT_EN: u32 = 209;

const ACTIVE_BASE: [PinCfg; 34] = [
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
    PinCfg::gpio(12).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(13).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(14).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(15).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(18).alt(Alt::A).output_high(),
    PinCfg::gpio(19).alt(Alt::A).output_high(),
    PinCfg::gpio(20).alt(Alt::A).output_high(),
    PinCfg::gpio(22).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(23).alt(Alt::A).input(Pull::None),
    PinCfg::gpio(24).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(T_FLASH_DETECT).input(Pull::Up),
    PinCfg::gpio(TOUCH_INT).input(Pull::Up),
    PinCfg::gpio(TOUCH_RST).output_low(),
    PinCfg::gpio(ACCEL_INT).input(Pull::None),
    PinCfg::gpio(MAGNET_DRDY).input(Pull::None),
    PinCfg::gpio(GYRO_INT).input(Pull::Down),
    PinCfg::gpio(KEY_VOLUP_GPIO).input(Pull::Up),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).input(Pull::Up),
    PinCfg::gpio(DISP_RESET).output_high(),
    PinCfg::gpio(HDMI_INT).input(Pull::Up),
];

pub static SLEEP: [PinCfg; 19] = [
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
    PinCfg::gpio(T_FLASH_DETECT).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(TOUCH_INT).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(TOUCH_RST).slpm_output_low(),
    PinCfg::gpio(ACCEL_INT).slpm_input(Pull::Down),
    PinCfg::gpio(GYRO_INT).slpm_input(Pull::Down),
    PinCfg::gpio(KEY_VOLUP_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(KEY_VOLDOWN_GPIO).slpm_input(Pull::Up).slpm_wakeup_enable(),
    PinCfg::gpio(DISP_RESET).slpm_output_low(),
];

pub static ACTIVE: [PinCfg; 34] = ACTIVE_BASE;

/// HDMI transmitter lines, wired from R0.1.
pub static ACTIVE_R0_1: [PinCfg; 35] = concat_pins(ACTIVE_BASE, [PinCfg::gpio(HDMI_PWR).output_low()]);
