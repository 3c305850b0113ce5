// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use crate::device::{
    Alt, MmcCaps, MmciPlatformData, PinCfg, PlatformData, PlatformDevice, Pull, UartPinSwitch, MMC_VDD_165_195,
    MMC_VDD_29_30, MMC_VDD_30_31,
};

// Input event codes used by the key tables.
pub const KEY_HOME: u32 = 102;
pub const KEY_VOLUMEDOWN: u32 = 114;
pub const KEY_VOLUMEUP: u32 = 115;
pub const KEY_POWER: u32 = 116;
pub const KEY_MENU: u32 = 139;
pub const KEY_BACK: u32 = 158;

/// First interrupt number of the DB8500 GPIO banks.
pub const IRQ_GPIO_BASE: u32 = 96;

pub const fn gpio_to_irq(gpio: u32) -> u32 {
    IRQ_GPIO_BASE + gpio
}

/// Interrupt base handed to the AB8500-family PMIC.
pub const AB8500_IRQ_BASE: u32 = 96 + 288;
/// First GPIO number of the PMIC's GPIO block.
pub const AB8500_GPIO_BASE: u32 = 268;

static UART0_ENABLED: [PinCfg; 4] = [
    PinCfg::gpio(0).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(1).alt(Alt::A).output_high(),
    PinCfg::gpio(2).alt(Alt::A).input(Pull::Up),
    PinCfg::gpio(3).alt(Alt::A).output_high(),
];

static UART0_DISABLED: [PinCfg; 4] = [
    PinCfg::gpio(0).input(Pull::Up),
    PinCfg::gpio(1).output_high(),
    PinCfg::gpio(2).input(Pull::Up),
    PinCfg::gpio(3).output_high(),
];

static UART2_ENABLED: [PinCfg; 2] = [
    PinCfg::gpio(29).alt(Alt::C).input(Pull::Up),
    PinCfg::gpio(30).alt(Alt::C).output_high(),
];

static UART2_DISABLED: [PinCfg; 2] = [PinCfg::gpio(29).input(Pull::Up), PinCfg::gpio(30).output_high()];

/// Bluetooth UART with flow control.
pub static UART0_PIN_SWITCH: UartPinSwitch = UartPinSwitch {
    enabled: &UART0_ENABLED,
    disabled: &UART0_DISABLED,
};

/// Console UART.
pub static UART2_PIN_SWITCH: UartPinSwitch = UartPinSwitch {
    enabled: &UART2_ENABLED,
    disabled: &UART2_DISABLED,
};

pub const fn sd_card(gpio_cd: u32, cd_invert: bool) -> MmciPlatformData {
    MmciPlatformData {
        ocr_mask: MMC_VDD_29_30,
        f_max: 50_000_000,
        capabilities: MmcCaps::FOUR_BIT_DATA.union(MmcCaps::SD_HIGHSPEED).union(MmcCaps::MMC_HIGHSPEED),
        gpio_cd: Some(gpio_cd),
        cd_invert,
    }
}

pub static EMMC_PDATA: MmciPlatformData = MmciPlatformData {
    ocr_mask: MMC_VDD_165_195,
    f_max: 50_000_000,
    capabilities: MmcCaps::EIGHT_BIT_DATA
        .union(MmcCaps::MMC_HIGHSPEED)
        .union(MmcCaps::NONREMOVABLE)
        .union(MmcCaps::ERASE),
    gpio_cd: None,
    cd_invert: false,
};

/// SDIO WLAN, powered by the board setup hook.
pub static WLAN_SDIO_PDATA: MmciPlatformData = MmciPlatformData {
    ocr_mask: MMC_VDD_29_30 | MMC_VDD_30_31,
    f_max: 50_000_000,
    capabilities: MmcCaps::FOUR_BIT_DATA.union(MmcCaps::NONREMOVABLE),
    gpio_cd: None,
    cd_invert: false,
};

/// The persistent log buffer, if `mem_ram_console=` reserved one.
pub const RAM_CONSOLE_DEVICE: PlatformDevice = PlatformDevice::new("ram_console", -1, PlatformData::RamConsole);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{RecordingRegistrar, Registration};
    use crate::device::UartHooks;

    fn pin_tables(reg: &RecordingRegistrar) -> Vec<&'static [PinCfg]> {
        reg.events()
            .iter()
            .filter_map(|event| match event {
                Registration::Pins(pins) => Some(*pins),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn exit_parks_uart_pins_as_gpio() {
        let mut reg = RecordingRegistrar::new();
        UART2_PIN_SWITCH.exit(&mut reg).unwrap();
        let tables = pin_tables(&reg);
        assert_eq!(tables.len(), 1);
        assert!(core::ptr::eq(tables[0], &UART2_DISABLED[..]));
        assert!(tables[0].iter().all(|pin| pin.alt_function() == Alt::Gpio));
    }

    #[test]
    fn reset_parks_then_routes() {
        let mut reg = RecordingRegistrar::new();
        UART0_PIN_SWITCH.reset(&mut reg).unwrap();
        let tables = pin_tables(&reg);
        assert_eq!(tables.len(), 2);
        assert!(core::ptr::eq(tables[0], &UART0_DISABLED[..]));
        assert!(core::ptr::eq(tables[1], &UART0_ENABLED[..]));
        assert!(tables[1].iter().all(|pin| pin.alt_function() == Alt::A));
    }
}
