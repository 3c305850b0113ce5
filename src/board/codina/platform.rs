// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use super::{devices, pins, power};
use crate::board::{BootContext, InitReport, MachineDesc, SystemRev};
use crate::device::{BoardPins, Pmic};
use crate::driver::gpio::GpioController;

pub const CODINA_R0_0: SystemRev = SystemRev(0x0);
pub const CODINA_R0_1: SystemRev = SystemRev(0x1);
pub const CODINA_R0_2: SystemRev = SystemRev(0x2);
pub const CODINA_R0_3: SystemRev = SystemRev(0x3);
pub const CODINA_R0_4: SystemRev = SystemRev(0x4);

board_id_table!(BOARD_IDS {
    0x0101 => CODINA_R0_0,
    0x0102 => CODINA_R0_1,
    0x0103 => CODINA_R0_2,
    0x0104 => CODINA_R0_3,
    0x0105 => CODINA_R0_4,
});

pub static MACHINE: MachineDesc = MachineDesc {
    name: "codina",
    machine_name: "SAMSUNG CODINA",
    model: "GT-I8160",
    pmic: Pmic::Ab8500,
    board_ids: BOARD_IDS,
    pins: &[
        (
            CODINA_R0_0,
            BoardPins {
                active: &pins::ACTIVE_R0_0,
                sleep: &pins::SLEEP_R0_0,
            },
        ),
        (
            CODINA_R0_4,
            BoardPins {
                active: &pins::ACTIVE_R0_4,
                sleep: &pins::SLEEP_R0_4,
            },
        ),
    ],
    ab8500: &[(CODINA_R0_0, &power::AB8500_PDATA)],
    db8500_devices: &devices::DB8500_DEVICES,
    platform_devices: &[(CODINA_R0_0, &devices::PLATFORM_DEVICES)],
    spi: &[(CODINA_R0_0, &devices::SPI_WS2401), (CODINA_R0_2, &devices::SPI_S6D27A1)],
    i2c: &[(CODINA_R0_0, &devices::I2C_BUSES)],
    board_setup: Some(codina_setup),
};

/// Touch LDO enable line of the context's revision.
pub fn tsp_ldo_gpio(ctx: &BootContext) -> u32 {
    if ctx.system_rev >= CODINA_R0_4 {
        pins::TSP_LDO_ON_R0_4
    } else {
        pins::TSP_LDO_ON
    }
}

fn codina_setup(ctx: &BootContext, gpio: &mut dyn GpioController, report: &mut InitReport) {
    report.setup_output(gpio, tsp_ldo_gpio(ctx), "TSP_LDO_ON", true);
    report.setup_output(gpio, pins::LCD_RESET, "LCD_RESET", true);
    report.setup_output(gpio, pins::WLAN_RST_N, "WLAN_RST_N", false);
    report.setup_output(gpio, pins::BT_EN, "BT_EN", false);
    if ctx.params.jig_smd {
        // The factory jig drives the panel itself.
        info!("codina: jig boot, backlight left to the jig");
        return;
    }
    report.setup_output(gpio, pins::BL_CTRL, "BL_CTRL", true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{init_machine, RecordingRegistrar, Registration};
    use crate::config::BootParams;

    fn boot(cmdline: &str) -> RecordingRegistrar {
        let ctx = BootContext::new(&MACHINE, BootParams::parse(cmdline));
        let mut reg = RecordingRegistrar::new();
        assert!(init_machine(&ctx, &mut reg).is_clean());
        reg
    }

    fn spi_panel(reg: &RecordingRegistrar) -> &'static str {
        reg.events()
            .iter()
            .find_map(|e| match e {
                Registration::Spi(info) => Some(info[0].modalias),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn touch_ldo_moves_at_r0_4() {
        let old = boot("board_id=0x0104");
        let new = boot("board_id=0x0105");
        assert_eq!(old.gpio_level(pins::TSP_LDO_ON), Some(true));
        assert!(!old.is_claimed(pins::TSP_LDO_ON_R0_4));
        assert_eq!(new.gpio_level(pins::TSP_LDO_ON_R0_4), Some(true));
        assert!(!new.is_claimed(pins::TSP_LDO_ON));
    }

    #[test]
    fn active_pins_follow_revision() {
        let reg = boot("board_id=0x0105");
        match reg.events()[0] {
            Registration::Pins(active) => assert!(core::ptr::eq(active, &pins::ACTIVE_R0_4[..])),
            ref other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn panel_follows_revision() {
        assert_eq!(spi_panel(&boot("board_id=0x0101")), "pri_lcd_ws2401");
        assert_eq!(spi_panel(&boot("board_id=0x0102")), "pri_lcd_ws2401");
        assert_eq!(spi_panel(&boot("board_id=0x0103")), "pri_lcd_s6d27a1");
    }

    #[test]
    fn jig_boot_skips_backlight() {
        assert!(boot("board_id=0x0101").is_claimed(pins::BL_CTRL));
        assert!(!boot("board_id=0x0101 jig_smd=1").is_claimed(pins::BL_CTRL));
    }
}
