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

pub const GOLDEN_R0_0: SystemRev = SystemRev(0x0);
pub const GOLDEN_R0_1: SystemRev = SystemRev(0x1);
pub const GOLDEN_R0_2: SystemRev = SystemRev(0x2);
pub const GOLDEN_R0_3: SystemRev = SystemRev(0x3);
pub const GOLDEN_R0_4: SystemRev = SystemRev(0x4);

board_id_table!(BOARD_IDS {
    0x0101 => GOLDEN_R0_0,
    0x0102 => GOLDEN_R0_1,
    0x0103 => GOLDEN_R0_2,
    0x0104 => GOLDEN_R0_3,
    0x0105 => GOLDEN_R0_4,
});

pub static MACHINE: MachineDesc = MachineDesc {
    name: "golden",
    machine_name: "SAMSUNG GOLDEN",
    model: "GT-I8190",
    pmic: Pmic::Ab8505,
    board_ids: BOARD_IDS,
    pins: &[
        (
            GOLDEN_R0_0,
            BoardPins {
                active: &pins::ACTIVE,
                sleep: &pins::SLEEP,
            },
        ),
        (
            GOLDEN_R0_3,
            BoardPins {
                active: &pins::ACTIVE_R0_3,
                sleep: &pins::SLEEP,
            },
        ),
    ],
    ab8500: &[(GOLDEN_R0_0, &power::AB8505_PDATA), (GOLDEN_R0_4, &power::AB8505_R04_PDATA)],
    db8500_devices: &devices::DB8500_DEVICES,
    platform_devices: &[(GOLDEN_R0_0, &devices::PLATFORM_DEVICES)],
    spi: &[],
    i2c: &[(GOLDEN_R0_0, &devices::I2C_BUSES), (GOLDEN_R0_3, &devices::I2C_BUSES_R0_3)],
    board_setup: Some(golden_setup),
};

fn golden_setup(ctx: &BootContext, gpio: &mut dyn GpioController, report: &mut InitReport) {
    // Held in reset until the SDIO and UART drivers power them up.
    report.setup_output(gpio, pins::WLAN_RST_N, "WLAN_RST_N", false);
    report.setup_output(gpio, pins::BT_EN, "BT_EN", false);

    if ctx.system_rev >= GOLDEN_R0_3 {
        report.setup_output(gpio, pins::LCD_PWR_EN, "LCD_PWR_EN", true);
    }

    if ctx.params.lpm_boot {
        info!("golden: charging boot, backlight stays off");
    } else {
        report.setup_output(gpio, pins::BL_CTRL, "BL_CTRL", true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{board_id_setup, exit_sleep, init_machine, InitStep, RecordingRegistrar, Registration};
    use crate::config::BootParams;

    fn boot(cmdline: &str) -> (BootContext, RecordingRegistrar) {
        let ctx = BootContext::new(&MACHINE, BootParams::parse(cmdline));
        let mut reg = RecordingRegistrar::new();
        let report = init_machine(&ctx, &mut reg);
        assert!(report.is_clean(), "{:?}", report.failures);
        (ctx, reg)
    }

    #[test]
    fn r0_4_selects_r04_gpio_pdata() {
        assert_eq!(board_id_setup(&MACHINE, 0x0105).unwrap(), GOLDEN_R0_4);

        let (ctx, reg) = boot("board_id=0x0105");
        assert_eq!(ctx.rev_name(), "GOLDEN_R0_4");
        let pdata = reg.pmic_data().unwrap();
        assert!(core::ptr::eq(pdata.gpio, &power::AB8505_R04_GPIO_PDATA));
        assert_eq!(pdata.gpio.config_reg[0], 0x0f);
    }

    #[test]
    fn earlier_revisions_keep_default_gpio_pdata() {
        for id in 0x0101..=0x0104 {
            let (_, reg) = boot(&format!("board_id={:#06x}", id));
            let pdata = reg.pmic_data().unwrap();
            assert!(core::ptr::eq(pdata.gpio, &power::AB8505_GPIO_PDATA), "board_id {:#x}", id);
            assert_eq!(pdata.gpio.config_reg[0], 0x0b);
        }
    }

    #[test]
    fn light_sensor_from_r0_3() {
        let (_, old) = boot("board_id=0x0103");
        let (_, new) = boot("board_id=0x0104");
        let has_light = |reg: &RecordingRegistrar| reg.i2c_devices(2).iter().any(|d| d.type_name == "bh1721fvc");
        assert!(!has_light(&old));
        assert!(has_light(&new));
        assert!(new.is_claimed(pins::LCD_PWR_EN));
        assert!(!old.is_claimed(pins::LCD_PWR_EN));
    }

    #[test]
    fn charging_boot_keeps_backlight_off() {
        let (_, normal) = boot("board_id=0x0101");
        let (_, lpm) = boot("board_id=0x0101 lpm_boot=1");
        assert_eq!(normal.gpio_level(pins::BL_CTRL), Some(true));
        assert_eq!(lpm.gpio_level(pins::BL_CTRL), None);
        assert_eq!(lpm.gpio_level(pins::WLAN_RST_N), Some(false));
    }

    #[test]
    fn lcd_power_pin_restored_after_sleep_from_r0_3() {
        let (ctx, _) = boot("board_id=0x0104");
        let mut reg = RecordingRegistrar::new();
        exit_sleep(&ctx, &mut reg).unwrap();
        match reg.events() {
            [Registration::Pins(active)] => {
                assert!(core::ptr::eq(*active, &pins::ACTIVE_R0_3[..]));
                assert!(active.iter().any(|p| p.pin() == pins::LCD_PWR_EN));
            }
            other => panic!("unexpected {:?}", other),
        }

        let (old, _) = boot("board_id=0x0103");
        assert!(!old.pins().unwrap().active.iter().any(|p| p.pin() == pins::LCD_PWR_EN));
    }

    #[test]
    fn setup_gpio_failures_reach_the_report() {
        let ctx = BootContext::new(&MACHINE, BootParams::parse("board_id=0x0105"));
        let mut reg = RecordingRegistrar::new()
            .fail_gpio(pins::BL_CTRL)
            .fail_gpio(pins::WLAN_RST_N);
        let report = init_machine(&ctx, &mut reg);
        assert!(!report.is_clean());
        assert_eq!(report.failures.len(), 2);
        assert!(report.failed(InitStep::BoardSetup, "BL_CTRL"));
        assert!(report.failed(InitStep::BoardSetup, "WLAN_RST_N"));
        assert!(!reg.is_claimed(pins::BL_CTRL));
        // The remaining lines are still claimed.
        assert_eq!(reg.gpio_level(pins::LCD_PWR_EN), Some(true));
        assert_eq!(reg.gpio_level(pins::BT_EN), Some(false));
    }

    #[test]
    fn console_uart_switches_pins_on_probe() {
        let (_, reg) = boot("board_id=0x0101");
        let uart_pins = reg
            .events()
            .iter()
            .filter(|e| matches!(e, Registration::Pins(p) if p.len() == 2 && p[0].pin() == 29))
            .count();
        assert_eq!(uart_pins, 1);
    }
}
