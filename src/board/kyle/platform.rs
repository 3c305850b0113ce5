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

pub const KYLE_R0_0: SystemRev = SystemRev(0x0);
pub const KYLE_R0_1: SystemRev = SystemRev(0x1);
pub const KYLE_R0_2: SystemRev = SystemRev(0x2);

board_id_table!(BOARD_IDS {
    0x0101 => KYLE_R0_0,
    0x0102 => KYLE_R0_1,
    0x0103 => KYLE_R0_2,
});

pub static MACHINE: MachineDesc = MachineDesc {
    name: "kyle",
    machine_name: "SAMSUNG KYLE",
    model: "GT-S7562",
    pmic: Pmic::Ab8505,
    board_ids: BOARD_IDS,
    pins: &[(
        KYLE_R0_0,
        BoardPins {
            active: &pins::ACTIVE,
            sleep: &pins::SLEEP,
        },
    )],
    ab8500: &[(KYLE_R0_0, &power::AB8505_PDATA)],
    db8500_devices: &devices::DB8500_DEVICES,
    platform_devices: &[(KYLE_R0_0, &devices::PLATFORM_DEVICES)],
    spi: &[],
    i2c: &[(KYLE_R0_0, &devices::I2C_BUSES), (KYLE_R0_2, &devices::I2C_BUSES_R0_2)],
    board_setup: Some(kyle_setup),
};

fn kyle_setup(ctx: &BootContext, gpio: &mut dyn GpioController, report: &mut InitReport) {
    report.setup_output(gpio, pins::WLAN_RST_N, "WLAN_RST_N", false);
    report.setup_output(gpio, pins::BT_EN, "BT_EN", false);
    // SIM1 is the default slot; the modem switches it later.
    report.setup_output(gpio, pins::SIM_SEL, "SIM_SEL", false);

    if ctx.system_rev >= KYLE_R0_1 && !ctx.params.lpm_boot {
        report.setup_output(gpio, pins::KEY_LED_EN, "KEY_LED_EN", true);
    }
    if !ctx.params.lpm_boot {
        report.setup_output(gpio, pins::BL_CTRL, "BL_CTRL", true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{init_machine, RecordingRegistrar};
    use crate::config::BootParams;

    fn boot(cmdline: &str) -> RecordingRegistrar {
        let ctx = BootContext::new(&MACHINE, BootParams::parse(cmdline));
        let mut reg = RecordingRegistrar::new();
        let report = init_machine(&ctx, &mut reg);
        assert!(report.is_clean(), "{:?}", report.failures);
        reg
    }

    #[test]
    fn accelerometer_changes_at_r0_2() {
        let accel = |reg: &RecordingRegistrar| {
            reg.i2c_devices(2)
                .iter()
                .map(|d| d.type_name)
                .find(|name| *name == "bma254" || *name == "k3dh")
        };
        assert_eq!(accel(&boot("board_id=0x0102")), Some("bma254"));
        assert_eq!(accel(&boot("board_id=0x0103")), Some("k3dh"));
    }

    #[test]
    fn key_led_from_r0_1() {
        assert!(!boot("board_id=0x0101").is_claimed(pins::KEY_LED_EN));
        assert_eq!(boot("board_id=0x0102").gpio_level(pins::KEY_LED_EN), Some(true));
        assert!(!boot("board_id=0x0102 lpm_boot=1").is_claimed(pins::KEY_LED_EN));
    }

    #[test]
    fn sim_defaults_to_first_slot() {
        assert_eq!(boot("board_id=0x0103").gpio_level(pins::SIM_SEL), Some(false));
    }

    #[test]
    fn uses_ab8505() {
        let reg = boot("board_id=0x0101");
        let pdata = reg.pmic_data().unwrap();
        assert_eq!(pdata.regulator.regulators.len(), 16);
        assert!(core::ptr::eq(pdata, &power::AB8505_PDATA));
    }
}
