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

pub const CCU9540_R0_0: SystemRev = SystemRev(0x0);
pub const CCU9540_R0_1: SystemRev = SystemRev(0x1);

board_id_table!(BOARD_IDS {
    0x0101 => CCU9540_R0_0,
    0x0102 => CCU9540_R0_1,
});

pub static MACHINE: MachineDesc = MachineDesc {
    name: "ccu9540",
    machine_name: "ST-Ericsson U9540 CCU",
    model: "CCU9540",
    pmic: Pmic::Ab9540,
    board_ids: BOARD_IDS,
    pins: &[
        (
            CCU9540_R0_0,
            BoardPins {
                active: &pins::ACTIVE,
                sleep: &pins::SLEEP,
            },
        ),
        (
            CCU9540_R0_1,
            BoardPins {
                active: &pins::ACTIVE_R0_1,
                sleep: &pins::SLEEP,
            },
        ),
    ],
    ab8500: &[(CCU9540_R0_0, &power::AB9540_PDATA)],
    db8500_devices: &devices::DB8500_DEVICES,
    platform_devices: &[(CCU9540_R0_0, &devices::PLATFORM_DEVICES)],
    spi: &[],
    i2c: &[(CCU9540_R0_0, &devices::I2C_BUSES), (CCU9540_R0_1, &devices::I2C_BUSES_R0_1)],
    board_setup: Some(ccu9540_setup),
};

fn ccu9540_setup(ctx: &BootContext, gpio: &mut dyn GpioController, report: &mut InitReport) {
    // Touch controller comes out of reset once its supply is up.
    report.setup_output(gpio, pins::TOUCH_RST, "TOUCH_RST", true);
    report.setup_output(gpio, pins::DISP_RESET, "DISP_RESET", true);
    report.setup_output(gpio, pins::WLAN_RST_N, "WLAN_RST_N", false);
    report.setup_output(gpio, pins::BT_EN, "BT_EN", false);

    if ctx.system_rev >= CCU9540_R0_1 {
        report.setup_output(gpio, pins::HDMI_PWR, "HDMI_PWR", false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{init_machine, RecordingRegistrar, Registration};
    use crate::board::common::BATTERY_REFERENCE;
    use crate::config::BootParams;

    fn boot(cmdline: &str) -> RecordingRegistrar {
        let ctx = BootContext::new(&MACHINE, BootParams::parse(cmdline));
        let mut reg = RecordingRegistrar::new();
        let report = init_machine(&ctx, &mut reg);
        assert!(report.is_clean(), "{:?}", report.failures);
        reg
    }

    #[test]
    fn hdmi_from_r0_1() {
        let old = boot("board_id=0x0101");
        let new = boot("board_id=0x0102");
        assert!(old.i2c_devices(0).is_empty());
        assert_eq!(new.i2c_devices(0)[0].type_name, "av8100");
        assert!(!old.is_claimed(pins::HDMI_PWR));
        assert_eq!(new.gpio_level(pins::HDMI_PWR), Some(false));
        let hdmi_pin = |reg: &RecordingRegistrar| {
            reg.events().iter().any(|e| {
                matches!(e, Registration::Pins(active) if active.iter().any(|p| p.pin() == pins::HDMI_PWR))
            })
        };
        assert!(!hdmi_pin(&old));
        assert!(hdmi_pin(&new));
    }

    #[test]
    fn reference_battery_and_ab9540_regulators() {
        let reg = boot("board_id=0x0101");
        let pdata = reg.pmic_data().unwrap();
        assert!(core::ptr::eq(pdata.battery, &BATTERY_REFERENCE));
        assert_eq!(pdata.regulator.regulators.len(), Pmic::Ab9540.regulator_count());
    }

    #[test]
    fn touch_released_from_reset() {
        assert_eq!(boot("board_id=0x0102").gpio_level(pins::TOUCH_RST), Some(true));
    }
}
