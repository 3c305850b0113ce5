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

pub const JANICE_R0_0: SystemRev = SystemRev(0x0);
pub const JANICE_R0_1: SystemRev = SystemRev(0x1);
pub const JANICE_R0_2: SystemRev = SystemRev(0x2);
pub const JANICE_R0_3: SystemRev = SystemRev(0x3);
pub const JANICE_R0_4: SystemRev = SystemRev(0x4);
pub const JANICE_R0_5: SystemRev = SystemRev(0x5);

board_id_table!(BOARD_IDS {
    0x0101 => JANICE_R0_0,
    0x0102 => JANICE_R0_1,
    0x0103 => JANICE_R0_2,
    0x0104 => JANICE_R0_3,
    0x0105 => JANICE_R0_4,
    0x0106 => JANICE_R0_5,
});

pub static MACHINE: MachineDesc = MachineDesc {
    name: "janice",
    machine_name: "SAMSUNG JANICE",
    model: "GT-I9070",
    pmic: Pmic::Ab8500,
    board_ids: BOARD_IDS,
    pins: &[
        (
            JANICE_R0_0,
            BoardPins {
                active: &pins::ACTIVE_R0_0,
                sleep: &pins::SLEEP_R0_0,
            },
        ),
        (
            JANICE_R0_3,
            BoardPins {
                active: &pins::ACTIVE_R0_3,
                sleep: &pins::SLEEP_R0_3,
            },
        ),
    ],
    ab8500: &[(JANICE_R0_0, &power::AB8500_PDATA)],
    db8500_devices: &devices::DB8500_DEVICES,
    platform_devices: &[(JANICE_R0_0, &devices::PLATFORM_DEVICES)],
    spi: &[(JANICE_R0_0, &devices::SPI_DEVICES)],
    i2c: &[(JANICE_R0_0, &devices::I2C_BUSES), (JANICE_R0_2, &devices::I2C_BUSES_R0_2)],
    board_setup: Some(janice_setup),
};

fn janice_setup(ctx: &BootContext, gpio: &mut dyn GpioController, report: &mut InitReport) {
    report.setup_output(gpio, pins::LCD_RESET, "LCD_RESET", true);
    report.setup_output(gpio, pins::WLAN_RST_N, "WLAN_RST_N", false);
    report.setup_output(gpio, pins::BT_EN, "BT_EN", false);

    if ctx.system_rev >= JANICE_R0_2 {
        // pn544 stays powered down and out of download mode until probed.
        report.setup_output(gpio, pins::NFC_EN, "NFC_EN", false);
        report.setup_output(gpio, pins::NFC_FIRM, "NFC_FIRM", false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{init_machine, RecordingRegistrar, Registration};
    use crate::config::BootParams;
    use crate::device::Pull;

    fn boot(cmdline: &str) -> RecordingRegistrar {
        let ctx = BootContext::new(&MACHINE, BootParams::parse(cmdline));
        let mut reg = RecordingRegistrar::new();
        let report = init_machine(&ctx, &mut reg);
        assert!(report.is_clean(), "{:?}", report.failures);
        reg
    }

    #[test]
    fn nfc_from_r0_2() {
        let old = boot("board_id=0x0102");
        let new = boot("board_id=0x0103");
        assert!(old.i2c_devices(1).is_empty());
        assert_eq!(new.i2c_devices(1)[0].type_name, "pn544");
        assert!(!old.is_claimed(pins::NFC_EN));
        assert_eq!(new.gpio_level(pins::NFC_EN), Some(false));
        assert_eq!(new.gpio_level(pins::NFC_FIRM), Some(false));
    }

    #[test]
    fn touch_interrupt_pulled_up_from_r0_3() {
        let tsp_pull = |reg: &RecordingRegistrar| match reg.events()[0] {
            Registration::Pins(active) => active
                .iter()
                .find(|p| p.pin() == pins::TSP_INT)
                .map(|p| p.pull()),
            ref other => panic!("unexpected {:?}", other),
        };
        assert_eq!(tsp_pull(&boot("board_id=0x0103")), Some(Pull::None));
        assert_eq!(tsp_pull(&boot("board_id=0x0104")), Some(Pull::Up));
    }

    #[test]
    fn gyro_sits_on_sensor_bus() {
        let reg = boot("board_id=0x0106");
        let sensors = reg.i2c_devices(2);
        assert!(sensors.iter().any(|d| d.type_name == "l3g4200d" && d.addr == 0x68));
        assert_eq!(reg.i2c_devices(3)[0].addr, 0x4a);
    }
}
