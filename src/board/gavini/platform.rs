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

pub const GAVINI_R0_0: SystemRev = SystemRev(0x0);
pub const GAVINI_R0_0_B: SystemRev = SystemRev(0x1);
pub const GAVINI_R0_1: SystemRev = SystemRev(0x2);

board_id_table!(BOARD_IDS {
    0x0101 => GAVINI_R0_0,
    0x0102 => GAVINI_R0_0_B,
    0x0103 => GAVINI_R0_1,
});

pub static MACHINE: MachineDesc = MachineDesc {
    name: "gavini",
    machine_name: "SAMSUNG GAVINI",
    model: "GT-I8530",
    pmic: Pmic::Ab8500,
    board_ids: BOARD_IDS,
    pins: &[(
        GAVINI_R0_0,
        BoardPins {
            active: &pins::ACTIVE,
            sleep: &pins::SLEEP,
        },
    )],
    ab8500: &[(GAVINI_R0_0, &power::AB8500_PDATA)],
    db8500_devices: &devices::DB8500_DEVICES,
    platform_devices: &[
        (GAVINI_R0_0, &devices::PLATFORM_DEVICES),
        (GAVINI_R0_1, &devices::PLATFORM_DEVICES_R0_1),
    ],
    spi: &[(GAVINI_R0_0, &devices::SPI_DEVICES)],
    i2c: &[(GAVINI_R0_0, &devices::I2C_BUSES), (GAVINI_R0_0_B, &devices::I2C_BUSES_R0_0_B)],
    board_setup: Some(gavini_setup),
};

fn gavini_setup(ctx: &BootContext, gpio: &mut dyn GpioController, report: &mut InitReport) {
    // The fixed regulator owns the touch LDO line from R0.1.
    if ctx.system_rev < GAVINI_R0_1 {
        report.setup_output(gpio, pins::TSP_LDO_ON, "TSP_LDO_ON", true);
    }
    // Projector stays off until the DPP2601 driver sequences it.
    report.setup_output(gpio, pins::PROJ_ON, "PROJ_ON", false);
    report.setup_output(gpio, pins::PROJ_RESET, "PROJ_RESET", false);
    report.setup_output(gpio, pins::WLAN_RST_N, "WLAN_RST_N", false);
    report.setup_output(gpio, pins::BT_EN, "BT_EN", false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{init_machine, RecordingRegistrar};
    use crate::config::BootParams;
    use crate::device::PlatformData;

    fn boot(cmdline: &str) -> RecordingRegistrar {
        let ctx = BootContext::new(&MACHINE, BootParams::parse(cmdline));
        let mut reg = RecordingRegistrar::new();
        assert!(init_machine(&ctx, &mut reg).is_clean());
        reg
    }

    #[test]
    fn touch_ldo_owner_changes_at_r0_1() {
        let old = boot("board_id=0x0102");
        assert_eq!(old.gpio_level(pins::TSP_LDO_ON), Some(true));
        assert!(old.platform_device("reg-fixed-voltage").is_none());

        let new = boot("board_id=0x0103");
        assert!(!new.is_claimed(pins::TSP_LDO_ON));
        let ldo = new.platform_device("reg-fixed-voltage").unwrap();
        assert!(matches!(ldo.platform_data, PlatformData::FixedRegulator(cfg) if cfg.gpio == pins::TSP_LDO_ON));
    }

    #[test]
    fn compass_address_moves_at_r0_0_b() {
        let compass = |reg: &RecordingRegistrar| {
            reg.i2c_devices(2)
                .iter()
                .find(|d| d.type_name == "ak8975")
                .map(|d| d.addr)
        };
        assert_eq!(compass(&boot("board_id=0x0101")), Some(0x0c));
        assert_eq!(compass(&boot("board_id=0x0102")), Some(0x0e));
        assert_eq!(compass(&boot("board_id=0x0103")), Some(0x0e));
    }

    #[test]
    fn projector_held_off() {
        let reg = boot("board_id=0x0103");
        assert_eq!(reg.gpio_level(pins::PROJ_ON), Some(false));
        assert_eq!(reg.gpio_level(pins::PROJ_RESET), Some(false));
    }
}
