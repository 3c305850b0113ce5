// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Integrity checks over the static board tables.
//!
//! Nothing here runs at boot. The checks catch the table mistakes that would
//! otherwise only show up as a dead peripheral on a real handset.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use super::platform_common::{MachineDesc, SystemRev};
use crate::device::{
    is_known_supply, BatteryData, I2cBusDevices, PinCfg, Pmic, RegInit, RegulatorInitData, RegulatorPlatformData,
    SpiBoardInfo, I2C_ADDR_MAX, PIN_MAX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingKind {
    DuplicateBoardId,
    RevisionOrder,
    RevisionUncovered,
    RegulatorIndex,
    RegulatorRange,
    UnknownSupply,
    RegInitMask,
    RegInitDuplicate,
    PinRange,
    PinDuplicate,
    PinConflict,
    I2cAddressRange,
    I2cAddressCollision,
    SpiChipSelectCollision,
    BatteryCurve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub machine: &'static str,
    /// First revision of the offending table variant, if any.
    pub rev: Option<SystemRev>,
    pub kind: FindingKind,
    pub detail: String,
}

struct Checker {
    machine: &'static str,
    rev: Option<SystemRev>,
    findings: Vec<Finding>,
}

impl Checker {
    fn report(&mut self, kind: FindingKind, detail: String) {
        self.findings.push(Finding {
            machine: self.machine,
            rev: self.rev,
            kind,
            detail,
        });
    }

    fn board_ids(&mut self, desc: &MachineDesc) {
        let mut seen = BTreeMap::new();
        for entry in desc.board_ids {
            if let Some(previous) = seen.insert(entry.board_id, entry.name) {
                self.report(
                    FindingKind::DuplicateBoardId,
                    format!("board_id {:#06x} maps to {} and {}", entry.board_id, previous, entry.name),
                );
            }
        }
    }

    fn revision_table<T>(&mut self, what: &str, table: &[(SystemRev, T)], lowest: SystemRev) {
        if table.is_empty() {
            return;
        }
        if table.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            self.report(FindingKind::RevisionOrder, format!("{} variants are not in ascending order", what));
        }
        if table[0].0 > lowest {
            self.report(
                FindingKind::RevisionUncovered,
                format!("{} has no variant for revision {}", what, lowest),
            );
        }
    }

    fn regulators(&mut self, pmic: Pmic, pdata: &RegulatorPlatformData) {
        self.regulator_array("regulator", pdata.regulators, pmic.regulator_names());
        self.regulator_array("ext regulator", pdata.ext_regulators, pmic.ext_regulator_names());
        self.reg_init(pdata.reg_init);
    }

    fn regulator_array(&mut self, what: &str, regulators: &[RegulatorInitData], names: &[&str]) {
        if !regulators.is_empty() && regulators.len() != names.len() {
            self.report(
                FindingKind::RegulatorIndex,
                format!("{} {} entries, driver expects {}", regulators.len(), what, names.len()),
            );
        }
        for (index, regulator) in regulators.iter().enumerate() {
            let c = &regulator.constraints;
            if regulator.id != index {
                self.report(
                    FindingKind::RegulatorIndex,
                    format!("{} '{}' has id {} at index {}", what, c.name, regulator.id, index),
                );
            }
            if regulator.id >= names.len() {
                self.report(
                    FindingKind::RegulatorIndex,
                    format!("{} '{}' id {} out of range", what, c.name, regulator.id),
                );
            }
            if c.min_uv > c.max_uv {
                self.report(
                    FindingKind::RegulatorRange,
                    format!("'{}' min {}uV above max {}uV", c.name, c.min_uv, c.max_uv),
                );
            }
            for consumer in regulator.consumers {
                if !is_known_supply(consumer.supply) {
                    self.report(
                        FindingKind::UnknownSupply,
                        format!(
                            "'{}' feeds unknown supply '{}' of {}",
                            c.name,
                            consumer.supply,
                            consumer.dev_name.unwrap_or("any device")
                        ),
                    );
                }
            }
        }
    }

    fn reg_init(&mut self, reg_init: &[RegInit]) {
        for (index, init) in reg_init.iter().enumerate() {
            if init.value & !init.mask != 0 {
                self.report(
                    FindingKind::RegInitMask,
                    format!("{} value {:#04x} outside mask {:#04x}", init.reg.name, init.value, init.mask),
                );
            }
            if reg_init[..index].iter().any(|earlier| earlier.reg == init.reg) {
                self.report(FindingKind::RegInitDuplicate, format!("{} written twice", init.reg.name));
            }
        }
    }

    fn pins(&mut self, what: &str, pins: &[PinCfg]) {
        for (index, pin) in pins.iter().enumerate() {
            if pin.pin() > PIN_MAX {
                self.report(FindingKind::PinRange, format!("{} table: GPIO{} does not exist", what, pin.pin()));
            }
            if let Some(earlier) = pins[..index].iter().find(|earlier| earlier.pin() == pin.pin()) {
                let kind = if earlier.conflicts_with(pin) {
                    FindingKind::PinConflict
                } else {
                    FindingKind::PinDuplicate
                };
                self.report(kind, format!("{} table: {} after {}", what, pin, earlier));
            }
        }
    }

    fn i2c(&mut self, buses: &[I2cBusDevices]) {
        let mut seen: BTreeMap<(u8, u16), &str> = BTreeMap::new();
        for bus in buses {
            for dev in bus.devices {
                if dev.addr > I2C_ADDR_MAX {
                    self.report(
                        FindingKind::I2cAddressRange,
                        format!("{} on i2c-{} at invalid address {:#04x}", dev.type_name, bus.bus, dev.addr),
                    );
                }
                if let Some(other) = seen.insert((bus.bus, dev.addr), dev.type_name) {
                    self.report(
                        FindingKind::I2cAddressCollision,
                        format!("{} and {} share i2c-{} address {:#04x}", other, dev.type_name, bus.bus, dev.addr),
                    );
                }
            }
        }
    }

    fn spi(&mut self, devices: &[SpiBoardInfo]) {
        for (index, dev) in devices.iter().enumerate() {
            let clash = devices[..index]
                .iter()
                .find(|other| other.bus_num == dev.bus_num && other.chip_select == dev.chip_select);
            if let Some(other) = clash {
                self.report(
                    FindingKind::SpiChipSelectCollision,
                    format!(
                        "{} and {} share spi{}.{}",
                        other.modalias, dev.modalias, dev.bus_num, dev.chip_select
                    ),
                );
            }
        }
    }

    fn battery(&mut self, data: &BatteryData) {
        for bat in data.bat_type {
            if bat.v_to_cap_tbl.windows(2).any(|p| p[0].voltage_mv <= p[1].voltage_mv || p[0].capacity < p[1].capacity) {
                self.report(
                    FindingKind::BatteryCurve,
                    format!("{}: voltage/capacity curve is not falling", bat.model),
                );
            }
            if bat.r_to_t_tbl.windows(2).any(|p| p[0].temp >= p[1].temp || p[0].resist < p[1].resist) {
                self.report(
                    FindingKind::BatteryCurve,
                    format!("{}: NTC table is not ordered by rising temperature", bat.model),
                );
            }
            if bat.batres_tbl.windows(2).any(|p| p[0].temp <= p[1].temp) {
                self.report(
                    FindingKind::BatteryCurve,
                    format!("{}: resistance table is not ordered by falling temperature", bat.model),
                );
            }
        }
    }
}

/// Run every table check of one machine.
pub fn check_machine(desc: &'static MachineDesc) -> Vec<Finding> {
    let mut checker = Checker {
        machine: desc.name,
        rev: None,
        findings: Vec::new(),
    };
    let lowest = desc.lowest_rev();

    checker.board_ids(desc);
    checker.revision_table("pins", desc.pins, lowest);
    checker.revision_table("ab8500", desc.ab8500, lowest);
    checker.revision_table("platform devices", desc.platform_devices, lowest);
    checker.revision_table("spi", desc.spi, lowest);
    checker.revision_table("i2c", desc.i2c, lowest);

    for (rev, pins) in desc.pins {
        checker.rev = Some(*rev);
        checker.pins("active", pins.active);
        checker.pins("sleep", pins.sleep);
    }
    for (rev, pdata) in desc.ab8500 {
        checker.rev = Some(*rev);
        checker.regulators(desc.pmic, pdata.regulator);
        checker.battery(pdata.battery);
    }
    for (rev, buses) in desc.i2c {
        checker.rev = Some(*rev);
        checker.i2c(buses);
    }
    for (rev, devices) in desc.spi {
        checker.rev = Some(*rev);
        checker.spi(devices);
    }

    for finding in &checker.findings {
        warn!("{}: {:?}: {}", finding.machine, finding.kind, finding.detail);
    }
    checker.findings
}

/// Check every machine built into this configuration.
pub fn check_all() -> Vec<Finding> {
    super::machines().iter().flat_map(|desc| check_machine(desc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardIdEntry;
    use crate::device::*;

    static ZERO: [(SystemRev, u8); 0] = [];

    fn checker() -> Checker {
        Checker {
            machine: "test",
            rev: None,
            findings: Vec::new(),
        }
    }

    fn kinds(checker: &Checker) -> Vec<FindingKind> {
        checker.findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn every_board_is_clean() {
        let findings = check_all();
        assert!(findings.is_empty(), "{:#?}", findings);
    }

    #[test]
    fn i2c_collision_on_same_bus_only() {
        static BUS2: [I2cBoardInfo; 2] = [I2cBoardInfo::new("gp2a", 0x44), I2cBoardInfo::new("tc35893", 0x44)];
        static BUS3: [I2cBoardInfo; 1] = [I2cBoardInfo::new("bma254", 0x44)];
        static BUSES: [I2cBusDevices; 2] = [
            I2cBusDevices { bus: 2, devices: &BUS2 },
            I2cBusDevices { bus: 3, devices: &BUS3 },
        ];
        let mut c = checker();
        c.i2c(&BUSES);
        assert_eq!(kinds(&c), [FindingKind::I2cAddressCollision]);
    }

    #[test]
    fn i2c_collision_across_registrations_of_one_bus() {
        static FIRST: [I2cBoardInfo; 1] = [I2cBoardInfo::new("zinitix_touch", 0x20)];
        static SECOND: [I2cBoardInfo; 2] = [I2cBoardInfo::new("ncp6914", 0x10), I2cBoardInfo::new("mms_ts", 0x20)];
        static BUSES: [I2cBusDevices; 2] = [
            I2cBusDevices { bus: 3, devices: &FIRST },
            I2cBusDevices { bus: 3, devices: &SECOND },
        ];
        let mut c = checker();
        c.i2c(&BUSES);
        assert_eq!(kinds(&c), [FindingKind::I2cAddressCollision]);
        assert!(c.findings[0].detail.contains("zinitix_touch"));
    }

    #[test]
    fn pin_conflict_and_duplicate() {
        static PINS: [PinCfg; 4] = [
            PinCfg::gpio(68).alt(Alt::A),
            PinCfg::gpio(68).output_low(),
            PinCfg::gpio(70).input(Pull::Up),
            PinCfg::gpio(70).input(Pull::Up).slpm_pdis_disabled(),
        ];
        let mut c = checker();
        c.pins("active", &PINS);
        assert_eq!(kinds(&c), [FindingKind::PinConflict, FindingKind::PinDuplicate]);
    }

    #[test]
    fn raw_pin_words_past_last_bank() {
        static PINS: [PinCfg; 2] = [PinCfg::gpio(PIN_MAX), PinCfg::from_raw(0x1ff)];
        let mut c = checker();
        c.pins("sleep", &PINS);
        assert_eq!(kinds(&c), [FindingKind::PinRange]);
        assert!(c.findings[0].detail.contains("GPIO511"));
    }

    #[test]
    fn regulator_index_must_match_driver_order() {
        static SUPPLIES: [ConsumerSupply; 1] = [ConsumerSupply::new("v-flash", "camera")];
        static REGULATORS: [RegulatorInitData; 2] = [
            RegulatorInitData::new(AB8500_LDO_AUX2, RegulationConstraints::fixed("V-AUX2", 2_900_000), &[]),
            RegulatorInitData::new(
                AB8500_LDO_AUX1,
                RegulationConstraints::range("V-AUX1", 3_000_000, 1_800_000),
                &SUPPLIES,
            ),
        ];
        let mut c = checker();
        c.regulator_array("regulator", &REGULATORS, Pmic::Ab8500.regulator_names());
        assert_eq!(
            kinds(&c),
            [
                FindingKind::RegulatorIndex,
                FindingKind::RegulatorIndex,
                FindingKind::RegulatorIndex,
                FindingKind::RegulatorRange,
                FindingKind::UnknownSupply,
            ]
        );
    }

    #[test]
    fn reg_init_value_must_fit_mask() {
        static INIT: [RegInit; 3] = [
            RegInit::new(REGU_MISC1, 0x3c, 0x0c),
            RegInit::new(REGU_VUSB_CTRL, 0x01, 0x03),
            RegInit::new(REGU_MISC1, 0x03, 0x00),
        ];
        let mut c = checker();
        c.reg_init(&INIT);
        assert_eq!(kinds(&c), [FindingKind::RegInitMask, FindingKind::RegInitDuplicate]);
    }

    #[test]
    fn revision_tables_must_ascend_from_lowest() {
        static TABLE: [(SystemRev, u8); 2] = [(SystemRev(3), 0), (SystemRev(1), 1)];
        let mut c = checker();
        c.revision_table("pins", &TABLE, SystemRev(0));
        c.revision_table("empty", &ZERO, SystemRev(0));
        assert_eq!(kinds(&c), [FindingKind::RevisionOrder, FindingKind::RevisionUncovered]);
    }

    #[test]
    fn duplicate_board_ids_are_reported() {
        static IDS: [BoardIdEntry; 2] = [
            BoardIdEntry {
                board_id: 0x101,
                rev: SystemRev(0),
                name: "R0_0",
            },
            BoardIdEntry {
                board_id: 0x101,
                rev: SystemRev(1),
                name: "R0_1",
            },
        ];
        static DESC: MachineDesc = MachineDesc {
            name: "dup",
            machine_name: "DUP",
            model: "none",
            pmic: Pmic::Ab8500,
            board_ids: &IDS,
            pins: &[],
            ab8500: &[],
            db8500_devices: &[],
            platform_devices: &[],
            spi: &[],
            i2c: &[],
            board_setup: None,
        };
        let findings = check_machine(&DESC);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::DuplicateBoardId);
    }

    #[test]
    fn spi_chip_select_collision() {
        static SPI: [SpiBoardInfo; 2] = [
            SpiBoardInfo {
                modalias: "pri_lcd_ws2401",
                bus_num: 2,
                chip_select: 0,
                max_speed_hz: 1_200_000,
                mode: SpiMode::Mode3,
                irq: None,
                platform_data: PlatformData::None,
            },
            SpiBoardInfo {
                modalias: "pri_lcd_s6d27a1",
                bus_num: 2,
                chip_select: 0,
                max_speed_hz: 1_200_000,
                mode: SpiMode::Mode3,
                irq: None,
                platform_data: PlatformData::None,
            },
        ];
        let mut c = checker();
        c.spi(&SPI);
        assert_eq!(kinds(&c), [FindingKind::SpiChipSelectCollision]);
    }
}
