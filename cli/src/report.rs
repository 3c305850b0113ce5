// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
use serde::Serialize;
use ux500_boards::board::{check::Finding, BootContext, InitReport, Registration};

/// One registration, flattened for printing and JSON.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    GpioRequest { gpio: u32, label: String },
    GpioOutput { gpio: u32, value: bool },
    GpioInput { gpio: u32 },
    Pins { count: usize, first: Option<u32> },
    SleepPins { count: usize },
    ReserveMemory { base: u64, size: u64 },
    Pmic { core: String, regulators: usize, battery_packs: usize },
    Db8500 { name: String, id: u8 },
    PlatformDevice { name: String, id: i32 },
    Spi { devices: Vec<String> },
    I2c { bus: u8, devices: Vec<String> },
}

impl From<&Registration> for EventRecord {
    fn from(event: &Registration) -> Self {
        match *event {
            Registration::GpioRequest { gpio, label } => EventRecord::GpioRequest {
                gpio,
                label: label.to_string(),
            },
            Registration::GpioOutput { gpio, value } => EventRecord::GpioOutput { gpio, value },
            Registration::GpioInput { gpio } => EventRecord::GpioInput { gpio },
            Registration::Pins(pins) => EventRecord::Pins {
                count: pins.len(),
                first: pins.first().map(|pin| pin.pin()),
            },
            Registration::SleepPins(pins) => EventRecord::SleepPins { count: pins.len() },
            Registration::ReserveMemory { base, size } => EventRecord::ReserveMemory { base, size },
            Registration::Pmic { pmic, pdata } => EventRecord::Pmic {
                core: pmic.core_name().to_string(),
                regulators: pdata.regulator.regulators.len(),
                battery_packs: pdata.battery.bat_type.len(),
            },
            Registration::Db8500(dev) => EventRecord::Db8500 {
                name: dev.name().to_string(),
                id: dev.id(),
            },
            Registration::PlatformDevice(dev) => EventRecord::PlatformDevice {
                name: dev.name.to_string(),
                id: dev.id,
            },
            Registration::Spi(info) => EventRecord::Spi {
                devices: info
                    .iter()
                    .map(|dev| format!("{}@spi{}.{}", dev.modalias, dev.bus_num, dev.chip_select))
                    .collect(),
            },
            Registration::I2c { bus, devices } => EventRecord::I2c {
                bus,
                devices: devices
                    .iter()
                    .map(|dev| format!("{}@{:#04x}", dev.type_name, dev.addr))
                    .collect(),
            },
        }
    }
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EventRecord::GpioRequest { gpio, label } => write!(f, "gpio_request    GPIO{} ({})", gpio, label),
            EventRecord::GpioOutput { gpio, value } => write!(f, "gpio_output     GPIO{} = {}", gpio, *value as u8),
            EventRecord::GpioInput { gpio } => write!(f, "gpio_input      GPIO{}", gpio),
            EventRecord::Pins { count, first } => match first {
                Some(first) => write!(f, "pins            {} entries from GPIO{}", count, first),
                None => write!(f, "pins            empty"),
            },
            EventRecord::SleepPins { count } => write!(f, "sleep_pins      {} entries", count),
            EventRecord::ReserveMemory { base, size } => {
                write!(f, "reserve_memory  {:#x}..{:#x}", base, base + size)
            }
            EventRecord::Pmic {
                core,
                regulators,
                battery_packs,
            } => write!(
                f,
                "pmic            {} ({} regulators, {} battery types)",
                core, regulators, battery_packs
            ),
            EventRecord::Db8500 { name, id } => write!(f, "db8500          {}.{}", name, id),
            EventRecord::PlatformDevice { name, id } => write!(f, "platform        {}.{}", name, id),
            EventRecord::Spi { devices } => write!(f, "spi             {}", devices.join(" ")),
            EventRecord::I2c { bus, devices } => write!(f, "i2c-{}           {}", bus, devices.join(" ")),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct FailureRecord {
    pub step: String,
    pub target: String,
    pub error: String,
}

/// Everything `boot` prints.
#[derive(Serialize, Debug)]
pub struct BootRecord {
    pub machine: String,
    pub model: String,
    pub revision: String,
    pub system_rev: u32,
    pub rev_fallback: bool,
    pub completed: usize,
    pub events: Vec<EventRecord>,
    pub failures: Vec<FailureRecord>,
}

impl BootRecord {
    pub fn new(ctx: &BootContext, report: &InitReport, events: &[Registration]) -> Self {
        Self {
            machine: ctx.machine.name.to_string(),
            model: ctx.machine.model.to_string(),
            revision: ctx.rev_name().to_string(),
            system_rev: ctx.system_rev.0,
            rev_fallback: ctx.rev_fallback,
            completed: report.completed,
            events: events.iter().map(EventRecord::from).collect(),
            failures: report
                .failures
                .iter()
                .map(|failure| FailureRecord {
                    step: format!("{:?}", failure.step),
                    target: failure.target.clone(),
                    error: format!("{:?}", failure.kind),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct FindingRecord {
    pub machine: String,
    pub revision: Option<u32>,
    pub kind: String,
    pub detail: String,
}

impl From<&Finding> for FindingRecord {
    fn from(finding: &Finding) -> Self {
        Self {
            machine: finding.machine.to_string(),
            revision: finding.rev.map(|rev| rev.0),
            kind: format!("{:?}", finding.kind),
            detail: finding.detail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ux500_boards::{find_machine, init_machine, BootParams, RecordingRegistrar};

    #[test]
    fn boot_record_serializes() {
        let machine = find_machine("golden").unwrap();
        let ctx = BootContext::new(machine, BootParams::parse("board_id=0x0105"));
        let mut reg = RecordingRegistrar::new();
        let report = init_machine(&ctx, &mut reg);
        let record = BootRecord::new(&ctx, &report, reg.events());

        assert_eq!(record.revision, "GOLDEN_R0_4");
        assert!(!record.rev_fallback);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["machine"], "golden");
        assert_eq!(json["events"][0]["event"], "pins");
        assert!(json["failures"].as_array().unwrap().is_empty());
    }

    #[test]
    fn setup_failure_is_listed() {
        let machine = find_machine("golden").unwrap();
        let ctx = BootContext::new(machine, BootParams::parse("board_id=0x0105"));
        let mut clean = RecordingRegistrar::new();
        init_machine(&ctx, &mut clean);
        let (gpio, label) = clean
            .events()
            .iter()
            .find_map(|event| match *event {
                Registration::GpioRequest { gpio, label } => Some((gpio, label)),
                _ => None,
            })
            .unwrap();

        let mut reg = RecordingRegistrar::new().fail_gpio(gpio);
        let report = init_machine(&ctx, &mut reg);
        let record = BootRecord::new(&ctx, &report, reg.events());
        assert_eq!(record.failures.len(), 1);
        assert_eq!(record.failures[0].step, "BoardSetup");
        assert_eq!(record.failures[0].target, label);
        assert_eq!(record.failures[0].error, "Io");
    }

    #[test]
    fn i2c_event_lists_addresses() {
        let machine = find_machine("golden").unwrap();
        let ctx = BootContext::new(machine, BootParams::parse("board_id=0x0104"));
        let mut reg = RecordingRegistrar::new();
        init_machine(&ctx, &mut reg);
        let sensors = reg
            .events()
            .iter()
            .map(EventRecord::from)
            .find_map(|event| match event {
                EventRecord::I2c { bus: 2, devices } => Some(devices),
                _ => None,
            })
            .unwrap();
        assert!(sensors.contains(&String::from("bh1721fvc@0x23")));
    }
}
