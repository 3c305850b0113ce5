// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Regulator init data handed to the AB8500-family regulator driver.

use bitflags::bitflags;

use super::ab8500::RegInit;

bitflags! {
    /// Operations a consumer may perform on a regulator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ValidOps: u32 {
        const VOLTAGE = 0x1;
        const CURRENT = 0x2;
        const MODE = 0x4;
        const STATUS = 0x8;
        const DRMS = 0x10;
        const BYPASS = 0x20;
    }
}

bitflags! {
    /// Operating modes a consumer may request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ValidModes: u32 {
        const FAST = 0x1;
        const NORMAL = 0x2;
        const IDLE = 0x4;
        const STANDBY = 0x8;
    }
}

/// Supply names the consumer drivers look up with `regulator_get()`.
///
/// A consumer entry naming anything else is never matched at runtime.
pub const KNOWN_SUPPLIES: &[&str] = &[
    "vddi",
    "vdd",
    "vio",
    "vcc",
    "vaux12",
    "v-display",
    "v-mmc",
    "vmmc",
    "vqmmc",
    "v-ape",
    "v-intcore",
    "v-tvout",
    "v-usb",
    "v-audio",
    "v-amic1",
    "v-amic2",
    "v-dmic",
    "v-ana",
    "v-adc",
    "v-i2c",
    "v-hsi",
    "v-touch",
    "v-tsp-1.8",
    "v-sensor",
    "v-proximity",
    "v-led",
    "v-cam-io",
    "v-cam-a",
    "v-cam-core",
    "v-sd-io",
    "vsmps1",
    "vsmps2",
    "vsmps3",
    "gbf_1v8",
    "vdd-hdmi",
    "vref",
];

/// A `(supply, device)` pair a consumer driver asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerSupply {
    pub supply: &'static str,
    pub dev_name: Option<&'static str>,
}

impl ConsumerSupply {
    pub const fn new(supply: &'static str, dev_name: &'static str) -> Self {
        Self {
            supply,
            dev_name: Some(dev_name),
        }
    }

    /// A supply looked up without a device name.
    pub const fn global(supply: &'static str) -> Self {
        Self { supply, dev_name: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegulationConstraints {
    pub name: &'static str,
    pub min_uv: u32,
    pub max_uv: u32,
    pub valid_ops_mask: ValidOps,
    pub valid_modes_mask: ValidModes,
    pub always_on: bool,
    pub boot_on: bool,
}

impl RegulationConstraints {
    /// A switchable supply with a fixed output.
    pub const fn fixed(name: &'static str, uv: u32) -> Self {
        Self {
            name,
            min_uv: uv,
            max_uv: uv,
            valid_ops_mask: ValidOps::STATUS,
            valid_modes_mask: ValidModes::empty(),
            always_on: false,
            boot_on: false,
        }
    }

    /// A switchable supply whose output can be set within `min_uv..=max_uv`.
    pub const fn range(name: &'static str, min_uv: u32, max_uv: u32) -> Self {
        Self {
            name,
            min_uv,
            max_uv,
            valid_ops_mask: ValidOps::VOLTAGE.union(ValidOps::STATUS),
            valid_modes_mask: ValidModes::empty(),
            always_on: false,
            boot_on: false,
        }
    }

    /// A supply with no voltage control at all, only on/off.
    pub const fn switch(name: &'static str) -> Self {
        Self {
            name,
            min_uv: 0,
            max_uv: 0,
            valid_ops_mask: ValidOps::STATUS,
            valid_modes_mask: ValidModes::empty(),
            always_on: false,
            boot_on: false,
        }
    }

    pub const fn modes(mut self, modes: ValidModes) -> Self {
        self.valid_ops_mask = self.valid_ops_mask.union(ValidOps::MODE);
        self.valid_modes_mask = modes;
        self
    }

    pub const fn always_on(mut self) -> Self {
        self.always_on = true;
        self
    }

    pub const fn boot_on(mut self) -> Self {
        self.boot_on = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegulatorInitData {
    /// Index into the PMIC driver's regulator array.
    pub id: usize,
    pub supply_regulator: Option<&'static str>,
    pub constraints: RegulationConstraints,
    pub consumers: &'static [ConsumerSupply],
}

impl RegulatorInitData {
    pub const fn new(id: usize, constraints: RegulationConstraints, consumers: &'static [ConsumerSupply]) -> Self {
        Self {
            id,
            supply_regulator: None,
            constraints,
            consumers,
        }
    }

    pub const fn supplied_by(mut self, regulator: &'static str) -> Self {
        self.supply_regulator = Some(regulator);
        self
    }
}

/// Everything the AB8500-family regulator driver needs from the board.
#[derive(Debug)]
pub struct RegulatorPlatformData {
    /// Register writes applied before the regulators are registered.
    pub reg_init: &'static [RegInit],
    /// Internal LDOs, indexed by the PMIC's regulator id.
    pub regulators: &'static [RegulatorInitData],
    /// External SMPS supplies controlled through the PMIC.
    pub ext_regulators: &'static [RegulatorInitData],
}

impl RegulatorPlatformData {
    pub fn regulator(&self, id: usize) -> Option<&'static RegulatorInitData> {
        self.regulators.iter().find(|r| r.id == id)
    }

    /// Find the regulator feeding `supply` of `dev_name`.
    pub fn consumer(&self, supply: &str, dev_name: &str) -> Option<&'static RegulatorInitData> {
        self.regulators
            .iter()
            .chain(self.ext_regulators.iter())
            .find(|r| {
                r.consumers
                    .iter()
                    .any(|c| c.supply == supply && c.dev_name.map_or(true, |d| d == dev_name))
            })
    }
}

pub fn is_known_supply(supply: &str) -> bool {
    KNOWN_SUPPLIES.contains(&supply)
}
