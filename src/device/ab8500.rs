// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! AB8500, AB8505 and AB9540 companion chip description: regulator numbering,
//! the register catalog used by regulator init, and the platform data of the
//! core MFD driver.

use super::battery::BatteryData;
use super::regulator::RegulatorPlatformData;

/// The power-management companion chip fitted on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pmic {
    Ab8500,
    Ab8505,
    Ab9540,
}

// AB8500 regulator ids
pub const AB8500_LDO_AUX1: usize = 0;
pub const AB8500_LDO_AUX2: usize = 1;
pub const AB8500_LDO_AUX3: usize = 2;
pub const AB8500_LDO_INTCORE: usize = 3;
pub const AB8500_LDO_TVOUT: usize = 4;
pub const AB8500_LDO_USB: usize = 5;
pub const AB8500_LDO_AUDIO: usize = 6;
pub const AB8500_LDO_ANAMIC1: usize = 7;
pub const AB8500_LDO_ANAMIC2: usize = 8;
pub const AB8500_LDO_DMIC: usize = 9;
pub const AB8500_LDO_ANA: usize = 10;
pub const AB8500_SYSCLKREQ_2: usize = 11;
pub const AB8500_SYSCLKREQ_4: usize = 12;

const AB8500_REGULATOR_NAMES: &[&str] = &[
    "aux1", "aux2", "aux3", "intcore", "tvout", "usb", "audio", "anamic1", "anamic2", "dmic", "ana", "sysclkreq2",
    "sysclkreq4",
];

// AB8505 regulator ids
pub const AB8505_LDO_AUX1: usize = 0;
pub const AB8505_LDO_AUX2: usize = 1;
pub const AB8505_LDO_AUX3: usize = 2;
pub const AB8505_LDO_AUX4: usize = 3;
pub const AB8505_LDO_AUX5: usize = 4;
pub const AB8505_LDO_AUX6: usize = 5;
pub const AB8505_LDO_INTCORE: usize = 6;
pub const AB8505_LDO_ADC: usize = 7;
pub const AB8505_LDO_USB: usize = 8;
pub const AB8505_LDO_AUDIO: usize = 9;
pub const AB8505_LDO_ANAMIC1: usize = 10;
pub const AB8505_LDO_ANAMIC2: usize = 11;
pub const AB8505_LDO_AUX8: usize = 12;
pub const AB8505_LDO_ANA: usize = 13;
pub const AB8505_SYSCLKREQ_2: usize = 14;
pub const AB8505_SYSCLKREQ_4: usize = 15;

const AB8505_REGULATOR_NAMES: &[&str] = &[
    "aux1", "aux2", "aux3", "aux4", "aux5", "aux6", "intcore", "adc", "usb", "audio", "anamic1", "anamic2", "aux8",
    "ana", "sysclkreq2", "sysclkreq4",
];

// AB9540 regulator ids
pub const AB9540_LDO_AUX1: usize = 0;
pub const AB9540_LDO_AUX2: usize = 1;
pub const AB9540_LDO_AUX3: usize = 2;
pub const AB9540_LDO_AUX4: usize = 3;
pub const AB9540_LDO_INTCORE: usize = 4;
pub const AB9540_LDO_TVOUT: usize = 5;
pub const AB9540_LDO_USB: usize = 6;
pub const AB9540_LDO_AUDIO: usize = 7;
pub const AB9540_LDO_ANAMIC1: usize = 8;
pub const AB9540_LDO_ANAMIC2: usize = 9;
pub const AB9540_LDO_DMIC: usize = 10;
pub const AB9540_LDO_ANA: usize = 11;
pub const AB9540_SYSCLKREQ_2: usize = 12;
pub const AB9540_SYSCLKREQ_4: usize = 13;

const AB9540_REGULATOR_NAMES: &[&str] = &[
    "aux1", "aux2", "aux3", "aux4", "intcore", "tvout", "usb", "audio", "anamic1", "anamic2", "dmic", "ana",
    "sysclkreq2", "sysclkreq4",
];

// External supplies, shared numbering on all three chips
pub const AB8500_EXT_SUPPLY1: usize = 0;
pub const AB8500_EXT_SUPPLY2: usize = 1;
pub const AB8500_EXT_SUPPLY3: usize = 2;

const EXT_REGULATOR_NAMES: &[&str] = &["ext_supply1", "ext_supply2", "ext_supply3"];

impl Pmic {
    /// Regulator names in driver index order.
    pub fn regulator_names(self) -> &'static [&'static str] {
        match self {
            Pmic::Ab8500 => AB8500_REGULATOR_NAMES,
            Pmic::Ab8505 => AB8505_REGULATOR_NAMES,
            Pmic::Ab9540 => AB9540_REGULATOR_NAMES,
        }
    }

    pub fn regulator_count(self) -> usize {
        self.regulator_names().len()
    }

    pub fn ext_regulator_names(self) -> &'static [&'static str] {
        EXT_REGULATOR_NAMES
    }

    /// Name of the MFD core platform device.
    pub fn core_name(self) -> &'static str {
        match self {
            Pmic::Ab8500 => "ab8500-core",
            Pmic::Ab8505 => "ab8505-core",
            Pmic::Ab9540 => "ab9540-core",
        }
    }
}

/// A register reachable through the PMIC's banked I2C interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ab8500Reg {
    pub bank: u8,
    pub addr: u8,
    pub name: &'static str,
}

macro_rules! ab8500_regs {
    ($($name:ident = ($bank:expr, $addr:expr), )*) => {
        $(pub const $name: Ab8500Reg = Ab8500Reg {
            bank: $bank,
            addr: $addr,
            name: stringify!($name),
        };)*
    };
}

ab8500_regs! {
    REGU_REQUEST_CTRL1 = (0x03, 0x03),
    REGU_REQUEST_CTRL2 = (0x03, 0x04),
    REGU_REQUEST_CTRL3 = (0x03, 0x05),
    REGU_REQUEST_CTRL4 = (0x03, 0x06),
    REGU_SYSCLK_REQ1_HP_VALID1 = (0x03, 0x07),
    REGU_SYSCLK_REQ1_HP_VALID2 = (0x03, 0x08),
    REGU_HW_HP_REQ1_VALID1 = (0x03, 0x09),
    REGU_HW_HP_REQ1_VALID2 = (0x03, 0x0A),
    REGU_HW_HP_REQ2_VALID1 = (0x03, 0x0B),
    REGU_HW_HP_REQ2_VALID2 = (0x03, 0x0C),
    REGU_SW_HP_REQ_VALID1 = (0x03, 0x0D),
    REGU_SW_HP_REQ_VALID2 = (0x03, 0x0E),
    REGU_SYSCLK_REQ1_VALID = (0x03, 0x0F),
    REGU_SYSCLK_REQ2_VALID = (0x03, 0x10),
    REGU_MISC1 = (0x03, 0x80),
    REGU_OTGSUPPLY_CTRL = (0x03, 0x81),
    REGU_VUSB_CTRL = (0x03, 0x82),
    REGU_VAUDIO_SUPPLY = (0x03, 0x83),
    REGU_CTRL1_VAMIC = (0x03, 0x84),
    REGU_ARM_REGU1 = (0x04, 0x00),
    REGU_ARM_REGU2 = (0x04, 0x01),
    REGU_VAPE_REGU = (0x04, 0x02),
    REGU_VSMPS1_REGU = (0x04, 0x03),
    REGU_VSMPS2_REGU = (0x04, 0x04),
    REGU_VSMPS3_REGU = (0x04, 0x05),
    REGU_VPLL_VANA_REGU = (0x04, 0x06),
    REGU_VREF_DDR = (0x04, 0x07),
    REGU_EXT_SUPPLY_REGU = (0x04, 0x08),
    REGU_VAUX12_REGU = (0x04, 0x09),
    REGU_VRF1_VAUX3_REGU = (0x04, 0x0A),
    REGU_VSMPS1_SEL1 = (0x04, 0x13),
    REGU_VSMPS2_SEL1 = (0x04, 0x17),
    REGU_VSMPS3_SEL1 = (0x04, 0x1B),
    REGU_VAUX1_SEL = (0x04, 0x1F),
    REGU_VAUX2_SEL = (0x04, 0x20),
    REGU_VRF1_VAUX3_SEL = (0x04, 0x21),
    REGU_CTRL_EXT_SUP = (0x04, 0x22),
    REGU_VMOD_REGU = (0x04, 0x40),
    REGU_VMOD_SEL1 = (0x04, 0x41),
    REGU_VMOD_SEL2 = (0x04, 0x42),
    REGU_CTRL_DISCH = (0x04, 0x43),
    REGU_CTRL_DISCH2 = (0x04, 0x44),
}

/// One masked register write: `reg = (reg & !mask) | value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegInit {
    pub reg: Ab8500Reg,
    pub mask: u8,
    pub value: u8,
}

impl RegInit {
    pub const fn new(reg: Ab8500Reg, mask: u8, value: u8) -> Self {
        Self { reg, mask, value }
    }

    /// The register content after applying this write to `current`.
    pub fn apply(&self, current: u8) -> u8 {
        (current & !self.mask) | (self.value & self.mask)
    }
}

/// Platform data of the PMIC's GPIO block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ab8500GpioPlatformData {
    pub gpio_base: u32,
    pub irq_base: u32,
    /// Initial values of GPIOSEL1..6, GPIODIR1..2 in that order.
    pub config_reg: [u8; 8],
}

/// Platform data of the AB8500-family MFD core.
#[derive(Debug)]
pub struct Ab8500PlatformData {
    pub irq_base: u32,
    /// The PMIC takes over `pm_power_off`.
    pub pm_power_off: bool,
    pub regulator: &'static RegulatorPlatformData,
    pub gpio: &'static Ab8500GpioPlatformData,
    pub battery: &'static BatteryData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulator_counts() {
        assert_eq!(Pmic::Ab8500.regulator_count(), AB8500_SYSCLKREQ_4 + 1);
        assert_eq!(Pmic::Ab8505.regulator_count(), AB8505_SYSCLKREQ_4 + 1);
        assert_eq!(Pmic::Ab9540.regulator_count(), AB9540_SYSCLKREQ_4 + 1);
        assert_eq!(Pmic::Ab8505.regulator_names()[AB8505_LDO_AUX8], "aux8");
    }

    #[test]
    fn masked_write_keeps_other_bits() {
        let init = RegInit::new(REGU_VAUX12_REGU, 0x0f, 0x05);
        assert_eq!(init.apply(0xf0), 0xf5);
        assert_eq!(init.apply(0xff), 0xf5);
        assert_eq!(REGU_VAUX12_REGU.name, "REGU_VAUX12_REGU");
    }
}
