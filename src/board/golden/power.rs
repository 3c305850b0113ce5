// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! AB8505 regulators and PMIC platform data.

use crate::board::common::{AB8500_GPIO_BASE, AB8500_IRQ_BASE, BATTERY_EB_L1M7FLU};
use crate::device::*;

static VAUX1_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-display", "mcde_disp_s6e88a0.0")];
static VAUX2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("vmmc", "sdi2")];
static VAUX3_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("vmmc", "sdi0")];
static VAUX4_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-touch", "3-0020")];
static VAUX5_CONSUMERS: [ConsumerSupply; 3] = [
    ConsumerSupply::new("v-sensor", "2-0018"),
    ConsumerSupply::new("v-sensor", "2-000c"),
    ConsumerSupply::new("v-proximity", "2-0044"),
];
static VAUX6_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-cam-io", "mmio_camera")];
static INTCORE_CONSUMERS: [ConsumerSupply; 3] = [
    ConsumerSupply::new("v-intcore", "mcde"),
    ConsumerSupply::new("v-intcore", "ab8500-usb.0"),
    ConsumerSupply::new("v-intcore", "sdi1"),
];
static ADC_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-adc", "ab8500-gpadc.0")];
static USB_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-usb", "ab8500-usb.0")];
static AUDIO_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-audio", "ab8500-codec.0")];
static AMIC1_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-amic1", "ab8500-codec.0")];
static AMIC2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-amic2", "ab8500-codec.0")];
static AUX8_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-led", "ktd259-backlight")];
static ANA_CONSUMERS: [ConsumerSupply; 3] = [
    ConsumerSupply::new("v-ana", "mcde"),
    ConsumerSupply::new("v-ana", "mmio_camera"),
    ConsumerSupply::new("vddi", "mcde_disp_s6e88a0.0"),
];
static SYSCLKREQ2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("gbf_1v8", "cg2900-uart.0")];

static REGULATORS: [RegulatorInitData; 16] = [
    RegulatorInitData::new(
        AB8505_LDO_AUX1,
        RegulationConstraints::range("V-DISPLAY", 2_800_000, 3_300_000).boot_on(),
        &VAUX1_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8505_LDO_AUX2,
        RegulationConstraints::fixed("V-eMMC", 2_900_000),
        &VAUX2_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8505_LDO_AUX3,
        RegulationConstraints::range("V-MMC-SD", 1_100_000, 3_300_000),
        &VAUX3_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8505_LDO_AUX4,
        RegulationConstraints::fixed("V-TSP-3.3V", 3_300_000),
        &VAUX4_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8505_LDO_AUX5,
        RegulationConstraints::fixed("V-SENSOR", 2_800_000),
        &VAUX5_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8505_LDO_AUX6,
        RegulationConstraints::fixed("V-CAM-IO", 1_800_000),
        &VAUX6_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8505_LDO_INTCORE,
        RegulationConstraints::range("V-INTCORE", 1_250_000, 1_350_000)
            .modes(ValidModes::NORMAL.union(ValidModes::IDLE)),
        &INTCORE_CONSUMERS,
    ),
    RegulatorInitData::new(AB8505_LDO_ADC, RegulationConstraints::switch("V-ADC"), &ADC_CONSUMERS),
    RegulatorInitData::new(
        AB8505_LDO_USB,
        RegulationConstraints::fixed("V-USB", 3_300_000).modes(ValidModes::NORMAL.union(ValidModes::IDLE)),
        &USB_CONSUMERS,
    ),
    RegulatorInitData::new(AB8505_LDO_AUDIO, RegulationConstraints::switch("V-AUD"), &AUDIO_CONSUMERS),
    RegulatorInitData::new(AB8505_LDO_ANAMIC1, RegulationConstraints::switch("V-AMIC1"), &AMIC1_CONSUMERS),
    RegulatorInitData::new(AB8505_LDO_ANAMIC2, RegulationConstraints::switch("V-AMIC2"), &AMIC2_CONSUMERS),
    RegulatorInitData::new(
        AB8505_LDO_AUX8,
        RegulationConstraints::fixed("V-AUX8", 1_800_000),
        &AUX8_CONSUMERS,
    ),
    RegulatorInitData::new(AB8505_LDO_ANA, RegulationConstraints::switch("V-CSI-DSI"), &ANA_CONSUMERS),
    RegulatorInitData::new(
        AB8505_SYSCLKREQ_2,
        RegulationConstraints::switch("V-SYSCLKREQ-2"),
        &SYSCLKREQ2_CONSUMERS,
    ),
    RegulatorInitData::new(AB8505_SYSCLKREQ_4, RegulationConstraints::switch("V-SYSCLKREQ-4"), &[]),
];

static EXT_SUPPLY1_CONSUMERS: [ConsumerSupply; 2] =
    [ConsumerSupply::new("vio", "cg2900-uart.0"), ConsumerSupply::new("v-hsi", "ste_hsi.0")];
static EXT_SUPPLY2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::global("vsmps2")];
static EXT_SUPPLY3_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::global("vsmps3")];

static EXT_REGULATORS: [RegulatorInitData; 3] = [
    RegulatorInitData::new(
        AB8500_EXT_SUPPLY1,
        RegulationConstraints::fixed("ab8500-ext-supply1", 1_800_000).always_on().boot_on(),
        &EXT_SUPPLY1_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_EXT_SUPPLY2,
        RegulationConstraints::fixed("ab8500-ext-supply2", 1_360_000),
        &EXT_SUPPLY2_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_EXT_SUPPLY3,
        RegulationConstraints::fixed("ab8500-ext-supply3", 3_400_000).always_on(),
        &EXT_SUPPLY3_CONSUMERS,
    ),
];

static REG_INIT: [RegInit; 24] = [
    RegInit::new(REGU_REQUEST_CTRL1, 0xf0, 0x00),
    RegInit::new(REGU_REQUEST_CTRL2, 0xff, 0x00),
    RegInit::new(REGU_REQUEST_CTRL3, 0xff, 0x00),
    RegInit::new(REGU_REQUEST_CTRL4, 0x07, 0x00),
    RegInit::new(REGU_SYSCLK_REQ1_HP_VALID1, 0xff, 0x00),
    RegInit::new(REGU_SYSCLK_REQ1_HP_VALID2, 0x70, 0x00),
    RegInit::new(REGU_HW_HP_REQ1_VALID1, 0xff, 0x00),
    RegInit::new(REGU_HW_HP_REQ1_VALID2, 0x7f, 0x00),
    RegInit::new(REGU_HW_HP_REQ2_VALID1, 0xff, 0x00),
    RegInit::new(REGU_HW_HP_REQ2_VALID2, 0x7f, 0x00),
    RegInit::new(REGU_SW_HP_REQ_VALID1, 0xff, 0x00),
    RegInit::new(REGU_SW_HP_REQ_VALID2, 0x7f, 0x00),
    RegInit::new(REGU_SYSCLK_REQ1_VALID, 0xff, 0x2a),
    RegInit::new(REGU_SYSCLK_REQ2_VALID, 0xff, 0x20),
    RegInit::new(REGU_MISC1, 0x3c, 0x00),
    RegInit::new(REGU_VAUDIO_SUPPLY, 0x1e, 0x00),
    RegInit::new(REGU_CTRL1_VAMIC, 0x03, 0x00),
    RegInit::new(REGU_VPLL_VANA_REGU, 0x0f, 0x02),
    RegInit::new(REGU_EXT_SUPPLY_REGU, 0xff, 0x13),
    RegInit::new(REGU_VAUX12_REGU, 0x0f, 0x01),
    RegInit::new(REGU_VRF1_VAUX3_REGU, 0x03, 0x00),
    RegInit::new(REGU_VAUX1_SEL, 0x0f, 0x0c),
    RegInit::new(REGU_VAUX2_SEL, 0x0f, 0x0d),
    RegInit::new(REGU_CTRL_DISCH, 0xff, 0x00),
];

pub static REGULATOR_PDATA: RegulatorPlatformData = RegulatorPlatformData {
    reg_init: &REG_INIT,
    regulators: &REGULATORS,
    ext_regulators: &EXT_REGULATORS,
};

pub static AB8505_GPIO_PDATA: Ab8500GpioPlatformData = Ab8500GpioPlatformData {
    gpio_base: AB8500_GPIO_BASE,
    irq_base: AB8500_IRQ_BASE + 144,
    config_reg: [0x0b, 0x4a, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00],
};

/// R0.4 moved the headset detect onto AB GPIO3.
pub static AB8505_R04_GPIO_PDATA: Ab8500GpioPlatformData = Ab8500GpioPlatformData {
    gpio_base: AB8500_GPIO_BASE,
    irq_base: AB8500_IRQ_BASE + 144,
    config_reg: [0x0f, 0x4a, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00],
};

pub static AB8505_PDATA: Ab8500PlatformData = Ab8500PlatformData {
    irq_base: AB8500_IRQ_BASE,
    pm_power_off: true,
    regulator: &REGULATOR_PDATA,
    gpio: &AB8505_GPIO_PDATA,
    battery: &BATTERY_EB_L1M7FLU,
};

pub static AB8505_R04_PDATA: Ab8500PlatformData = Ab8500PlatformData {
    irq_base: AB8500_IRQ_BASE,
    pm_power_off: true,
    regulator: &REGULATOR_PDATA,
    gpio: &AB8505_R04_GPIO_PDATA,
    battery: &BATTERY_EB_L1M7FLU,
};
