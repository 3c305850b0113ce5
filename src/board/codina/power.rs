// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use crate::board::common::{AB8500_GPIO_BASE, AB8500_IRQ_BASE, BATTERY_EB425161LU};
use crate::device::*;

static VAUX1_CONSUMERS: [ConsumerSupply; 2] = [
    ConsumerSupply::new("vdd", "pri_lcd_ws2401.0"),
    ConsumerSupply::new("vdd", "pri_lcd_s6d27a1.0"),
];
static VAUX2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("vmmc", "sdi2")];
static VAUX3_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("vmmc", "sdi0")];
static INTCORE_CONSUMERS: [ConsumerSupply; 3] = [
    ConsumerSupply::new("v-intcore", "mcde"),
    ConsumerSupply::new("v-intcore", "ab8500-usb.0"),
    ConsumerSupply::new("v-intcore", "sdi1"),
];
static TVOUT_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-tvout", "ab8500-denc.0")];
static USB_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-usb", "ab8500-usb.0")];
static AUDIO_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-audio", "ab8500-codec.0")];
static AMIC1_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-amic1", "ab8500-codec.0")];
static AMIC2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-amic2", "ab8500-codec.0")];
static DMIC_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-dmic", "ab8500-codec.0")];
static ANA_CONSUMERS: [ConsumerSupply; 3] = [
    ConsumerSupply::new("v-ana", "mcde"),
    ConsumerSupply::new("v-ana", "mmio_camera"),
    ConsumerSupply::new("vddi", "pri_lcd_ws2401.0"),
];
static SYSCLKREQ2_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("gbf_1v8", "cg2900-uart.0")];

static REGULATORS: [RegulatorInitData; 13] = [
    RegulatorInitData::new(
        AB8500_LDO_AUX1,
        RegulationConstraints::range("V-DISPLAY", 3_000_000, 3_300_000).boot_on(),
        &VAUX1_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_LDO_AUX2,
        RegulationConstraints::fixed("V-eMMC", 2_900_000),
        &VAUX2_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_LDO_AUX3,
        RegulationConstraints::range("V-MMC-SD", 1_200_000, 2_910_000),
        &VAUX3_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_LDO_INTCORE,
        RegulationConstraints::range("V-INTCORE", 1_250_000, 1_350_000)
            .modes(ValidModes::NORMAL.union(ValidModes::IDLE)),
        &INTCORE_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_LDO_TVOUT,
        RegulationConstraints::fixed("V-TVOUT", 2_000_000),
        &TVOUT_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_LDO_USB,
        RegulationConstraints::fixed("V-USB", 3_300_000).modes(ValidModes::NORMAL.union(ValidModes::IDLE)),
        &USB_CONSUMERS,
    ),
    RegulatorInitData::new(AB8500_LDO_AUDIO, RegulationConstraints::switch("V-AUD"), &AUDIO_CONSUMERS),
    RegulatorInitData::new(AB8500_LDO_ANAMIC1, RegulationConstraints::switch("V-AMIC1"), &AMIC1_CONSUMERS),
    RegulatorInitData::new(AB8500_LDO_ANAMIC2, RegulationConstraints::switch("V-AMIC2"), &AMIC2_CONSUMERS),
    RegulatorInitData::new(AB8500_LDO_DMIC, RegulationConstraints::switch("V-DMIC"), &DMIC_CONSUMERS),
    RegulatorInitData::new(AB8500_LDO_ANA, RegulationConstraints::switch("V-CSI-DSI"), &ANA_CONSUMERS),
    RegulatorInitData::new(
        AB8500_SYSCLKREQ_2,
        RegulationConstraints::switch("V-SYSCLKREQ-2"),
        &SYSCLKREQ2_CONSUMERS,
    ),
    RegulatorInitData::new(AB8500_SYSCLKREQ_4, RegulationConstraints::switch("V-SYSCLKREQ-4"), &[]),
];

static EXT_SUPPLY1_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("vio", "cg2900-uart.0")];

static EXT_REGULATORS: [RegulatorInitData; 3] = [
    RegulatorInitData::new(
        AB8500_EXT_SUPPLY1,
        RegulationConstraints::fixed("ab8500-ext-supply1", 1_800_000).always_on().boot_on(),
        &EXT_SUPPLY1_CONSUMERS,
    ),
    RegulatorInitData::new(
        AB8500_EXT_SUPPLY2,
        RegulationConstraints::fixed("ab8500-ext-supply2", 1_360_000),
        &[],
    ),
    RegulatorInitData::new(
        AB8500_EXT_SUPPLY3,
        RegulationConstraints::fixed("ab8500-ext-supply3", 3_400_000).always_on(),
        &[],
    ),
];

static REG_INIT: [RegInit; 20] = [
    RegInit::new(REGU_REQUEST_CTRL1, 0xf0, 0x00),
    RegInit::new(REGU_REQUEST_CTRL2, 0xff, 0x00),
    RegInit::new(REGU_REQUEST_CTRL3, 0xff, 0x00),
    RegInit::new(REGU_REQUEST_CTRL4, 0x07, 0x00),
    RegInit::new(REGU_SYSCLK_REQ1_HP_VALID1, 0xff, 0x00),
    RegInit::new(REGU_SYSCLK_REQ1_HP_VALID2, 0x70, 0x00),
    RegInit::new(REGU_HW_HP_REQ1_VALID1, 0xff, 0x00),
    RegInit::new(REGU_HW_HP_REQ1_VALID2, 0x07, 0x00),
    RegInit::new(REGU_SW_HP_REQ_VALID1, 0xff, 0x00),
    RegInit::new(REGU_SW_HP_REQ_VALID2, 0x7f, 0x00),
    RegInit::new(REGU_SYSCLK_REQ1_VALID, 0xff, 0x2a),
    RegInit::new(REGU_SYSCLK_REQ2_VALID, 0xff, 0x20),
    RegInit::new(REGU_MISC1, 0x3c, 0x00),
    RegInit::new(REGU_OTGSUPPLY_CTRL, 0x07, 0x00),
    RegInit::new(REGU_VUSB_CTRL, 0x03, 0x00),
    RegInit::new(REGU_VAUDIO_SUPPLY, 0x1e, 0x00),
    RegInit::new(REGU_CTRL1_VAMIC, 0x03, 0x00),
    RegInit::new(REGU_EXT_SUPPLY_REGU, 0xff, 0x13),
    RegInit::new(REGU_VAUX12_REGU, 0x0f, 0x05),
    RegInit::new(REGU_VRF1_VAUX3_REGU, 0x03, 0x01),
];

pub static REGULATOR_PDATA: RegulatorPlatformData = RegulatorPlatformData {
    reg_init: &REG_INIT,
    regulators: &REGULATORS,
    ext_regulators: &EXT_REGULATORS,
};

pub static GPIO_PDATA: Ab8500GpioPlatformData = Ab8500GpioPlatformData {
    gpio_base: AB8500_GPIO_BASE,
    irq_base: AB8500_IRQ_BASE + 144,
    config_reg: [0x00, 0x1e, 0x80, 0x01, 0x7a, 0x00, 0x00, 0x00],
};

pub static AB8500_PDATA: Ab8500PlatformData = Ab8500PlatformData {
    irq_base: AB8500_IRQ_BASE,
    pm_power_off: true,
    regulator: &REGULATOR_PDATA,
    gpio: &GPIO_PDATA,
    battery: &BATTERY_EB425161LU,
};
