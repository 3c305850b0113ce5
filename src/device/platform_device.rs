// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Platform devices, the DB8500 SoC blocks and the platform data they carry.

use core::fmt::Debug;

use bitflags::bitflags;

use super::pinmux::PinCfg;
use super::regulator::RegulatorInitData;
use crate::driver::gpio::GpioController;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Mem,
    Irq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub start: u64,
    pub end: u64,
    pub kind: ResourceKind,
}

impl Resource {
    pub const fn irq(irq: u32) -> Self {
        Self {
            start: irq as u64,
            end: irq as u64,
            kind: ResourceKind::Irq,
        }
    }

    pub const fn mem(start: u64, size: u64) -> Self {
        Self {
            start,
            end: start + size - 1,
            kind: ResourceKind::Mem,
        }
    }
}

#[derive(Debug)]
pub struct TouchscreenData {
    pub max_x: u32,
    pub max_y: u32,
    pub gpio_irq: u32,
    /// LDO enable line, for controllers not on a PMIC supply.
    pub gpio_en: Option<u32>,
    pub key_codes: &'static [u32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    Magnetometer,
    Gyroscope,
    Proximity,
    Light,
}

#[derive(Debug)]
pub struct SensorData {
    pub kind: SensorKind,
    pub irq_gpio: Option<u32>,
    /// Row-major mounting matrix from chip axes to device axes.
    pub orientation: [i8; 9],
}

#[derive(Debug)]
pub struct UsbSwitchData {
    pub intb_gpio: u32,
    /// The switch reports dedicated chargers to the charger driver.
    pub charger_detect: bool,
}

#[derive(Debug)]
pub struct GpioKey {
    pub code: u32,
    pub gpio: u32,
    pub active_low: bool,
    pub wakeup: bool,
    pub desc: &'static str,
}

/// A supply switched by a GPIO rather than a PMIC register.
#[derive(Debug)]
pub struct FixedVoltageConfig {
    pub supply_name: &'static str,
    pub microvolts: u32,
    pub gpio: u32,
    pub enable_high: bool,
    pub startup_delay_us: u32,
    pub init_data: &'static RegulatorInitData,
}

#[derive(Debug)]
pub struct BacklightData {
    pub ctrl_gpio: u32,
    pub max_brightness: u32,
    pub default_brightness: u32,
}

/// Driver-specific data attached to a device entry.
#[derive(Debug)]
pub enum PlatformData {
    None,
    Touchscreen(&'static TouchscreenData),
    Sensor(&'static SensorData),
    UsbSwitch(&'static UsbSwitchData),
    GpioKeys(&'static [GpioKey]),
    FixedRegulator(&'static FixedVoltageConfig),
    Backlight(&'static BacklightData),
    /// The persistent log buffer reserved with `mem_ram_console=`.
    RamConsole,
}

#[derive(Debug)]
pub struct PlatformDevice {
    pub name: &'static str,
    /// Instance id; -1 for a single unnumbered instance.
    pub id: i32,
    pub resources: &'static [Resource],
    pub platform_data: PlatformData,
}

impl PlatformDevice {
    pub const fn new(name: &'static str, id: i32, platform_data: PlatformData) -> Self {
        Self {
            name,
            id,
            resources: &[],
            platform_data,
        }
    }

    pub const fn resources(mut self, resources: &'static [Resource]) -> Self {
        self.resources = resources;
        self
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MmcCaps: u32 {
        const FOUR_BIT_DATA = 1 << 0;
        const MMC_HIGHSPEED = 1 << 1;
        const SD_HIGHSPEED = 1 << 2;
        const NONREMOVABLE = 1 << 3;
        const EIGHT_BIT_DATA = 1 << 4;
        const ERASE = 1 << 5;
        const POWER_OFF_CARD = 1 << 6;
    }
}

/// OCR window bits.
pub const MMC_VDD_165_195: u32 = 0x0000_0080;
pub const MMC_VDD_29_30: u32 = 0x0002_0000;
pub const MMC_VDD_30_31: u32 = 0x0004_0000;

#[derive(Debug)]
pub struct MmciPlatformData {
    pub ocr_mask: u32,
    pub f_max: u32,
    pub capabilities: MmcCaps,
    /// Card-detect line, `None` for soldered parts.
    pub gpio_cd: Option<u32>,
    pub cd_invert: bool,
}

/// Power hooks of a PL011 UART, called by the serial driver.
pub trait UartHooks: Sync + Debug {
    fn init(&self, gpio: &mut dyn GpioController) -> Result<()>;

    fn exit(&self, gpio: &mut dyn GpioController) -> Result<()>;

    fn reset(&self, gpio: &mut dyn GpioController) -> Result<()> {
        self.exit(gpio)?;
        self.init(gpio)
    }
}

/// Routes the UART pins on `init` and parks them on `exit`.
#[derive(Debug)]
pub struct UartPinSwitch {
    pub enabled: &'static [PinCfg],
    pub disabled: &'static [PinCfg],
}

impl UartHooks for UartPinSwitch {
    fn init(&self, gpio: &mut dyn GpioController) -> Result<()> {
        gpio.config_pins(self.enabled)
    }

    fn exit(&self, gpio: &mut dyn GpioController) -> Result<()> {
        gpio.config_pins(self.disabled)
    }
}

/// The SoC-internal blocks added with the `db8500_add_*` helpers.
#[derive(Debug, Clone, Copy)]
pub enum Db8500Device {
    I2c { id: u8, clock_hz: u32 },
    Ssp { id: u8 },
    Msp { id: u8 },
    Sdi { id: u8, pdata: &'static MmciPlatformData },
    Uart { id: u8, hooks: Option<&'static dyn UartHooks> },
}

impl Db8500Device {
    pub fn name(&self) -> &'static str {
        match self {
            Db8500Device::I2c { .. } => "nmk-i2c",
            Db8500Device::Ssp { .. } => "ssp",
            Db8500Device::Msp { .. } => "ux500-msp-i2s",
            Db8500Device::Sdi { .. } => "mmci",
            Db8500Device::Uart { .. } => "uart",
        }
    }

    pub fn id(&self) -> u8 {
        match *self {
            Db8500Device::I2c { id, .. }
            | Db8500Device::Ssp { id }
            | Db8500Device::Msp { id }
            | Db8500Device::Sdi { id, .. }
            | Db8500Device::Uart { id, .. } => id,
        }
    }
}
