// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! A [`Registrar`] that records every call instead of reaching real drivers.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::platform_common::Registrar;
use crate::device::{
    Ab8500PlatformData, Db8500Device, I2cBoardInfo, PinCfg, PlatformDevice, Pmic, SpiBoardInfo,
};
use crate::driver::gpio::GpioController;
use crate::error::{ErrorKind, Result};

#[derive(Debug, Clone, Copy)]
pub enum Registration {
    GpioRequest { gpio: u32, label: &'static str },
    GpioOutput { gpio: u32, value: bool },
    GpioInput { gpio: u32 },
    Pins(&'static [PinCfg]),
    SleepPins(&'static [PinCfg]),
    ReserveMemory { base: u64, size: u64 },
    Pmic { pmic: Pmic, pdata: &'static Ab8500PlatformData },
    Db8500(&'static Db8500Device),
    PlatformDevice(&'static PlatformDevice),
    Spi(&'static [SpiBoardInfo]),
    I2c { bus: u8, devices: &'static [I2cBoardInfo] },
}

#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    events: Vec<Registration>,
    claimed: BTreeSet<u32>,
    failing_gpios: BTreeSet<u32>,
    failing_directions: BTreeSet<u32>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make requests for `gpio` fail, as if the line were broken.
    pub fn fail_gpio(mut self, gpio: u32) -> Self {
        self.failing_gpios.insert(gpio);
        self
    }

    /// Let requests for `gpio` succeed but fail setting its direction.
    pub fn fail_gpio_direction(mut self, gpio: u32) -> Self {
        self.failing_directions.insert(gpio);
        self
    }

    pub fn events(&self) -> &[Registration] {
        &self.events
    }

    pub fn pmic_data(&self) -> Option<&'static Ab8500PlatformData> {
        self.events.iter().find_map(|event| match event {
            Registration::Pmic { pdata, .. } => Some(*pdata),
            _ => None,
        })
    }

    pub fn platform_device(&self, name: &str) -> Option<&'static PlatformDevice> {
        self.events.iter().find_map(|event| match event {
            Registration::PlatformDevice(dev) if dev.name == name => Some(*dev),
            _ => None,
        })
    }

    /// All devices registered on I2C bus `bus`, across calls.
    pub fn i2c_devices(&self, bus: u8) -> Vec<&'static I2cBoardInfo> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Registration::I2c { bus: b, devices } if *b == bus => Some(devices.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn is_claimed(&self, gpio: u32) -> bool {
        self.claimed.contains(&gpio)
    }

    /// Level last driven on `gpio`.
    pub fn gpio_level(&self, gpio: u32) -> Option<bool> {
        self.events.iter().rev().find_map(|event| match *event {
            Registration::GpioOutput { gpio: g, value } if g == gpio => Some(value),
            _ => None,
        })
    }
}

impl GpioController for RecordingRegistrar {
    fn gpio_request(&mut self, gpio: u32, label: &'static str) -> Result<()> {
        if self.failing_gpios.contains(&gpio) {
            return ErrorKind::Io.into();
        }
        if !self.claimed.insert(gpio) {
            return ErrorKind::AlreadyExists.into();
        }
        self.events.push(Registration::GpioRequest { gpio, label });
        Ok(())
    }

    fn gpio_direction_output(&mut self, gpio: u32, value: bool) -> Result<()> {
        if self.failing_gpios.contains(&gpio) || self.failing_directions.contains(&gpio) {
            return ErrorKind::Io.into();
        }
        self.events.push(Registration::GpioOutput { gpio, value });
        Ok(())
    }

    fn gpio_direction_input(&mut self, gpio: u32) -> Result<()> {
        if self.failing_gpios.contains(&gpio) || self.failing_directions.contains(&gpio) {
            return ErrorKind::Io.into();
        }
        self.events.push(Registration::GpioInput { gpio });
        Ok(())
    }

    fn config_pins(&mut self, pins: &'static [PinCfg]) -> Result<()> {
        self.events.push(Registration::Pins(pins));
        Ok(())
    }
}

impl Registrar for RecordingRegistrar {
    fn reserve_memory(&mut self, base: u64, size: u64) -> Result<()> {
        self.events.push(Registration::ReserveMemory { base, size });
        Ok(())
    }

    fn set_sleep_pins(&mut self, pins: &'static [PinCfg]) -> Result<()> {
        self.events.push(Registration::SleepPins(pins));
        Ok(())
    }

    fn register_pmic(&mut self, pmic: Pmic, pdata: &'static Ab8500PlatformData) -> Result<()> {
        self.events.push(Registration::Pmic { pmic, pdata });
        Ok(())
    }

    fn add_db8500_device(&mut self, dev: &'static Db8500Device) -> Result<()> {
        self.events.push(Registration::Db8500(dev));
        // The serial core powers a UART up as soon as it is probed.
        if let Db8500Device::Uart { hooks: Some(hooks), .. } = dev {
            hooks.init(self)?;
        }
        Ok(())
    }

    fn register_platform_device(&mut self, dev: &'static PlatformDevice) -> Result<()> {
        let duplicate = self.events.iter().any(|event| {
            matches!(event, Registration::PlatformDevice(other) if other.name == dev.name && other.id == dev.id)
        });
        if duplicate {
            return ErrorKind::AlreadyExists.into();
        }
        self.events.push(Registration::PlatformDevice(dev));
        Ok(())
    }

    fn register_spi_board_info(&mut self, info: &'static [SpiBoardInfo]) -> Result<()> {
        self.events.push(Registration::Spi(info));
        Ok(())
    }

    fn register_i2c_board_info(&mut self, bus: u8, info: &'static [I2cBoardInfo]) -> Result<()> {
        self.events.push(Registration::I2c { bus, devices: info });
        Ok(())
    }
}
