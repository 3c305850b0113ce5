// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use super::platform_device::PlatformData;

/// A device on an I2C bus, bound to its driver by `type_name`.
#[derive(Debug)]
pub struct I2cBoardInfo {
    pub type_name: &'static str,
    /// 7-bit slave address.
    pub addr: u16,
    pub irq: Option<u32>,
    pub platform_data: PlatformData,
}

impl I2cBoardInfo {
    pub const fn new(type_name: &'static str, addr: u16) -> Self {
        Self {
            type_name,
            addr,
            irq: None,
            platform_data: PlatformData::None,
        }
    }

    pub const fn irq(mut self, irq: u32) -> Self {
        self.irq = Some(irq);
        self
    }

    pub const fn platform_data(mut self, platform_data: PlatformData) -> Self {
        self.platform_data = platform_data;
        self
    }
}

/// The devices registered on one bus index.
#[derive(Debug)]
pub struct I2cBusDevices {
    pub bus: u8,
    pub devices: &'static [I2cBoardInfo],
}

/// Largest valid 7-bit address; 0x78..=0x7f are reserved for 10-bit addressing.
pub const I2C_ADDR_MAX: u16 = 0x77;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

/// A device on an SPI bus, bound to its driver by `modalias`.
#[derive(Debug)]
pub struct SpiBoardInfo {
    pub modalias: &'static str,
    pub bus_num: u16,
    pub chip_select: u16,
    pub max_speed_hz: u32,
    pub mode: SpiMode,
    pub irq: Option<u32>,
    pub platform_data: PlatformData,
}
