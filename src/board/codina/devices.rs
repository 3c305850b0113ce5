// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use super::pins::*;
use crate::board::common::*;
use crate::device::*;

static TOUCH_KEYS: [u32; 2] = [KEY_MENU, KEY_BACK];

static ZINITIX_TOUCH: TouchscreenData = TouchscreenData {
    max_x: 480,
    max_y: 800,
    gpio_irq: TSP_INT,
    gpio_en: None,
    key_codes: &TOUCH_KEYS,
};

static K3DH: SensorData = SensorData {
    kind: SensorKind::Accelerometer,
    irq_gpio: None,
    orientation: [-1, 0, 0, 0, -1, 0, 0, 0, 1],
};

static YAS530: SensorData = SensorData {
    kind: SensorKind::Magnetometer,
    irq_gpio: None,
    orientation: [0, 1, 0, -1, 0, 0, 0, 0, 1],
};

static GP2A: SensorData = SensorData {
    kind: SensorKind::Proximity,
    irq_gpio: Some(PS_INT),
    orientation: [0; 9],
};

static FSA880: UsbSwitchData = UsbSwitchData {
    intb_gpio: USB_SWITCH_INT,
    charger_detect: true,
};

static USB_SWITCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("fsa880", 0x25)
    .irq(gpio_to_irq(USB_SWITCH_INT))
    .platform_data(PlatformData::UsbSwitch(&FSA880))];

static SENSOR_DEVICES: [I2cBoardInfo; 3] = [
    I2cBoardInfo::new("k3dh", 0x19).platform_data(PlatformData::Sensor(&K3DH)),
    I2cBoardInfo::new("yas530", 0x2e).platform_data(PlatformData::Sensor(&YAS530)),
    I2cBoardInfo::new("gp2a", 0x44)
        .irq(gpio_to_irq(PS_INT))
        .platform_data(PlatformData::Sensor(&GP2A)),
];

static TOUCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("zinitix_touch", 0x20)
    .irq(gpio_to_irq(TSP_INT))
    .platform_data(PlatformData::Touchscreen(&ZINITIX_TOUCH))];

pub static I2C_BUSES: [I2cBusDevices; 3] = [
    I2cBusDevices {
        bus: 0,
        devices: &USB_SWITCH_DEVICES,
    },
    I2cBusDevices {
        bus: 2,
        devices: &SENSOR_DEVICES,
    },
    I2cBusDevices {
        bus: 3,
        devices: &TOUCH_DEVICES,
    },
];

pub static SPI_WS2401: [SpiBoardInfo; 1] = [SpiBoardInfo {
    modalias: "pri_lcd_ws2401",
    bus_num: 2,
    chip_select: 0,
    max_speed_hz: 1_200_000,
    mode: SpiMode::Mode3,
    irq: None,
    platform_data: PlatformData::None,
}];

/// From R0.2 the panel is the S6D27A1.
pub static SPI_S6D27A1: [SpiBoardInfo; 1] = [SpiBoardInfo {
    modalias: "pri_lcd_s6d27a1",
    bus_num: 2,
    chip_select: 0,
    max_speed_hz: 1_200_000,
    mode: SpiMode::Mode3,
    irq: None,
    platform_data: PlatformData::None,
}];

static GPIO_KEYS: [GpioKey; 3] = [
    GpioKey {
        code: KEY_HOME,
        gpio: KEY_HOME_GPIO,
        active_low: true,
        wakeup: true,
        desc: "Home",
    },
    GpioKey {
        code: KEY_VOLUMEUP,
        gpio: KEY_VOLUP_GPIO,
        active_low: true,
        wakeup: false,
        desc: "Volume Up",
    },
    GpioKey {
        code: KEY_VOLUMEDOWN,
        gpio: KEY_VOLDOWN_GPIO,
        active_low: true,
        wakeup: false,
        desc: "Volume Down",
    },
];

static KTD253: BacklightData = BacklightData {
    ctrl_gpio: BL_CTRL,
    max_brightness: 255,
    default_brightness: 150,
};

static SPI_GPIO_RESOURCES: [Resource; 1] = [Resource::mem(0x8011_e000, 0x1000)];

pub static PLATFORM_DEVICES: [PlatformDevice; 4] = [
    PlatformDevice::new("gpio-keys", -1, PlatformData::GpioKeys(&GPIO_KEYS)),
    PlatformDevice::new("ktd253-backlight", -1, PlatformData::Backlight(&KTD253)),
    PlatformDevice::new("spi_gpio", 2, PlatformData::None).resources(&SPI_GPIO_RESOURCES),
    RAM_CONSOLE_DEVICE,
];

static SDI0_PDATA: MmciPlatformData = sd_card(T_FLASH_DETECT, true);

pub static DB8500_DEVICES: [Db8500Device; 13] = [
    Db8500Device::I2c { id: 0, clock_hz: 400_000 },
    Db8500Device::I2c { id: 1, clock_hz: 400_000 },
    Db8500Device::I2c { id: 2, clock_hz: 400_000 },
    Db8500Device::I2c { id: 3, clock_hz: 400_000 },
    Db8500Device::Msp { id: 0 },
    Db8500Device::Msp { id: 1 },
    Db8500Device::Msp { id: 2 },
    Db8500Device::Sdi { id: 0, pdata: &SDI0_PDATA },
    Db8500Device::Sdi { id: 1, pdata: &WLAN_SDIO_PDATA },
    Db8500Device::Sdi { id: 2, pdata: &EMMC_PDATA },
    Db8500Device::Uart {
        id: 0,
        hooks: Some(&UART0_PIN_SWITCH),
    },
    Db8500Device::Uart { id: 1, hooks: None },
    Db8500Device::Uart {
        id: 2,
        hooks: Some(&UART2_PIN_SWITCH),
    },
];
