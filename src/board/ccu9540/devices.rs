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

static BU21013: TouchscreenData = TouchscreenData {
    max_x: 480,
    max_y: 864,
    gpio_irq: TOUCH_INT,
    gpio_en: None,
    key_codes: &[],
};

static LSM303DLH_ACC: SensorData = SensorData {
    kind: SensorKind::Accelerometer,
    irq_gpio: Some(ACCEL_INT),
    orientation: [1, 0, 0, 0, 1, 0, 0, 0, 1],
};

static LSM303DLH_MAG: SensorData = SensorData {
    kind: SensorKind::Magnetometer,
    irq_gpio: Some(MAGNET_DRDY),
    orientation: [1, 0, 0, 0, 1, 0, 0, 0, 1],
};

static L3G4200D: SensorData = SensorData {
    kind: SensorKind::Gyroscope,
    irq_gpio: Some(GYRO_INT),
    orientation: [1, 0, 0, 0, 1, 0, 0, 0, 1],
};

static HDMI_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("av8100", 0x70).irq(gpio_to_irq(HDMI_INT))];

static SENSOR_DEVICES: [I2cBoardInfo; 3] = [
    I2cBoardInfo::new("lsm303dlh_a", 0x18)
        .irq(gpio_to_irq(ACCEL_INT))
        .platform_data(PlatformData::Sensor(&LSM303DLH_ACC)),
    I2cBoardInfo::new("lsm303dlh_m", 0x1e).platform_data(PlatformData::Sensor(&LSM303DLH_MAG)),
    I2cBoardInfo::new("l3g4200d", 0x68)
        .irq(gpio_to_irq(GYRO_INT))
        .platform_data(PlatformData::Sensor(&L3G4200D)),
];

static TOUCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("bu21013_ts", 0x5c)
    .irq(gpio_to_irq(TOUCH_INT))
    .platform_data(PlatformData::Touchscreen(&BU21013))];

pub static I2C_BUSES: [I2cBusDevices; 2] = [
    I2cBusDevices {
        bus: 2,
        devices: &SENSOR_DEVICES,
    },
    I2cBusDevices {
        bus: 3,
        devices: &TOUCH_DEVICES,
    },
];

/// R0.1 populates the HDMI transmitter.
pub static I2C_BUSES_R0_1: [I2cBusDevices; 3] = [
    I2cBusDevices {
        bus: 0,
        devices: &HDMI_DEVICES,
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

static GPIO_KEYS: [GpioKey; 2] = [
    GpioKey {
        code: KEY_VOLUMEUP,
        gpio: KEY_VOLUP_GPIO,
        active_low: true,
        wakeup: true,
        desc: "Volume Up",
    },
    GpioKey {
        code: KEY_VOLUMEDOWN,
        gpio: KEY_VOLDOWN_GPIO,
        active_low: true,
        wakeup: true,
        desc: "Volume Down",
    },
];

pub static PLATFORM_DEVICES: [PlatformDevice; 2] = [
    PlatformDevice::new("gpio-keys", -1, PlatformData::GpioKeys(&GPIO_KEYS)),
    RAM_CONSOLE_DEVICE,
];

static SDI0_PDATA: MmciPlatformData = sd_card(T_FLASH_DETECT, false);

pub static DB8500_DEVICES: [Db8500Device; 13] = [
    Db8500Device::I2c { id: 0, clock_hz: 100_000 },
    Db8500Device::I2c { id: 1, clock_hz: 400_000 },
    Db8500Device::I2c { id: 2, clock_hz: 400_000 },
    Db8500Device::I2c { id: 3, clock_hz: 400_000 },
    Db8500Device::Msp { id: 0 },
    Db8500Device::Msp { id: 1 },
    Db8500Device::Msp { id: 3 },
    Db8500Device::Sdi { id: 0, pdata: &SDI0_PDATA },
    Db8500Device::Sdi { id: 1, pdata: &WLAN_SDIO_PDATA },
    Db8500Device::Sdi { id: 4, pdata: &EMMC_PDATA },
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
