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

/// Vendor key code of the projector button.
pub const KEY_PROJECTOR: u32 = 0x2c0;

static MMS_TOUCH: TouchscreenData = TouchscreenData {
    max_x: 480,
    max_y: 800,
    gpio_irq: TSP_INT,
    gpio_en: Some(TSP_LDO_ON),
    key_codes: &[],
};

static BMA254: SensorData = SensorData {
    kind: SensorKind::Accelerometer,
    irq_gpio: None,
    orientation: [1, 0, 0, 0, -1, 0, 0, 0, -1],
};

static AK8975: SensorData = SensorData {
    kind: SensorKind::Magnetometer,
    irq_gpio: None,
    orientation: [0, -1, 0, -1, 0, 0, 0, 0, -1],
};

static GP2A: SensorData = SensorData {
    kind: SensorKind::Proximity,
    irq_gpio: Some(PS_INT),
    orientation: [0; 9],
};

static TSU6111: UsbSwitchData = UsbSwitchData {
    intb_gpio: USB_SWITCH_INT,
    charger_detect: true,
};

static USB_SWITCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("tsu6111", 0x25)
    .irq(gpio_to_irq(USB_SWITCH_INT))
    .platform_data(PlatformData::UsbSwitch(&TSU6111))];

static SENSOR_DEVICES: [I2cBoardInfo; 3] = [
    I2cBoardInfo::new("bma254", 0x18).platform_data(PlatformData::Sensor(&BMA254)),
    I2cBoardInfo::new("ak8975", 0x0c).platform_data(PlatformData::Sensor(&AK8975)),
    I2cBoardInfo::new("gp2a", 0x44)
        .irq(gpio_to_irq(PS_INT))
        .platform_data(PlatformData::Sensor(&GP2A)),
];

/// R0.0-B strapped the compass CAD pins differently.
static SENSOR_DEVICES_R0_0_B: [I2cBoardInfo; 3] = [
    I2cBoardInfo::new("bma254", 0x18).platform_data(PlatformData::Sensor(&BMA254)),
    I2cBoardInfo::new("ak8975", 0x0e).platform_data(PlatformData::Sensor(&AK8975)),
    I2cBoardInfo::new("gp2a", 0x44)
        .irq(gpio_to_irq(PS_INT))
        .platform_data(PlatformData::Sensor(&GP2A)),
];

static TOUCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("mms_ts", 0x48)
    .irq(gpio_to_irq(TSP_INT))
    .platform_data(PlatformData::Touchscreen(&MMS_TOUCH))];

static PROJECTOR_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("dpp2601", 0x1b)];

pub static I2C_BUSES: [I2cBusDevices; 4] = [
    I2cBusDevices {
        bus: 0,
        devices: &USB_SWITCH_DEVICES,
    },
    I2cBusDevices {
        bus: 1,
        devices: &PROJECTOR_DEVICES,
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

pub static I2C_BUSES_R0_0_B: [I2cBusDevices; 4] = [
    I2cBusDevices {
        bus: 0,
        devices: &USB_SWITCH_DEVICES,
    },
    I2cBusDevices {
        bus: 1,
        devices: &PROJECTOR_DEVICES,
    },
    I2cBusDevices {
        bus: 2,
        devices: &SENSOR_DEVICES_R0_0_B,
    },
    I2cBusDevices {
        bus: 3,
        devices: &TOUCH_DEVICES,
    },
];

pub static SPI_DEVICES: [SpiBoardInfo; 1] = [SpiBoardInfo {
    modalias: "pri_lcd_s6d27a1",
    bus_num: 2,
    chip_select: 0,
    max_speed_hz: 1_200_000,
    mode: SpiMode::Mode3,
    irq: None,
    platform_data: PlatformData::None,
}];

static GPIO_KEYS: [GpioKey; 4] = [
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
    GpioKey {
        code: KEY_PROJECTOR,
        gpio: KEY_PROJECTOR_GPIO,
        active_low: true,
        wakeup: true,
        desc: "Projector",
    },
];

pub static PLATFORM_DEVICES: [PlatformDevice; 3] = [
    PlatformDevice::new("gpio-keys", -1, PlatformData::GpioKeys(&GPIO_KEYS)),
    PlatformDevice::new("dpp2601-projector", -1, PlatformData::None),
    RAM_CONSOLE_DEVICE,
];

static MMS_LDO_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-touch", "3-0048")];

static MMS_LDO_INIT: RegulatorInitData = RegulatorInitData::new(
    0,
    RegulationConstraints::fixed("V-TSP-3.3V", 3_300_000),
    &MMS_LDO_CONSUMERS,
);

static MMS_LDO: FixedVoltageConfig = FixedVoltageConfig {
    supply_name: "V-TSP-3.3V",
    microvolts: 3_300_000,
    gpio: TSP_LDO_ON,
    enable_high: true,
    startup_delay_us: 10_000,
    init_data: &MMS_LDO_INIT,
};

/// R0.1 switches the touch supply through a GPIO-enabled LDO.
pub static PLATFORM_DEVICES_R0_1: [PlatformDevice; 4] = [
    PlatformDevice::new("gpio-keys", -1, PlatformData::GpioKeys(&GPIO_KEYS)),
    PlatformDevice::new("dpp2601-projector", -1, PlatformData::None),
    PlatformDevice::new("reg-fixed-voltage", 0, PlatformData::FixedRegulator(&MMS_LDO)),
    RAM_CONSOLE_DEVICE,
];

static SDI0_PDATA: MmciPlatformData = sd_card(T_FLASH_DETECT, false);

pub static DB8500_DEVICES: [Db8500Device; 12] = [
    Db8500Device::I2c { id: 0, clock_hz: 400_000 },
    Db8500Device::I2c { id: 1, clock_hz: 100_000 },
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
    Db8500Device::Uart {
        id: 2,
        hooks: Some(&UART2_PIN_SWITCH),
    },
];
