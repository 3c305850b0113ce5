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
    gpio_en: Some(TSP_LDO_ON),
    key_codes: &TOUCH_KEYS,
};

static BMA254: SensorData = SensorData {
    kind: SensorKind::Accelerometer,
    irq_gpio: None,
    orientation: [0, -1, 0, 1, 0, 0, 0, 0, 1],
};

static HSCDTD: SensorData = SensorData {
    kind: SensorKind::Magnetometer,
    irq_gpio: None,
    orientation: [-1, 0, 0, 0, 1, 0, 0, 0, -1],
};

static GP2A: SensorData = SensorData {
    kind: SensorKind::Proximity,
    irq_gpio: Some(PS_INT),
    orientation: [0; 9],
};

static BH1721: SensorData = SensorData {
    kind: SensorKind::Light,
    irq_gpio: None,
    orientation: [0; 9],
};

static TSU6111: UsbSwitchData = UsbSwitchData {
    intb_gpio: USB_SWITCH_INT,
    charger_detect: true,
};

static USB_SWITCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("tsu6111", 0x25)
    .irq(gpio_to_irq(USB_SWITCH_INT))
    .platform_data(PlatformData::UsbSwitch(&TSU6111))];

static CAMERA_PMIC_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("ncp6914", 0x10)];

static SENSOR_DEVICES: [I2cBoardInfo; 3] = [
    I2cBoardInfo::new("bma254", 0x18).platform_data(PlatformData::Sensor(&BMA254)),
    I2cBoardInfo::new("hscd_i2c", 0x0c).platform_data(PlatformData::Sensor(&HSCDTD)),
    I2cBoardInfo::new("gp2a", 0x44)
        .irq(gpio_to_irq(PS_INT))
        .platform_data(PlatformData::Sensor(&GP2A)),
];

static SENSOR_DEVICES_R0_3: [I2cBoardInfo; 4] = [
    I2cBoardInfo::new("bma254", 0x18).platform_data(PlatformData::Sensor(&BMA254)),
    I2cBoardInfo::new("hscd_i2c", 0x0c).platform_data(PlatformData::Sensor(&HSCDTD)),
    I2cBoardInfo::new("gp2a", 0x44)
        .irq(gpio_to_irq(PS_INT))
        .platform_data(PlatformData::Sensor(&GP2A)),
    I2cBoardInfo::new("bh1721fvc", 0x23).platform_data(PlatformData::Sensor(&BH1721)),
];

static TOUCH_DEVICES: [I2cBoardInfo; 1] = [I2cBoardInfo::new("zinitix_touch", 0x20)
    .irq(gpio_to_irq(TSP_INT))
    .platform_data(PlatformData::Touchscreen(&ZINITIX_TOUCH))];

pub static I2C_BUSES: [I2cBusDevices; 4] = [
    I2cBusDevices {
        bus: 0,
        devices: &USB_SWITCH_DEVICES,
    },
    I2cBusDevices {
        bus: 1,
        devices: &CAMERA_PMIC_DEVICES,
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

/// R0.3 adds the ambient light sensor.
pub static I2C_BUSES_R0_3: [I2cBusDevices; 4] = [
    I2cBusDevices {
        bus: 0,
        devices: &USB_SWITCH_DEVICES,
    },
    I2cBusDevices {
        bus: 1,
        devices: &CAMERA_PMIC_DEVICES,
    },
    I2cBusDevices {
        bus: 2,
        devices: &SENSOR_DEVICES_R0_3,
    },
    I2cBusDevices {
        bus: 3,
        devices: &TOUCH_DEVICES,
    },
];

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

static KTD259: BacklightData = BacklightData {
    ctrl_gpio: BL_CTRL,
    max_brightness: 255,
    default_brightness: 160,
};

static ZINITIX_LDO_CONSUMERS: [ConsumerSupply; 1] = [ConsumerSupply::new("v-tsp-1.8", "3-0020")];

static ZINITIX_LDO_INIT: RegulatorInitData = RegulatorInitData::new(
    0,
    RegulationConstraints::fixed("V-TSP-1.8V", 1_800_000),
    &ZINITIX_LDO_CONSUMERS,
);

static ZINITIX_LDO: FixedVoltageConfig = FixedVoltageConfig {
    supply_name: "V-TSP-1.8V",
    microvolts: 1_800_000,
    gpio: TSP_LDO_ON,
    enable_high: true,
    startup_delay_us: 0,
    init_data: &ZINITIX_LDO_INIT,
};

static JACK_RESOURCES: [Resource; 1] = [Resource::irq(gpio_to_irq(JACK_NINT))];

pub static PLATFORM_DEVICES: [PlatformDevice; 5] = [
    PlatformDevice::new("gpio-keys", -1, PlatformData::GpioKeys(&GPIO_KEYS)),
    PlatformDevice::new("reg-fixed-voltage", 0, PlatformData::FixedRegulator(&ZINITIX_LDO)),
    PlatformDevice::new("ktd259-backlight", -1, PlatformData::Backlight(&KTD259)),
    PlatformDevice::new("sec-jack", -1, PlatformData::None).resources(&JACK_RESOURCES),
    RAM_CONSOLE_DEVICE,
];

static SDI0_PDATA: MmciPlatformData = sd_card(T_FLASH_DETECT, true);

pub static DB8500_DEVICES: [Db8500Device; 14] = [
    Db8500Device::I2c { id: 0, clock_hz: 400_000 },
    Db8500Device::I2c { id: 1, clock_hz: 400_000 },
    Db8500Device::I2c { id: 2, clock_hz: 400_000 },
    Db8500Device::I2c { id: 3, clock_hz: 400_000 },
    Db8500Device::Msp { id: 0 },
    Db8500Device::Msp { id: 1 },
    Db8500Device::Msp { id: 2 },
    Db8500Device::Ssp { id: 0 },
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
