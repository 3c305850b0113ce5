// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use crate::device::PinCfg;
use crate::error::Result;

/// The GPIO and pin-control services board code calls into.
pub trait GpioController {
    /// Claim `gpio` for `label`. Lines are never released.
    fn gpio_request(&mut self, gpio: u32, label: &'static str) -> Result<()>;

    fn gpio_direction_output(&mut self, gpio: u32, value: bool) -> Result<()>;

    fn gpio_direction_input(&mut self, gpio: u32) -> Result<()>;

    /// Apply a pin table to the Nomadik pin controller.
    fn config_pins(&mut self, pins: &'static [PinCfg]) -> Result<()>;
}

/// Claim `gpio` and drive it to `value`.
///
/// Failures are logged here and returned.
pub fn request_output(ctl: &mut dyn GpioController, gpio: u32, label: &'static str, value: bool) -> Result<()> {
    ctl.gpio_request(gpio, label).map_err(|err| {
        error!("{}: failed to request GPIO{}: {}", label, gpio, err);
        err
    })?;
    ctl.gpio_direction_output(gpio, value).map_err(|err| {
        error!("{}: failed to set GPIO{} as output: {}", label, gpio, err);
        err
    })
}

/// Claim `gpio` as an input.
pub fn request_input(ctl: &mut dyn GpioController, gpio: u32, label: &'static str) -> Result<()> {
    ctl.gpio_request(gpio, label).map_err(|err| {
        error!("{}: failed to request GPIO{}: {}", label, gpio, err);
        err
    })?;
    ctl.gpio_direction_input(gpio).map_err(|err| {
        error!("{}: failed to set GPIO{} as input: {}", label, gpio, err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{RecordingRegistrar, Registration};
    use crate::error::ErrorKind;

    #[test]
    fn input_is_claimed_and_configured() {
        let mut reg = RecordingRegistrar::new();
        request_input(&mut reg, 95, "SENSOR_INT").unwrap();
        assert!(reg.is_claimed(95));
        assert!(matches!(
            reg.events(),
            [
                Registration::GpioRequest { gpio: 95, label: "SENSOR_INT" },
                Registration::GpioInput { gpio: 95 }
            ]
        ));
    }

    #[test]
    fn output_drives_level() {
        let mut reg = RecordingRegistrar::new();
        request_output(&mut reg, 64, "LCD_RESET", true).unwrap();
        assert_eq!(reg.gpio_level(64), Some(true));
    }

    #[test]
    fn second_claim_is_refused() {
        let mut reg = RecordingRegistrar::new();
        request_output(&mut reg, 64, "LCD_RESET", true).unwrap();
        let err = request_input(&mut reg, 64, "LCD_DET").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        let err = request_output(&mut reg, 64, "LCD_RESET", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(reg.gpio_level(64), Some(true));
    }

    #[test]
    fn direction_failure_keeps_line_claimed() {
        let mut reg = RecordingRegistrar::new().fail_gpio_direction(64).fail_gpio_direction(95);
        let err = request_output(&mut reg, 64, "LCD_RESET", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(reg.is_claimed(64));
        assert_eq!(reg.gpio_level(64), None);

        let err = request_input(&mut reg, 95, "SENSOR_INT").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(reg.is_claimed(95));
        assert!(!reg.events().iter().any(|e| matches!(e, Registration::GpioInput { .. })));
    }

    #[test]
    fn request_failure_skips_direction() {
        let mut reg = RecordingRegistrar::new().fail_gpio(64);
        assert_eq!(request_output(&mut reg, 64, "LCD_RESET", true).unwrap_err().kind(), ErrorKind::Io);
        assert!(reg.events().is_empty());
    }
}
