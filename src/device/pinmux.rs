// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Nomadik pin configuration words.
//!
//! A [`PinCfg`] packs everything the Nomadik GPIO/pin controller needs to know
//! about one pin into a `u32`: the pin number, which alternate function it is
//! routed to, its pull and direction while running, and what it should do
//! while the SoC is in sleep mode. Board tables are built with the `const fn`
//! builders below and stay `'static`.

use core::fmt;

use tock_registers::fields::Field;
use tock_registers::interfaces::Readable;
use tock_registers::register_bitfields;
use tock_registers::registers::InMemoryRegister;

register_bitfields! {u32,
    pub PIN_CFG [
        PIN OFFSET(0) NUMBITS(9) [],
        ALT OFFSET(9) NUMBITS(2) [
            Gpio = 0,
            A = 1,
            B = 2,
            C = 3
        ],
        PULL OFFSET(11) NUMBITS(2) [
            None = 0,
            Up = 1,
            Down = 2
        ],
        DIR OFFSET(14) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        VAL OFFSET(15) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        SLPM_PULL OFFSET(16) NUMBITS(2) [
            Unchanged = 0,
            None = 1,
            Up = 2,
            Down = 3
        ],
        SLPM_DIR OFFSET(18) NUMBITS(2) [
            Unchanged = 0,
            Input = 1,
            Output = 2
        ],
        SLPM_VAL OFFSET(20) NUMBITS(2) [
            Unchanged = 0,
            Low = 1,
            High = 2
        ],
        SLPM_PDIS OFFSET(22) NUMBITS(2) [
            Unchanged = 0,
            Disabled = 1,
            Enabled = 2
        ],
        SLPM_WAKEUP OFFSET(24) NUMBITS(2) [
            Unchanged = 0,
            Enable = 1,
            Disable = 2
        ]
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alt {
    Gpio = 0,
    A = 1,
    B = 2,
    C = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    None = 0,
    Up = 1,
    Down = 2,
}

/// Highest pin number on the DB8500/DB9540 GPIO banks.
pub const PIN_MAX: u32 = 267;

/// A packed pin configuration word.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PinCfg(u32);

impl PinCfg {
    const fn with(self, field: Field<u32, PIN_CFG::Register>, value: u32) -> Self {
        let cleared = self.0 & !(field.mask << field.shift);
        PinCfg(cleared | ((value & field.mask) << field.shift))
    }

    /// `pin` as a plain GPIO, input without pull.
    ///
    /// Panics for pins past [`PIN_MAX`], which fails the build for static tables.
    pub const fn gpio(pin: u32) -> Self {
        assert!(pin <= PIN_MAX, "GPIO number past the last bank");
        PinCfg(0).with(PIN_CFG::PIN, pin)
    }

    pub const fn from_raw(raw: u32) -> Self {
        PinCfg(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn alt(self, alt: Alt) -> Self {
        self.with(PIN_CFG::ALT, alt as u32)
    }

    pub const fn input(self, pull: Pull) -> Self {
        self.with(PIN_CFG::DIR, 0).with(PIN_CFG::PULL, pull as u32)
    }

    pub const fn output(self, high: bool) -> Self {
        self.with(PIN_CFG::DIR, 1)
            .with(PIN_CFG::PULL, 0)
            .with(PIN_CFG::VAL, high as u32)
    }

    pub const fn output_low(self) -> Self {
        self.output(false)
    }

    pub const fn output_high(self) -> Self {
        self.output(true)
    }

    /// In sleep mode, make the pin an input with `pull`.
    pub const fn slpm_input(self, pull: Pull) -> Self {
        self.with(PIN_CFG::SLPM_DIR, 1).with(PIN_CFG::SLPM_PULL, pull as u32 + 1)
    }

    /// In sleep mode, drive the pin.
    pub const fn slpm_output(self, high: bool) -> Self {
        self.with(PIN_CFG::SLPM_DIR, 2)
            .with(PIN_CFG::SLPM_PULL, 1)
            .with(PIN_CFG::SLPM_VAL, high as u32 + 1)
    }

    pub const fn slpm_output_low(self) -> Self {
        self.slpm_output(false)
    }

    pub const fn slpm_output_high(self) -> Self {
        self.slpm_output(true)
    }

    /// Keep the pull enabled in sleep mode.
    pub const fn slpm_pdis_disabled(self) -> Self {
        self.with(PIN_CFG::SLPM_PDIS, 1)
    }

    pub const fn slpm_pdis_enabled(self) -> Self {
        self.with(PIN_CFG::SLPM_PDIS, 2)
    }

    pub const fn slpm_wakeup_enable(self) -> Self {
        self.with(PIN_CFG::SLPM_WAKEUP, 1)
    }

    pub const fn slpm_wakeup_disable(self) -> Self {
        self.with(PIN_CFG::SLPM_WAKEUP, 2)
    }

    fn reg(&self) -> InMemoryRegister<u32, PIN_CFG::Register> {
        InMemoryRegister::new(self.0)
    }

    pub fn pin(&self) -> u32 {
        self.reg().read(PIN_CFG::PIN)
    }

    pub fn alt_function(&self) -> Alt {
        match self.reg().read_as_enum(PIN_CFG::ALT) {
            Some(PIN_CFG::ALT::Value::A) => Alt::A,
            Some(PIN_CFG::ALT::Value::B) => Alt::B,
            Some(PIN_CFG::ALT::Value::C) => Alt::C,
            _ => Alt::Gpio,
        }
    }

    /// Pull while running; `None` for outputs.
    pub fn pull(&self) -> Pull {
        match self.reg().read_as_enum(PIN_CFG::PULL) {
            Some(PIN_CFG::PULL::Value::Up) => Pull::Up,
            Some(PIN_CFG::PULL::Value::Down) => Pull::Down,
            _ => Pull::None,
        }
    }

    pub fn is_output(&self) -> bool {
        self.reg().is_set(PIN_CFG::DIR)
    }

    /// Level driven while running, if the pin is an output.
    pub fn output_level(&self) -> Option<bool> {
        self.is_output().then(|| self.reg().is_set(PIN_CFG::VAL))
    }

    /// True when any sleep-mode field is set.
    pub fn has_sleep_config(&self) -> bool {
        self.reg().read(PIN_CFG::SLPM_DIR) != 0
            || self.reg().read(PIN_CFG::SLPM_PDIS) != 0
            || self.reg().read(PIN_CFG::SLPM_WAKEUP) != 0
    }

    /// Two entries for the same pin that route or drive it differently.
    pub fn conflicts_with(&self, other: &PinCfg) -> bool {
        self.pin() == other.pin()
            && (self.alt_function() != other.alt_function()
                || self.is_output() != other.is_output()
                || self.output_level() != other.output_level()
                || self.pull() != other.pull())
    }
}

impl fmt::Debug for PinCfg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PinCfg({:#010x}: {})", self.0, self)
    }
}

impl fmt::Display for PinCfg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GPIO{} {:?}", self.pin(), self.alt_function())?;
        match self.output_level() {
            Some(true) => write!(f, " out-high"),
            Some(false) => write!(f, " out-low"),
            None => write!(f, " in-{:?}", self.pull()),
        }
    }
}

/// Join two pin tables into one, for revisions that add lines to an
/// earlier table. `N` must be `A + B`.
pub const fn concat_pins<const A: usize, const B: usize, const N: usize>(
    head: [PinCfg; A],
    tail: [PinCfg; B],
) -> [PinCfg; N] {
    assert!(A + B == N, "pin table length mismatch");
    let mut out = [PinCfg(0); N];
    let mut i = 0;
    while i < A {
        out[i] = head[i];
        i += 1;
    }
    let mut j = 0;
    while j < B {
        out[A + j] = tail[j];
        j += 1;
    }
    out
}

/// The pin tables of one board revision.
#[derive(Debug, Clone, Copy)]
pub struct BoardPins {
    /// Applied once during machine init.
    pub active: &'static [PinCfg],
    /// Applied on suspend, replaced by `active` again on resume.
    pub sleep: &'static [PinCfg],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_round_trip_through_bitfields() {
        let cfg = PinCfg::gpio(168).alt(Alt::B).input(Pull::Up);
        assert_eq!(cfg.pin(), 168);
        assert_eq!(cfg.alt_function(), Alt::B);
        assert_eq!(cfg.pull(), Pull::Up);
        assert!(!cfg.is_output());
        assert_eq!(cfg.output_level(), None);
    }

    #[test]
    fn output_clears_pull() {
        let cfg = PinCfg::gpio(21).input(Pull::Down).output_high();
        assert_eq!(cfg.pull(), Pull::None);
        assert_eq!(cfg.output_level(), Some(true));
        assert_eq!(format!("{}", cfg), "GPIO21 Gpio out-high");
    }

    #[test]
    fn sleep_fields_do_not_touch_active_fields() {
        let active = PinCfg::gpio(0).alt(Alt::A).input(Pull::Up);
        let with_sleep = active.slpm_output_low().slpm_pdis_disabled().slpm_wakeup_enable();
        assert!(!active.has_sleep_config());
        assert!(with_sleep.has_sleep_config());
        assert!(!active.conflicts_with(&with_sleep));
        assert_eq!(with_sleep.alt_function(), Alt::A);
    }

    #[test]
    fn different_function_conflicts() {
        let a = PinCfg::gpio(4).alt(Alt::A);
        let gpio = PinCfg::gpio(4).output_low();
        let other_pin = PinCfg::gpio(5).alt(Alt::A);
        assert!(a.conflicts_with(&gpio));
        assert!(!a.conflicts_with(&other_pin));
    }

    #[test]
    fn last_pin_is_accepted() {
        assert_eq!(PinCfg::gpio(PIN_MAX).pin(), PIN_MAX);
    }

    #[test]
    #[should_panic(expected = "GPIO number past the last bank")]
    fn pin_past_last_bank_is_rejected() {
        let _ = PinCfg::gpio(core::hint::black_box(0x200 | 3));
    }

    #[test]
    fn concat_keeps_order() {
        const HEAD: [PinCfg; 2] = [PinCfg::gpio(1).output_low(), PinCfg::gpio(2).input(Pull::Up)];
        const JOINED: [PinCfg; 3] = concat_pins(HEAD, [PinCfg::gpio(9).output_high()]);
        assert_eq!(JOINED[..2], HEAD);
        assert_eq!(JOINED[2].pin(), 9);
        assert_eq!(JOINED[2].output_level(), Some(true));
    }
}
