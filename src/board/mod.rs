// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Board-specific configuration

pub use self::platform_common::*;
pub use self::recorder::{RecordingRegistrar, Registration};

pub mod check;
mod common;
mod platform_common;
mod recorder;

#[cfg(feature = "ccu9540")]
pub mod ccu9540;
#[cfg(feature = "codina")]
pub mod codina;
#[cfg(feature = "gavini")]
pub mod gavini;
#[cfg(feature = "golden")]
pub mod golden;
#[cfg(feature = "janice")]
pub mod janice;
#[cfg(feature = "kyle")]
pub mod kyle;

static MACHINES: &[&MachineDesc] = &[
    #[cfg(feature = "codina")]
    &codina::MACHINE,
    #[cfg(feature = "gavini")]
    &gavini::MACHINE,
    #[cfg(feature = "golden")]
    &golden::MACHINE,
    #[cfg(feature = "janice")]
    &janice::MACHINE,
    #[cfg(feature = "kyle")]
    &kyle::MACHINE,
    #[cfg(feature = "ccu9540")]
    &ccu9540::MACHINE,
];

/// Every machine built into this configuration.
pub fn machines() -> &'static [&'static MachineDesc] {
    MACHINES
}

/// Look a machine up by short name or machine name, ignoring case.
pub fn find_machine(name: &str) -> Option<&'static MachineDesc> {
    MACHINES
        .iter()
        .copied()
        .find(|desc| desc.name.eq_ignore_ascii_case(name) || desc.machine_name.eq_ignore_ascii_case(name))
}

cfg_if::cfg_if! {
    if #[cfg(feature = "golden")] {
        /// The machine used when none is named.
        pub fn default_machine() -> Option<&'static MachineDesc> {
            Some(&golden::MACHINE)
        }
    } else {
        /// The machine used when none is named.
        pub fn default_machine() -> Option<&'static MachineDesc> {
            MACHINES.first().copied()
        }
    }
}

/// Parse `cmdline`, publish the boot context and run the machine init.
pub fn machine_boot<R: Registrar>(
    machine: &'static MachineDesc,
    cmdline: &str,
    reg: &mut R,
) -> (&'static BootContext, InitReport) {
    let params = crate::config::BootParams::parse(cmdline);
    let ctx = boot_context_init(BootContext::new(machine, params));
    let report = init_machine(ctx, reg);
    (ctx, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootParams;
    use crate::error::ErrorKind;

    fn first_machine() -> &'static MachineDesc {
        machines()[0]
    }

    #[test]
    fn revision_selection_picks_latest_applicable() {
        let table = [(SystemRev(0), 'a'), (SystemRev(2), 'b'), (SystemRev(4), 'c')];
        assert_eq!(select_by_revision(&table, SystemRev(0)), Some(&'a'));
        assert_eq!(select_by_revision(&table, SystemRev(1)), Some(&'a'));
        assert_eq!(select_by_revision(&table, SystemRev(3)), Some(&'b'));
        assert_eq!(select_by_revision(&table, SystemRev(9)), Some(&'c'));
        assert_eq!(select_by_revision(&table[1..], SystemRev(1)), None);
    }

    #[test]
    fn lookup_by_either_name() {
        for desc in machines() {
            assert!(core::ptr::eq(find_machine(desc.name).unwrap(), *desc));
            assert!(core::ptr::eq(find_machine(desc.machine_name).unwrap(), *desc));
        }
        assert!(find_machine("GOLDEN").is_some());
        assert!(find_machine("nosuchboard").is_none());
        assert!(default_machine().is_some());
    }

    #[test]
    fn every_documented_board_id_resolves() {
        for desc in machines() {
            for entry in desc.board_ids {
                assert_eq!(board_id_setup(desc, entry.board_id).unwrap(), entry.rev);
                assert_eq!(desc.rev_name(entry.rev), Some(entry.name));
            }
            assert_eq!(
                board_id_setup(desc, 0xdead).unwrap_err().kind(),
                ErrorKind::NotFound
            );
        }
    }

    #[test]
    fn unknown_board_id_falls_back_to_lowest_revision() {
        let desc = first_machine();
        let ctx = BootContext::new(desc, BootParams::parse("board_id=0x7777"));
        assert!(ctx.rev_fallback);
        assert_eq!(ctx.system_rev, desc.lowest_rev());

        let missing = BootContext::new(desc, BootParams::parse("console=ttyAMA2,115200n8"));
        assert!(missing.rev_fallback);

        let entry = desc.board_ids[desc.board_ids.len() - 1];
        let known = BootContext::new(desc, BootParams::parse(&format!("board_id={}", entry.board_id)));
        assert!(!known.rev_fallback);
        assert_eq!(known.system_rev, entry.rev);
    }

    #[test]
    fn init_registers_in_fixed_order() {
        for desc in machines() {
            let entry = desc.board_ids[0];
            let ctx = BootContext::new(
                desc,
                BootParams::parse(&format!("board_id={:#x} mem_ram_console=1M", entry.board_id)),
            );
            let mut reg = RecordingRegistrar::new();
            let report = init_machine(&ctx, &mut reg);
            assert!(report.is_clean(), "{}: {:?}", desc.name, report.failures);

            let events = reg.events();
            assert!(matches!(events[0], Registration::ReserveMemory { size: 0x10_0000, .. }));
            assert!(matches!(events[1], Registration::Pins(_)));
            assert!(matches!(events[2], Registration::SleepPins(_)));
            assert!(matches!(events[3], Registration::Pmic { pmic, .. } if pmic == desc.pmic));

            let position = |pred: fn(&Registration) -> bool| events.iter().position(|e| pred(e)).unwrap();
            let pmic = position(|e| matches!(e, Registration::Pmic { .. }));
            let platform = position(|e| matches!(e, Registration::PlatformDevice(_)));
            let i2c = position(|e| matches!(e, Registration::I2c { .. }));
            assert!(pmic < platform && platform < i2c, "{}", desc.name);
        }
    }

    #[test]
    fn failed_gpio_does_not_stop_init() {
        for desc in machines() {
            let ctx = BootContext::new(desc, BootParams::default());
            let clean = {
                let mut reg = RecordingRegistrar::new();
                init_machine(&ctx, &mut reg);
                reg
            };
            let Some(gpio) = clean.events().iter().find_map(|e| match e {
                Registration::GpioRequest { gpio, .. } => Some(*gpio),
                _ => None,
            }) else {
                continue;
            };

            let mut reg = RecordingRegistrar::new().fail_gpio(gpio);
            let report = init_machine(&ctx, &mut reg);
            assert!(!reg.is_claimed(gpio));
            assert_eq!(
                reg.i2c_devices(2).len(),
                clean.i2c_devices(2).len(),
                "{}: i2c registration stopped",
                desc.name
            );
            let clean_completed = init_machine(&ctx, &mut RecordingRegistrar::new()).completed;
            assert_eq!(report.completed + 1, clean_completed, "{}", desc.name);
            assert_eq!(report.failures.len(), 1, "{}", desc.name);
            assert_eq!(report.failures[0].step, InitStep::BoardSetup);
            assert_eq!(report.failures[0].kind, ErrorKind::Io);
        }
    }

    #[test]
    fn second_init_is_not_idempotent() {
        let desc = first_machine();
        let ctx = BootContext::new(desc, BootParams::default());
        let mut reg = RecordingRegistrar::new();
        assert!(init_machine(&ctx, &mut reg).is_clean());
        let again = init_machine(&ctx, &mut reg);
        assert!(again
            .failures
            .iter()
            .any(|f| f.step == InitStep::PlatformDevice && f.kind == ErrorKind::AlreadyExists));
    }

    #[test]
    fn sleep_switches_pin_tables() {
        for desc in machines() {
            let ctx = BootContext::new(desc, BootParams::default());
            let pins = ctx.pins().unwrap();
            let mut reg = RecordingRegistrar::new();
            enter_sleep(&ctx, &mut reg).unwrap();
            exit_sleep(&ctx, &mut reg).unwrap();
            match reg.events() {
                [Registration::Pins(sleep), Registration::Pins(active)] => {
                    assert!(core::ptr::eq(*sleep, pins.sleep));
                    assert!(core::ptr::eq(*active, pins.active));
                }
                other => panic!("{}: unexpected {:?}", desc.name, other),
            }
        }
    }

    #[test]
    fn boot_context_is_published_once() {
        let desc = first_machine();
        let mut reg = RecordingRegistrar::new();
        let (ctx, _) = machine_boot(desc, "board_id=0x101", &mut reg);
        assert!(core::ptr::eq(boot_context().unwrap(), ctx));
        let again = boot_context_init(BootContext::new(desc, BootParams::parse("board_id=0x102")));
        assert!(core::ptr::eq(again, ctx));
    }
}
