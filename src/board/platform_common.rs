// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use spin::Once;

use crate::config::BootParams;
use crate::device::{
    Ab8500PlatformData, BoardPins, Db8500Device, I2cBoardInfo, I2cBusDevices, PinCfg, PlatformDevice, Pmic,
    SpiBoardInfo,
};
use crate::driver::gpio::{request_output, GpioController};
use crate::error::{ErrorKind, Result};

/// PCB revision of a board, as `system_rev`. Revisions of one machine are
/// ordered, so later boards are selected with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemRev(pub u32);

impl fmt::Display for SystemRev {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// One documented `board_id=` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardIdEntry {
    pub board_id: u32,
    pub rev: SystemRev,
    pub name: &'static str,
}

/// Table variants keyed by the first revision they apply to, in ascending order.
pub type RevisionTable<T> = &'static [(SystemRev, T)];

/// Board hook run last in the init sequence; it only touches GPIO lines and
/// records each line it claims in the report.
pub type BoardSetupFn = fn(&BootContext, &mut dyn GpioController, &mut InitReport);

/// Static description of one machine and all of its revisions.
pub struct MachineDesc {
    /// Short name used for lookup, e.g. `golden`.
    pub name: &'static str,
    /// Name reported by the machine record, e.g. `SAMSUNG GOLDEN`.
    pub machine_name: &'static str,
    pub model: &'static str,
    pub pmic: Pmic,
    pub board_ids: &'static [BoardIdEntry],
    pub pins: RevisionTable<BoardPins>,
    pub ab8500: RevisionTable<&'static Ab8500PlatformData>,
    pub db8500_devices: &'static [Db8500Device],
    pub platform_devices: RevisionTable<&'static [PlatformDevice]>,
    pub spi: RevisionTable<&'static [SpiBoardInfo]>,
    pub i2c: RevisionTable<&'static [I2cBusDevices]>,
    pub board_setup: Option<BoardSetupFn>,
}

impl fmt::Debug for MachineDesc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MachineDesc")
            .field("name", &self.name)
            .field("machine_name", &self.machine_name)
            .field("pmic", &self.pmic)
            .finish_non_exhaustive()
    }
}

impl MachineDesc {
    /// The oldest documented revision, used when the board id is unusable.
    pub fn lowest_rev(&self) -> SystemRev {
        self.board_ids
            .iter()
            .map(|entry| entry.rev)
            .min()
            .unwrap_or(SystemRev(0))
    }

    pub fn rev_name(&self, rev: SystemRev) -> Option<&'static str> {
        self.board_ids.iter().find(|entry| entry.rev == rev).map(|entry| entry.name)
    }
}

/// Pick the variant with the greatest starting revision not above `rev`.
pub fn select_by_revision<T>(table: &[(SystemRev, T)], rev: SystemRev) -> Option<&T> {
    table
        .iter()
        .filter(|(first, _)| *first <= rev)
        .max_by_key(|(first, _)| *first)
        .map(|(_, variant)| variant)
}

/// Map a `board_id=` value to the machine's revision.
pub fn board_id_setup(machine: &MachineDesc, board_id: u32) -> Result<SystemRev> {
    match machine.board_ids.iter().find(|entry| entry.board_id == board_id) {
        Some(entry) => {
            info!("{}: board_id {:#06x} is {}", machine.name, board_id, entry.name);
            Ok(entry.rev)
        }
        None => ErrorKind::NotFound.into(),
    }
}

/// The machine, its revision and the boot parameters, fixed for the whole boot.
#[derive(Debug, Clone, Copy)]
pub struct BootContext {
    pub machine: &'static MachineDesc,
    pub system_rev: SystemRev,
    pub params: BootParams,
    /// `system_rev` is the fallback, not derived from a documented board id.
    pub rev_fallback: bool,
}

impl BootContext {
    pub fn new(machine: &'static MachineDesc, params: BootParams) -> Self {
        let resolved = match params.board_id {
            Some(board_id) => match board_id_setup(machine, board_id) {
                Ok(rev) => Some(rev),
                Err(_) => {
                    warn!("{}: unknown board_id {:#06x}", machine.name, board_id);
                    None
                }
            },
            None => {
                warn!("{}: no board_id on the command line", machine.name);
                None
            }
        };
        let rev_fallback = resolved.is_none();
        let system_rev = resolved.unwrap_or_else(|| {
            let rev = machine.lowest_rev();
            warn!("{}: falling back to revision {}", machine.name, rev);
            rev
        });
        Self {
            machine,
            system_rev,
            params,
            rev_fallback,
        }
    }

    pub fn rev_name(&self) -> &'static str {
        self.machine.rev_name(self.system_rev).unwrap_or("unknown")
    }

    pub fn pins(&self) -> Option<&'static BoardPins> {
        select_by_revision(self.machine.pins, self.system_rev)
    }

    pub fn ab8500(&self) -> Option<&'static Ab8500PlatformData> {
        select_by_revision(self.machine.ab8500, self.system_rev).copied()
    }

    pub fn platform_devices(&self) -> &'static [PlatformDevice] {
        select_by_revision(self.machine.platform_devices, self.system_rev)
            .copied()
            .unwrap_or(&[])
    }

    pub fn spi_devices(&self) -> &'static [SpiBoardInfo] {
        select_by_revision(self.machine.spi, self.system_rev).copied().unwrap_or(&[])
    }

    pub fn i2c_buses(&self) -> &'static [I2cBusDevices] {
        select_by_revision(self.machine.i2c, self.system_rev).copied().unwrap_or(&[])
    }

    /// Devices registered on I2C bus `bus` for this revision.
    pub fn i2c_devices(&self, bus: u8) -> impl Iterator<Item = &'static I2cBoardInfo> {
        self.i2c_buses()
            .iter()
            .filter(move |entry| entry.bus == bus)
            .flat_map(|entry| entry.devices.iter())
    }
}

static BOOT_CONTEXT: Once<BootContext> = Once::new();

/// Publish the boot context. Later calls keep the first context.
pub fn boot_context_init(ctx: BootContext) -> &'static BootContext {
    if BOOT_CONTEXT.is_completed() {
        warn!("boot context already set, keeping {}", BOOT_CONTEXT.get().map_or("?", |c| c.machine.name));
    }
    BOOT_CONTEXT.call_once(|| ctx)
}

pub fn boot_context() -> Option<&'static BootContext> {
    BOOT_CONTEXT.get()
}

/// The driver-model entry points machine init registers with.
pub trait Registrar: GpioController {
    fn reserve_memory(&mut self, base: u64, size: u64) -> Result<()>;

    /// Remember the pin table to apply on suspend.
    fn set_sleep_pins(&mut self, pins: &'static [PinCfg]) -> Result<()>;

    fn register_pmic(&mut self, pmic: Pmic, pdata: &'static Ab8500PlatformData) -> Result<()>;

    fn add_db8500_device(&mut self, dev: &'static Db8500Device) -> Result<()>;

    fn register_platform_device(&mut self, dev: &'static PlatformDevice) -> Result<()>;

    fn register_spi_board_info(&mut self, info: &'static [SpiBoardInfo]) -> Result<()>;

    fn register_i2c_board_info(&mut self, bus: u8, info: &'static [I2cBoardInfo]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    ReserveMemory,
    Pins,
    SleepPins,
    Pmic,
    Db8500,
    PlatformDevice,
    Spi,
    I2c,
    BoardSetup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitFailure {
    pub step: InitStep,
    pub target: String,
    pub kind: ErrorKind,
}

/// Outcome of [`init_machine`]: failed steps were logged and skipped.
#[derive(Debug, Default)]
pub struct InitReport {
    pub completed: usize,
    pub failures: Vec<InitFailure>,
}

impl InitReport {
    pub fn record(&mut self, step: InitStep, target: &str, res: Result<()>) {
        match res {
            Ok(()) => {
                trace!("{:?} {}", step, target);
                self.completed += 1;
            }
            Err(err) => {
                error!("{:?} {} failed: {}", step, target, err);
                self.failures.push(InitFailure {
                    step,
                    target: String::from(target),
                    kind: err.kind(),
                });
            }
        }
    }

    /// Claim `gpio` as an output for the board setup step.
    pub fn setup_output(&mut self, ctl: &mut dyn GpioController, gpio: u32, label: &'static str, value: bool) {
        self.record(InitStep::BoardSetup, label, request_output(ctl, gpio, label, value));
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, step: InitStep, target: &str) -> bool {
        self.failures.iter().any(|f| f.step == step && f.target == target)
    }
}

/// Register everything the machine declares for the context's revision.
///
/// The order is fixed: RAM console reservation, pins, PMIC, SoC blocks,
/// platform devices, SPI, I2C, then the board's GPIO setup. A failing step
/// never stops the ones after it.
pub fn init_machine<R: Registrar>(ctx: &BootContext, reg: &mut R) -> InitReport {
    let machine = ctx.machine;
    info!(
        "{} ({}): init, revision {} ({})",
        machine.machine_name,
        machine.model,
        ctx.rev_name(),
        ctx.system_rev
    );
    let mut report = InitReport::default();

    if let Some(region) = ctx.params.ram_console {
        report.record(
            InitStep::ReserveMemory,
            "ram_console",
            reg.reserve_memory(region.base, region.size),
        );
    }

    match ctx.pins() {
        Some(pins) => {
            report.record(InitStep::Pins, "active", reg.config_pins(pins.active));
            report.record(InitStep::SleepPins, "sleep", reg.set_sleep_pins(pins.sleep));
        }
        None => report.record(InitStep::Pins, "active", ErrorKind::NotFound.into()),
    }

    match ctx.ab8500() {
        Some(pdata) => report.record(
            InitStep::Pmic,
            machine.pmic.core_name(),
            reg.register_pmic(machine.pmic, pdata),
        ),
        None => report.record(InitStep::Pmic, machine.pmic.core_name(), ErrorKind::NotFound.into()),
    }

    for dev in machine.db8500_devices {
        report.record(
            InitStep::Db8500,
            &format!("{}.{}", dev.name(), dev.id()),
            reg.add_db8500_device(dev),
        );
    }

    for dev in ctx.platform_devices() {
        report.record(InitStep::PlatformDevice, dev.name, reg.register_platform_device(dev));
    }

    let spi = ctx.spi_devices();
    if !spi.is_empty() {
        report.record(InitStep::Spi, "spi", reg.register_spi_board_info(spi));
    }

    for bus in ctx.i2c_buses() {
        report.record(
            InitStep::I2c,
            &format!("i2c-{}", bus.bus),
            reg.register_i2c_board_info(bus.bus, bus.devices),
        );
    }

    if let Some(setup) = machine.board_setup {
        setup(ctx, reg, &mut report);
    }

    info!(
        "{}: init done, {} registered, {} failed",
        machine.name,
        report.completed,
        report.failures.len()
    );
    report
}

/// Switch the pins to the sleep table of the context's revision.
pub fn enter_sleep(ctx: &BootContext, gpio: &mut dyn GpioController) -> Result<()> {
    let pins = ctx.pins().ok_or(ErrorKind::NotFound)?;
    gpio.config_pins(pins.sleep)
}

/// Restore the active pin table after resume.
pub fn exit_sleep(ctx: &BootContext, gpio: &mut dyn GpioController) -> Result<()> {
    let pins = ctx.pins().ok_or(ErrorKind::NotFound)?;
    gpio.config_pins(pins.active)
}
