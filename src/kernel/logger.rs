// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
//! Boot log sink: every record goes to the console registered with
//! [`crate::utils::set_console`], tagged with the machine revision once the
//! boot context is published.

use core::fmt::{self, Write};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::board::{boot_context, BootContext};

struct BootLogger;

fn level2color(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 34,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}

/// Write one log line, without colour or trailing newline.
fn write_record(
    out: &mut dyn Write,
    ctx: Option<&BootContext>,
    level: Level,
    target: &str,
    args: fmt::Arguments,
) -> fmt::Result {
    write!(out, "{}", level_tag(level))?;
    if let Some(ctx) = ctx {
        write!(out, " {}/{}", ctx.machine.name, ctx.rev_name())?;
    }
    write!(out, " {}: {}", target, args)
}

struct Colored<'a>(&'a Record<'a>, Option<&'a BootContext>);

impl fmt::Display for Colored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let record = self.0;
        write!(f, "\u{1B}[{}m", level2color(record.level()))?;
        write_record(f, self.1, record.level(), record.target(), *record.args())?;
        write!(f, "\u{1B}[0m")
    }
}

impl log::Log for BootLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            crate::println!("{}", Colored(record, boot_context()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: BootLogger = BootLogger;

/// Install the boot logger with `level` as the maximum level.
pub fn logger_init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::find_machine;
    use crate::config::BootParams;

    fn line(ctx: Option<&BootContext>, level: Level) -> String {
        let mut out = String::new();
        write_record(&mut out, ctx, level, "ux500", format_args!("gpio {}", 94)).unwrap();
        out
    }

    #[test]
    fn record_without_context() {
        assert_eq!(line(None, Level::Error), "[E] ux500: gpio 94");
    }

    #[test]
    fn record_tagged_with_revision() {
        let machine = find_machine("codina").unwrap();
        let ctx = BootContext::new(machine, BootParams::parse("board_id=0x0105"));
        assert_eq!(line(Some(&ctx), Level::Warn), "[W] codina/CODINA_R0_4 ux500: gpio 94");
    }

    #[test]
    fn every_level_has_a_color() {
        let levels = [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace];
        let mut colors: Vec<u8> = levels.iter().map(|l| level2color(*l)).collect();
        colors.dedup();
        assert_eq!(colors.len(), levels.len());
    }
}
