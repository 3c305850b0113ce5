// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
use log::{error, info, warn};
use ux500_boards::{
    board::{check, default_machine, find_machine, machines, select_by_revision, MachineDesc},
    init_machine, BootContext, BootParams, RecordingRegistrar,
};

use crate::{
    config::CliConfig,
    report::{BootRecord, FindingRecord},
    util::join_numbers,
};

/// Resolve the machine from the argument, then the config, then the build default.
pub fn resolve_machine(name: Option<&str>, config: &CliConfig) -> Result<&'static MachineDesc, String> {
    match name.or(config.machine.as_deref()) {
        Some(name) => find_machine(name).ok_or_else(|| {
            let known: Vec<&str> = machines().iter().map(|desc| desc.name).collect();
            format!("Unknown machine {}, known: {}", name, known.join(", "))
        }),
        None => default_machine().ok_or_else(|| String::from("No machine built in")),
    }
}

pub fn machine_list() {
    println!("{:<10} {:<24} {:<10} {:<7} {}", "NAME", "MACHINE", "MODEL", "PMIC", "REVISIONS");
    for desc in machines() {
        let revs: Vec<&str> = desc.board_ids.iter().map(|entry| entry.name).collect();
        println!(
            "{:<10} {:<24} {:<10} {:<7} {}",
            desc.name,
            desc.machine_name,
            desc.model,
            format!("{:?}", desc.pmic),
            revs.join(" ")
        );
    }
}

pub fn machine_show(desc: &'static MachineDesc, cmdline: &str) {
    let ctx = BootContext::new(desc, BootParams::parse(cmdline));
    println!("machine:   {} ({}, {})", desc.machine_name, desc.name, desc.model);
    println!(
        "revision:  {} ({}){}",
        ctx.rev_name(),
        ctx.system_rev,
        if ctx.rev_fallback { " [fallback]" } else { "" }
    );
    println!("board ids:");
    for entry in desc.board_ids {
        println!("  {:#06x} => {}", entry.board_id, entry.name);
    }

    match ctx.pins() {
        Some(pins) => println!("pins:      {} active, {} sleep", pins.active.len(), pins.sleep.len()),
        None => println!("pins:      none"),
    }
    if let Some(pdata) = ctx.ab8500() {
        println!(
            "pmic:      {} with {} regulators, {} reg inits, battery types {}",
            desc.pmic.core_name(),
            pdata.regulator.regulators.len(),
            pdata.regulator.reg_init.len(),
            pdata.battery.bat_type.len()
        );
        println!("ab gpio:   config {:02x?}", pdata.gpio.config_reg);
    }
    println!("platform:");
    for dev in ctx.platform_devices() {
        println!("  {}.{}", dev.name, dev.id);
    }
    for dev in ctx.spi_devices() {
        println!("spi{}.{}:    {} @ {} Hz", dev.bus_num, dev.chip_select, dev.modalias, dev.max_speed_hz);
    }
    for bus in ctx.i2c_buses() {
        println!("i2c-{}:", bus.bus);
        for dev in bus.devices {
            println!("  {:#04x} {} irq {}", dev.addr, dev.type_name, join_numbers(dev.irq));
        }
    }
    // Tables that only exist on later revisions.
    let later: Vec<&str> = desc
        .board_ids
        .iter()
        .filter(|entry| entry.rev > ctx.system_rev)
        .filter(|entry| {
            select_by_revision(desc.i2c, entry.rev).map(|t| t.as_ptr())
                != select_by_revision(desc.i2c, ctx.system_rev).map(|t| t.as_ptr())
        })
        .map(|entry| entry.name)
        .collect();
    if !later.is_empty() {
        println!("i2c changes in: {}", later.join(" "));
    }
}

pub fn machine_boot(desc: &'static MachineDesc, cmdline: &str, json: bool) -> Result<(), String> {
    let ctx = BootContext::new(desc, BootParams::parse(cmdline));
    let mut reg = RecordingRegistrar::new();
    let report = init_machine(&ctx, &mut reg);
    let record = BootRecord::new(&ctx, &report, reg.events());

    if json {
        let out = serde_json::to_string_pretty(&record).map_err(|err| format!("Serialize err: {}", err))?;
        println!("{}", out);
    } else {
        println!("{} {} ({})", record.machine, record.revision, record.model);
        for (index, event) in record.events.iter().enumerate() {
            println!("{:>3} {}", index, event);
        }
        for failure in &record.failures {
            warn!("{} {} failed: {}", failure.step, failure.target, failure.error);
        }
    }
    info!("{}: {} steps completed, {} failed", desc.name, report.completed, report.failures.len());
    if report.is_clean() {
        Ok(())
    } else {
        Err(format!("{} init steps failed", report.failures.len()))
    }
}

pub fn machine_check(desc: Option<&'static MachineDesc>, json: bool) -> Result<(), String> {
    let findings = match desc {
        Some(desc) => check::check_machine(desc),
        None => check::check_all(),
    };
    if json {
        let records: Vec<FindingRecord> = findings.iter().map(FindingRecord::from).collect();
        let out = serde_json::to_string_pretty(&records).map_err(|err| format!("Serialize err: {}", err))?;
        println!("{}", out);
    } else {
        for finding in &findings {
            let rev = finding.rev.map_or(String::from("-"), |rev| rev.to_string());
            println!("{:<10} {:<6} {:?}: {}", finding.machine, rev, finding.kind, finding.detail);
        }
    }
    if findings.is_empty() {
        info!("board tables are consistent");
        Ok(())
    } else {
        error!("{} findings", findings.len());
        Err(format!("{} findings", findings.len()))
    }
}

pub fn cmdline_show(cmdline: &str) {
    let params = BootParams::parse(cmdline);
    match params.board_id {
        Some(board_id) => println!("board_id:     {:#06x}", board_id),
        None => println!("board_id:     -"),
    }
    println!("sec_debug:    {:?} (enabled: {})", params.sec_debug, params.debug_enabled());
    println!("jig_smd:      {}", params.jig_smd);
    println!("lpm_boot:     {}", params.lpm_boot);
    println!("hats_flag:    {}", params.hats_flag);
    match params.ram_console {
        Some(region) => println!("ram_console:  {:#x} + {:#x}", region.base, region.size),
        None => println!("ram_console:  -"),
    }
    println!("unknown:      {}", params.unknown);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_resolution_order() {
        let config = CliConfig {
            machine: Some(String::from("codina")),
            ..Default::default()
        };
        assert_eq!(resolve_machine(Some("janice"), &config).unwrap().name, "janice");
        assert_eq!(resolve_machine(None, &config).unwrap().name, "codina");
        assert_eq!(resolve_machine(None, &CliConfig::default()).unwrap().name, "golden");
        assert!(resolve_machine(Some("tx2"), &config).unwrap_err().contains("kyle"));
    }

    #[test]
    fn boot_and_check_succeed_on_shipped_tables() {
        for desc in machines() {
            let cmdline = format!("board_id={:#06x}", desc.board_ids[0].board_id);
            assert_eq!(machine_boot(desc, &cmdline, true), Ok(()));
        }
        assert_eq!(machine_check(None, false), Ok(()));
    }
}
