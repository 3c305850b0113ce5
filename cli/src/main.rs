// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
mod config;
mod machine;
mod report;
mod util;

use std::process;

use clap::{Parser, Subcommand};
use log::error;

use config::load_config;
use machine::{cmdline_show, machine_boot, machine_check, machine_list, machine_show, resolve_machine};

#[derive(Parser)]
#[command(
    version,
    author,
    about,
    long_about = "Inspect and dry-run the U8500/U9540 Samsung board tables"
)]
struct CLI {
    /// cli config, in json format
    #[arg(short, long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    subcmd: CLISubCmd,
}

#[derive(Subcommand)]
enum CLISubCmd {
    /// machine subcommand
    Machine {
        #[command(subcommand)]
        subcmd: MachineSubCmd,
    },
    /// Run the machine init against a recording registrar
    Boot {
        machine: Option<String>,
        /// kernel command line, e.g. "board_id=0x0105 lpm_boot=1"
        #[arg(long)]
        cmdline: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Check the board tables for inconsistencies
    Check {
        machine: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show how a kernel command line is parsed
    Cmdline { text: String },
}

#[derive(Subcommand)]
enum MachineSubCmd {
    /// list the built-in machines
    List {},
    Show {
        machine: Option<String>,
        #[arg(long)]
        cmdline: Option<String>,
    },
}

fn exec(cli: CLI) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;
    match cli.subcmd {
        CLISubCmd::Machine { subcmd } => match subcmd {
            MachineSubCmd::List {} => machine_list(),
            MachineSubCmd::Show { machine, cmdline } => {
                let desc = resolve_machine(machine.as_deref(), &config)?;
                machine_show(desc, &config.cmdline(cmdline.as_deref()));
            }
        },
        CLISubCmd::Boot { machine, cmdline, json } => {
            let desc = resolve_machine(machine.as_deref(), &config)?;
            machine_boot(desc, &config.cmdline(cmdline.as_deref()), json)?;
        }
        CLISubCmd::Check { machine, json } => {
            let desc = match machine {
                Some(name) => Some(resolve_machine(Some(&name), &config)?),
                None => None,
            };
            machine_check(desc, json)?;
        }
        CLISubCmd::Cmdline { text } => cmdline_show(&text),
    }
    Ok(())
}

fn main() {
    // configure logger and set log level
    env_logger::Builder::new().filter_level(log::LevelFilter::Info).init();

    if let Err(err) = exec(CLI::parse()) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        CLI::command().debug_assert();
    }

    #[test]
    fn parses_boot_with_cmdline() {
        let cli = CLI::try_parse_from(["ux500-board", "boot", "golden", "--cmdline", "board_id=0x0105", "--json"]).unwrap();
        match cli.subcmd {
            CLISubCmd::Boot { machine, cmdline, json } => {
                assert_eq!(machine.as_deref(), Some("golden"));
                assert_eq!(cmdline.as_deref(), Some("board_id=0x0105"));
                assert!(json);
            }
            _ => panic!("expected boot"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = CLI::try_parse_from(["ux500-board", "machine", "list", "--config", "boards.json"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("boards.json"));
    }
}
