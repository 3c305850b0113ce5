// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Board support for ST-Ericsson U8500/U9540 based Samsung handsets.
//! The introduces of all modules are showed below:
//! * [board]: The machines (Codina, Gavini, Golden, Janice, Kyle, CCU9540), board revision dispatch,
//!   the machine init sequence and the integrity checks over the board tables.
//! * [config]: The boot parameters parsed from the kernel command line.
//! * [device]: The hardware description types: regulators, AB8500-family PMIC data, pin mux,
//!   I2C/SPI board info, platform devices and battery parameters.
//! * [driver]: Log-and-continue GPIO helpers used by the board setup hooks.
//! * [kernel]: The boot logger.
//! * [utils]: The console sink behind `print!`/`println!`.
//! * [macros]: Defines the macros for the crate.
//! * error: Defines the error type for the crate.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::module_inception)]

#[macro_use]
extern crate alloc;
#[macro_use]
extern crate log;

#[macro_use]
pub mod macros;

pub mod board;
pub mod config;
pub mod device;
pub mod driver;
pub mod error;
pub mod kernel;
pub mod utils;

pub use board::{
    board_id_setup, boot_context, boot_context_init, enter_sleep, exit_sleep, find_machine, init_machine, machines,
    BootContext, InitReport, MachineDesc, Registrar, RecordingRegistrar, SystemRev,
};
pub use config::BootParams;
pub use error::{Error, ErrorKind, Result};
