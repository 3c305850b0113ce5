// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Hardware description types shared by all boards.

pub use self::ab8500::*;
pub use self::battery::*;
pub use self::bus::*;
pub use self::pinmux::{concat_pins, Alt, BoardPins, PinCfg, Pull, PIN_MAX};
pub use self::platform_device::*;
pub use self::regulator::*;

pub mod ab8500;
pub mod battery;
pub mod bus;
pub mod pinmux;
pub mod platform_device;
pub mod regulator;
