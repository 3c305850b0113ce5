// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

/// A macro for formatted printing to the registered console.
///
/// This macro redirects the output to the console sink set with
/// [`crate::utils::set_console`]. Without a sink the output is dropped.
///
/// ```
/// # use ux500_boards::print;
/// print!("Hello, {}!", "world");
/// ```
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::utils::_print(format_args!($($arg)*)));
}

/// A macro for formatted printing with a newline.
///
/// ```
/// # use ux500_boards::println;
/// println!("Hello, {}!", "world");
/// ```
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

/// A macro for declaring an enum of boot parameters with their setup hooks.
///
/// Each variant carries the command-line key it answers to. The macro generates
/// the enum and a static table pairing every key with its variant and handler,
/// in declaration order.
///
/// ```
/// # use ux500_boards::declare_setup_hooks;
/// fn set_quiet(_value: &str, _out: &mut bool) -> ux500_boards::Result<()> { Ok(()) }
///
/// declare_setup_hooks! {
///     /// An example parameter set.
///     pub enum Param [pub PARAM_HOOKS => fn(&str, &mut bool) -> ux500_boards::Result<()>] {
///         Quiet("quiet=") => set_quiet,
///     }
/// }
/// assert_eq!(PARAM_HOOKS[0].0, "quiet=");
/// ```
#[macro_export]
macro_rules! declare_setup_hooks {
    (
        $(#[$attr:meta])*
        $enum_vis:vis enum $enum_name:ident [$array_vis:vis $array:ident => $handler_type:ty] {
            $($variant:ident ($key:literal) => $handler:expr, )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $enum_vis enum $enum_name {
            $($variant, )*
        }
        $array_vis static $array: &[(&str, $enum_name, $handler_type)] = &[
            $(($key, $enum_name::$variant, $handler), )*
        ];
    }
}

/// Declares the board-id table of a machine.
///
/// Every line maps a numeric id, as passed with `board_id=`, to a revision
/// constant. The revision's name is taken from the constant identifier.
#[macro_export]
macro_rules! board_id_table {
    ($vis:vis $name:ident { $($id:expr => $rev:ident, )* }) => {
        $vis const $name: &[$crate::board::BoardIdEntry] = &[
            $($crate::board::BoardIdEntry {
                board_id: $id,
                rev: $rev,
                name: stringify!($rev),
            }, )*
        ];
    }
}
