// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use core::fmt::{Arguments, Write};
use spin::Mutex;

/// A byte sink for boot messages, normally the debug UART.
pub trait Console: Send {
    fn putc(&mut self, b: u8);
}

pub struct Writer {
    console: Option<&'static mut dyn Console>,
}

static WRITER: Mutex<Writer> = Mutex::new(Writer { console: None });

impl Write for Writer {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if let Some(console) = self.console.as_mut() {
            for b in s.bytes() {
                if b == b'\n' {
                    console.putc(b'\r');
                }
                console.putc(b);
            }
        }
        Ok(())
    }
}

/// Route `print!` output to `console`, returning the previous sink.
pub fn set_console(console: &'static mut dyn Console) -> Option<&'static mut dyn Console> {
    WRITER.lock().console.replace(console)
}

/// Print a format string to the console.
pub fn _print(args: Arguments) {
    let mut lock = WRITER.lock();
    // Writer::write_str never fails.
    let _ = lock.write_fmt(args);
}

#[cfg(test)]
mod tests {
    use super::*;

    static CAPTURED: Mutex<Vec<u8>> = Mutex::new(Vec::new());

    struct Capture;

    impl Console for Capture {
        fn putc(&mut self, b: u8) {
            CAPTURED.lock().push(b);
        }
    }

    #[test]
    fn println_reaches_console_with_crlf() {
        let sink: &'static mut Capture = Box::leak(Box::new(Capture));
        set_console(sink);
        crate::println!("board {}", "golden");
        assert_eq!(&CAPTURED.lock()[..], b"board golden\r\n");
    }
}
