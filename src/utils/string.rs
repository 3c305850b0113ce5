// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

use crate::error::{ErrorKind, Result};

/// Parse an unsigned integer with the radix taken from its prefix:
/// `0x`/`0X` is hexadecimal, a leading `0` is octal, anything else decimal.
pub fn parse_ulong(s: &str) -> Result<u64> {
    let s = s.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    // from_str_radix takes a sign, the kernel parser does not.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return ErrorKind::InvalidParam.into();
    }
    Ok(u64::from_str_radix(digits, radix)?)
}

/// Parse a memory size with an optional `K`, `M` or `G` suffix (either case).
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim();
    let (number, shift) = match s.as_bytes().last() {
        Some(b'k' | b'K') => (&s[..s.len() - 1], 10),
        Some(b'm' | b'M') => (&s[..s.len() - 1], 20),
        Some(b'g' | b'G') => (&s[..s.len() - 1], 30),
        _ => (s, 0),
    };
    let value = parse_ulong(number)?;
    value
        .checked_mul(1 << shift)
        .ok_or_else(|| ErrorKind::InvalidParam.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_follows_prefix() {
        assert_eq!(parse_ulong("0x0105").unwrap(), 0x105);
        assert_eq!(parse_ulong("0X1f").unwrap(), 0x1f);
        assert_eq!(parse_ulong("017").unwrap(), 0o17);
        assert_eq!(parse_ulong("261").unwrap(), 261);
        assert_eq!(parse_ulong("0").unwrap(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_ulong("").unwrap_err().kind(), ErrorKind::InvalidParam);
        assert_eq!(parse_ulong("0x").unwrap_err().kind(), ErrorKind::InvalidParam);
        assert_eq!(parse_ulong("09").unwrap_err().kind(), ErrorKind::Library);
        assert!(parse_ulong("12abc").is_err());
    }

    #[test]
    fn rejects_sign() {
        assert_eq!(parse_ulong("+261").unwrap_err().kind(), ErrorKind::InvalidParam);
        assert_eq!(parse_ulong("-1").unwrap_err().kind(), ErrorKind::InvalidParam);
        assert_eq!(parse_ulong("0x+105").unwrap_err().kind(), ErrorKind::InvalidParam);
        assert!(parse_size("+1M").is_err());
    }

    #[test]
    fn size_suffixes() {
        assert_eq!(parse_size("1M").unwrap(), 1 << 20);
        assert_eq!(parse_size("512k").unwrap(), 512 << 10);
        assert_eq!(parse_size("2G").unwrap(), 2 << 30);
        assert_eq!(parse_size("0x1000").unwrap(), 0x1000);
        assert!(parse_size("M").is_err());
    }
}
