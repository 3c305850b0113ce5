// Copyright (c) 2023 Beihang University, Huawei Technologies Co.,Ltd. All rights reserved.
// Rust-Shyper is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//          http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
// EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
// MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
/// Parse a hex (`0x`), binary (`0b`) or decimal number.
pub fn string_to_u32(s: &str) -> Result<u32, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|_| format!("Not hex string: {}", s))
    } else if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2).map_err(|_| format!("Not binary string: {}", s))
    } else {
        s.parse::<u32>()
            .map_err(|_| format!("String {} is not in hex/bin/decimal format!", s))
    }
}

/// Render numbers as `a, b, c`, or `-` when there are none.
pub fn join_numbers(numbers: impl IntoIterator<Item = u32>) -> String {
    let list: Vec<String> = numbers.into_iter().map(|n| n.to_string()).collect();
    if list.is_empty() {
        String::from("-")
    } else {
        list.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_bases() {
        assert_eq!(string_to_u32("0x0105"), Ok(0x105));
        assert_eq!(string_to_u32(" 0b101 "), Ok(5));
        assert_eq!(string_to_u32("261"), Ok(261));
        assert!(string_to_u32("0xzz").is_err());
        assert!(string_to_u32("ten").is_err());
    }

    #[test]
    fn join_numbers_formats() {
        assert_eq!(join_numbers([1, 2, 3]), "1, 2, 3");
        assert_eq!(join_numbers(Vec::new()), "-");
    }
}
