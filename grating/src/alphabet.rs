//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Letter labels over a reduced alphabet
//!
//! Labels form a bijective base-21 numeral system: there is no zero digit, so every
//! positive integer has exactly one label (`1` is "A", `21` is "Z", `22` is "AA").
//! I, L, O, Q and S are left out because they are easily mistaken for digits or for
//! each other on a printed page.

/// Label symbols in numeral order
pub const ALPHABET: [char; 21] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'M', 'N', 'P', 'R', 'T', 'U', 'V', 'W', 'X',
    'Y', 'Z',
];

const BASE: u64 = ALPHABET.len() as u64;

/// Label of a 1-based position. Position 0 has no label and yields an empty string.
pub fn encode(position: u64) -> String {
    let mut digits = Vec::new();
    let mut n = position;
    while n > 0 {
        n -= 1;
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    digits.iter().rev().collect()
}

/// 1-based position of a label, `None` for empty or malformed labels.
pub fn decode(label: &str) -> Option<u64> {
    if label.is_empty() {
        return None;
    }
    label.chars().try_fold(0u64, |acc, c| {
        let digit = ALPHABET.iter().position(|&a| a == c)? as u64 + 1;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

#[test]
fn test_single_digits() {
    assert_eq!(encode(1), "A");
    assert_eq!(encode(9), "J");
    assert_eq!(encode(21), "Z");
    assert_eq!(encode(0), "");
}

#[test]
fn test_decode() {
    assert_eq!(decode("A"), Some(1));
    assert_eq!(decode("Z"), Some(21));
    assert_eq!(decode("AA"), Some(22));
    assert_eq!(decode("AB"), Some(23));
    assert_eq!(decode(""), None);
    assert_eq!(decode("I"), None);
    assert_eq!(decode("a"), None);
    assert_eq!(decode("A1"), None);
    // 21^15 > u64::MAX
    assert_eq!(decode("ZZZZZZZZZZZZZZZZ"), None);
}
