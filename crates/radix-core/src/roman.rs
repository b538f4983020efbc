//! Roman numeral conversion.
//!
//! Parsing scans right to left and subtracts any symbol smaller than the one
//! after it, so it evaluates every string over the Roman alphabet, canonical or
//! not. Rendering is the greedy canonical form. Zero has no Roman glyph and is
//! shown as `N`; values above [`ROMAN_MAX`] render as [`ROMAN_OUT_OF_RANGE`].

use tracing::debug;

pub const ROMAN_MAX: u32 = 3999;

pub const ROMAN_ZERO: &str = "N";

/// Display sentinel for values without a Roman representation.
pub const ROMAN_OUT_OF_RANGE: &str = "INVALID";

const GREEDY_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of a single Roman symbol, case-insensitive.
pub fn symbol_value(ch: char) -> Option<u32> {
    match ch.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Evaluate a Roman numeral, clamped to `0..=ROMAN_MAX`.
///
/// Characters outside the Roman alphabet are skipped; callers validate first.
pub fn roman_to_decimal(roman: &str) -> u32 {
    let mut result: i64 = 0;
    let mut prev: u32 = 0;
    for v in roman.chars().rev().filter_map(symbol_value) {
        if v < prev {
            result -= i64::from(v);
        } else {
            result += i64::from(v);
        }
        prev = v;
    }
    let clamped = result.clamp(0, i64::from(ROMAN_MAX));
    if clamped != result {
        debug!(roman, result, clamped, "roman value clamped");
    }
    clamped as u32
}

/// Render `value` as a canonical Roman numeral.
pub fn decimal_to_roman(value: u32) -> String {
    if value == 0 {
        return ROMAN_ZERO.to_string();
    }
    if value > ROMAN_MAX {
        return ROMAN_OUT_OF_RANGE.to_string();
    }
    let mut rest = value;
    let mut out = String::new();
    for &(threshold, symbol) in &GREEDY_TABLE {
        while rest >= threshold {
            out.push_str(symbol);
            rest -= threshold;
        }
    }
    out
}

/// True when `input` is exactly the canonical rendering of its own value.
///
/// Rejects repetitions like `IIII` and illegal subtractive pairs like `VX` or
/// `IC`. The empty string and `N` are not numerals.
pub fn is_canonical_roman(input: &str) -> bool {
    if input.is_empty() || !input.chars().all(|c| symbol_value(c).is_some()) {
        return false;
    }
    let value = roman_to_decimal(input);
    value != 0 && decimal_to_roman(value).eq_ignore_ascii_case(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(roman_to_decimal("I"), 1);
        assert_eq!(roman_to_decimal("IV"), 4);
        assert_eq!(roman_to_decimal("IX"), 9);
        assert_eq!(roman_to_decimal("XLII"), 42);
        assert_eq!(roman_to_decimal("CCLV"), 255);
        assert_eq!(roman_to_decimal("MCMXCIV"), 1994);
        assert_eq!(roman_to_decimal("mcmxciv"), 1994);
        assert_eq!(roman_to_decimal("MMMCMXCIX"), 3999);
        assert_eq!(roman_to_decimal(""), 0);
    }

    #[test]
    fn malformed_numerals_use_right_to_left_rule() {
        assert_eq!(roman_to_decimal("IIII"), 4);
        assert_eq!(roman_to_decimal("VX"), 5);
        assert_eq!(roman_to_decimal("IC"), 99);
        assert_eq!(roman_to_decimal("XIIX"), 20);
    }

    #[test]
    fn clamps_to_range() {
        assert_eq!(roman_to_decimal("MMMM"), ROMAN_MAX);
        assert_eq!(roman_to_decimal(&"M".repeat(20)), ROMAN_MAX);
    }

    #[test]
    fn render_known_values() {
        assert_eq!(decimal_to_roman(1), "I");
        assert_eq!(decimal_to_roman(4), "IV");
        assert_eq!(decimal_to_roman(14), "XIV");
        assert_eq!(decimal_to_roman(255), "CCLV");
        assert_eq!(decimal_to_roman(1994), "MCMXCIV");
        assert_eq!(decimal_to_roman(3888), "MMMDCCCLXXXVIII");
        assert_eq!(decimal_to_roman(3999), "MMMCMXCIX");
    }

    #[test]
    fn zero_and_overflow_sentinels() {
        assert_eq!(decimal_to_roman(0), "N");
        assert_eq!(decimal_to_roman(4000), "INVALID");
        assert_eq!(decimal_to_roman(u32::MAX), "INVALID");
    }

    #[test]
    fn round_trip_full_range() {
        for v in 0..=ROMAN_MAX {
            assert_eq!(roman_to_decimal(&decimal_to_roman(v)), v, "value {v}");
        }
    }

    #[test]
    fn canonical_check() {
        assert!(is_canonical_roman("MCMXCIV"));
        assert!(is_canonical_roman("mcmxciv"));
        assert!(is_canonical_roman("IV"));
        assert!(!is_canonical_roman("IIII"));
        assert!(!is_canonical_roman("VX"));
        assert!(!is_canonical_roman("IC"));
        assert!(!is_canonical_roman("MMMM"));
        assert!(!is_canonical_roman(""));
        assert!(!is_canonical_roman("N"));
    }
}
