//! Place-value parsing and rendering for radixes up to 16.

use tracing::debug;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Value of a single digit, case-insensitive. `None` outside `0-9A-F`.
pub fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'A'..='F' => Some(ch as u32 - 'A' as u32 + 10),
        'a'..='f' => Some(ch as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// Parse `input` as an unsigned integer in `radix`, left to right.
///
/// The input is expected to have passed validation for a system with this
/// radix; characters without a digit value are skipped. Values past the 32-bit
/// range saturate at `u32::MAX`.
pub fn parse_positional(input: &str, radix: u32) -> u32 {
    debug_assert!((2..=16).contains(&radix));
    let mut value: u32 = 0;
    let mut saturated = false;
    for d in input.chars().filter_map(digit_value) {
        match value.checked_mul(radix).and_then(|v| v.checked_add(d)) {
            Some(v) => value = v,
            None => {
                saturated = true;
                value = u32::MAX;
                break;
            }
        }
    }
    if saturated {
        debug!(input, radix, "positional input saturated at u32::MAX");
    }
    value
}

/// Render `value` in `radix` with upper-case letters. Zero renders as `"0"`.
pub fn to_positional_string(value: u32, radix: u32) -> String {
    debug_assert!((2..=16).contains(&radix));
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::with_capacity(32);
    let mut rest = value;
    while rest > 0 {
        buf.push(DIGITS[(rest % radix) as usize]);
        rest /= radix;
    }
    buf.reverse();
    // DIGITS is ASCII
    buf.into_iter().map(char::from).collect()
}
