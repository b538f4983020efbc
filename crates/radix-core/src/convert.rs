//! Conversion between input strings, the canonical value and display strings.

use tracing::debug_span;

use crate::numeral::{NumeralSystem, Radix};
use crate::positional::{parse_positional, to_positional_string};
use crate::roman::{decimal_to_roman, roman_to_decimal, ROMAN_MAX};
use crate::validate::{validate, ValidationError};

/// Map validated `input` in `system` to the canonical value.
///
/// The empty string is zero. Roman input is clamped to `0..=3999`; positional
/// input saturates at `u32::MAX`.
pub fn parse_to_canonical(input: &str, system: NumeralSystem) -> u32 {
    let _span = debug_span!("parse_to_canonical", input, %system).entered();
    if input.is_empty() {
        return 0;
    }
    match system.radix() {
        Radix::Positional(radix) => parse_positional(input, radix),
        Radix::Roman => roman_to_decimal(input),
    }
}

/// Render `value` for display in `system`.
///
/// Roman zero is `N` and Roman values above 3999 render as `INVALID`; use
/// [`is_representable`] to tell that sentinel apart from a numeral.
pub fn render(value: u32, system: NumeralSystem) -> String {
    match system.radix() {
        Radix::Positional(radix) => to_positional_string(value, radix),
        Radix::Roman => decimal_to_roman(value),
    }
}

/// Whether `value` has a real representation in `system`.
pub fn is_representable(value: u32, system: NumeralSystem) -> bool {
    match system.radix() {
        Radix::Positional(_) => true,
        Radix::Roman => value <= ROMAN_MAX,
    }
}

/// Validate `input` in `from` and render its value in `to`.
pub fn convert(
    input: &str,
    from: NumeralSystem,
    to: NumeralSystem,
) -> Result<String, ValidationError> {
    let _span = debug_span!("convert", input, %from, %to).entered();
    validate(input, from)?;
    Ok(render(parse_to_canonical(input, from), to))
}
