//! Numeral-base conversion engine.
//!
//! Validates text typed in one numeral system, maps it to a single canonical
//! integer, and renders that integer back into every supported system
//! (binary, octal, decimal, hexadecimal and Roman numerals).

pub mod convert;
pub mod numeral;
pub mod positional;
pub mod roman;
pub mod settings;
pub mod validate;

pub use convert::{convert, is_representable, parse_to_canonical, render};
pub use numeral::{NumeralSystem, Radix, SystemSpec, UnknownSystem};
pub use validate::{validate, validate_with, RomanGrammar, ValidationError};
