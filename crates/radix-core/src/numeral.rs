//! Static table of the supported numeral systems.
//!
//! Every per-system property (radix, alphabet, subscript glyph, label) is
//! looked up from [`SYSTEMS`] by enum, so no code branches on string ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Binary,
    Octal,
    Decimal,
    Hex,
    Roman,
}

/// How a system encodes values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// Place-value system with the given base.
    Positional(u32),
    /// Additive/subtractive Roman numerals.
    Roman,
}

#[derive(Debug)]
pub struct SystemSpec {
    pub id: &'static str,
    pub radix: Radix,
    /// Subscript glyph shown next to a rendered value.
    pub indicator: &'static str,
    /// Digit-count hint for sizing input fields. Not enforced.
    pub max_digits: Option<usize>,
    pub label: &'static str,
    /// Accepted characters, upper case.
    pub alphabet: &'static str,
}

static SYSTEMS: [SystemSpec; 5] = [
    SystemSpec {
        id: "binary",
        radix: Radix::Positional(2),
        indicator: "₂",
        max_digits: Some(32),
        label: "Binary system",
        alphabet: "01",
    },
    SystemSpec {
        id: "octal",
        radix: Radix::Positional(8),
        indicator: "₈",
        max_digits: Some(11),
        label: "Octal system",
        alphabet: "01234567",
    },
    SystemSpec {
        id: "decimal",
        radix: Radix::Positional(10),
        indicator: "₁₀",
        max_digits: Some(10),
        label: "Decimal system",
        alphabet: "0123456789",
    },
    SystemSpec {
        id: "hex",
        radix: Radix::Positional(16),
        indicator: "₁₆",
        max_digits: Some(8),
        label: "Hexadecimal system",
        alphabet: "0123456789ABCDEF",
    },
    SystemSpec {
        id: "roman",
        radix: Radix::Roman,
        indicator: "ℝ",
        max_digits: None,
        label: "Roman numeral system",
        alphabet: "IVXLCDM",
    },
];

impl NumeralSystem {
    /// All systems in display order.
    pub const ALL: [NumeralSystem; 5] = [
        NumeralSystem::Binary,
        NumeralSystem::Octal,
        NumeralSystem::Decimal,
        NumeralSystem::Hex,
        NumeralSystem::Roman,
    ];

    pub fn spec(self) -> &'static SystemSpec {
        &SYSTEMS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn radix(self) -> Radix {
        self.spec().radix
    }

    pub fn indicator(self) -> &'static str {
        self.spec().indicator
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn max_digits(self) -> Option<usize> {
        self.spec().max_digits
    }

    pub fn alphabet(self) -> &'static str {
        self.spec().alphabet
    }

    pub fn is_positional(self) -> bool {
        matches!(self.radix(), Radix::Positional(_))
    }

    /// Case-insensitive alphabet membership for a single character.
    pub fn accepts_char(self, ch: char) -> bool {
        let upper = ch.to_ascii_uppercase();
        upper.is_ascii() && self.alphabet().contains(upper)
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown numeral system: {0}")]
pub struct UnknownSystem(pub String);

impl FromStr for NumeralSystem {
    type Err = UnknownSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Self::Binary),
            "octal" | "oct" => Ok(Self::Octal),
            "decimal" | "dec" => Ok(Self::Decimal),
            "hex" | "hexadecimal" => Ok(Self::Hex),
            "roman" => Ok(Self::Roman),
            _ => Err(UnknownSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for system in NumeralSystem::ALL {
            assert_eq!(system.id(), system.to_string());
            assert_eq!(system.id().parse::<NumeralSystem>().unwrap(), system);
        }
    }

    #[test]
    fn radix_and_digit_hints() {
        assert_eq!(NumeralSystem::Binary.radix(), Radix::Positional(2));
        assert_eq!(NumeralSystem::Octal.radix(), Radix::Positional(8));
        assert_eq!(NumeralSystem::Decimal.radix(), Radix::Positional(10));
        assert_eq!(NumeralSystem::Hex.radix(), Radix::Positional(16));
        assert_eq!(NumeralSystem::Roman.radix(), Radix::Roman);

        assert_eq!(NumeralSystem::Binary.max_digits(), Some(32));
        assert_eq!(NumeralSystem::Octal.max_digits(), Some(11));
        assert_eq!(NumeralSystem::Decimal.max_digits(), Some(10));
        assert_eq!(NumeralSystem::Hex.max_digits(), Some(8));
        assert_eq!(NumeralSystem::Roman.max_digits(), None);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("HEX".parse::<NumeralSystem>().unwrap(), NumeralSystem::Hex);
        assert_eq!(
            "hexadecimal".parse::<NumeralSystem>().unwrap(),
            NumeralSystem::Hex
        );
        assert_eq!("bin".parse::<NumeralSystem>().unwrap(), NumeralSystem::Binary);
        assert_eq!("Oct".parse::<NumeralSystem>().unwrap(), NumeralSystem::Octal);
        assert_eq!("dec".parse::<NumeralSystem>().unwrap(), NumeralSystem::Decimal);
        let err = "base64".parse::<NumeralSystem>().unwrap_err();
        assert_eq!(err.to_string(), "unknown numeral system: base64");
    }

    #[test]
    fn accepts_char_is_case_insensitive() {
        assert!(NumeralSystem::Hex.accepts_char('f'));
        assert!(NumeralSystem::Hex.accepts_char('F'));
        assert!(!NumeralSystem::Hex.accepts_char('g'));
        assert!(NumeralSystem::Roman.accepts_char('m'));
        assert!(!NumeralSystem::Roman.accepts_char('N'));
        assert!(!NumeralSystem::Binary.accepts_char('2'));
        assert!(!NumeralSystem::Decimal.accepts_char('٣'));
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        #[derive(Deserialize)]
        struct Wrapper {
            systems: Vec<NumeralSystem>,
        }
        let w: Wrapper = toml::from_str(r#"systems = ["hex", "roman"]"#).unwrap();
        assert_eq!(w.systems, vec![NumeralSystem::Hex, NumeralSystem::Roman]);
    }
}
