use tracing::debug;

use crate::numeral::NumeralSystem;
use crate::roman::is_canonical_roman;

/// How strictly Roman input is checked beyond alphabet membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RomanGrammar {
    /// Any string over `IVXLCDM` is accepted and evaluated right to left.
    #[default]
    Lenient,
    /// Only canonical numerals (`MCMXCIV`, not `IIII` or `VX`) are accepted.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid input for {}: unexpected character {ch:?} at position {position}", .system.label())]
    InvalidCharacter {
        system: NumeralSystem,
        ch: char,
        position: usize,
    },
    #[error("invalid input for {}: {input:?} is not a canonical Roman numeral", NumeralSystem::Roman.label())]
    MalformedRoman { input: String },
}

impl ValidationError {
    /// The numeral system the rejected input was typed in.
    pub fn system(&self) -> NumeralSystem {
        match self {
            Self::InvalidCharacter { system, .. } => *system,
            Self::MalformedRoman { .. } => NumeralSystem::Roman,
        }
    }
}

/// Check that every character of `input` belongs to `system`'s alphabet.
///
/// The empty string is valid and stands for zero. No length limit applies.
pub fn validate(input: &str, system: NumeralSystem) -> Result<(), ValidationError> {
    validate_with(input, system, RomanGrammar::Lenient)
}

pub fn validate_with(
    input: &str,
    system: NumeralSystem,
    grammar: RomanGrammar,
) -> Result<(), ValidationError> {
    let rejected = input
        .chars()
        .enumerate()
        .find(|&(_, c)| !system.accepts_char(c));
    if let Some((position, ch)) = rejected {
        debug!(%system, position, ?ch, "rejected input character");
        return Err(ValidationError::InvalidCharacter {
            system,
            ch,
            position,
        });
    }
    if system == NumeralSystem::Roman
        && grammar == RomanGrammar::Strict
        && !input.is_empty()
        && !is_canonical_roman(input)
    {
        debug!(input, "rejected non-canonical roman numeral");
        return Err(ValidationError::MalformedRoman {
            input: input.to_string(),
        });
    }
    Ok(())
}
