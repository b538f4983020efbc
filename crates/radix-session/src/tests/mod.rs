mod basic;

use radix_core::RomanGrammar;

use super::{ConverterSession, SessionConfig};

pub(super) fn make_session() -> ConverterSession {
    ConverterSession::with_config(SessionConfig::default())
}

pub(super) fn make_strict_session() -> ConverterSession {
    ConverterSession::with_config(SessionConfig {
        roman_grammar: RomanGrammar::Strict,
        ..SessionConfig::default()
    })
}
