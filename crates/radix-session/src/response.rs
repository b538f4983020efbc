use radix_core::{is_representable, render, NumeralSystem, ValidationError};

use super::types::{EditResponse, SystemDisplay};
use super::ConverterSession;

/// Which input fields the UI should overwrite with the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Refresh {
    All,
    /// Every field except the one holding accepted user-typed text.
    Except(NumeralSystem),
    /// Value unchanged by a rejected edit: leave every field alone.
    None,
}

impl Refresh {
    fn applies_to(self, system: NumeralSystem) -> bool {
        match self {
            Refresh::All => true,
            Refresh::Except(kept) => kept != system,
            Refresh::None => false,
        }
    }
}

/// Render every configured system for the current value.
pub(super) fn build_response(
    session: &ConverterSession,
    error: Option<ValidationError>,
    refresh: Refresh,
) -> EditResponse {
    let value = session.value();
    let displays = session
        .config
        .systems
        .iter()
        .map(|&system| SystemDisplay {
            system,
            text: render(value, system),
            out_of_range: !is_representable(value, system),
            refresh_input: refresh.applies_to(system),
        })
        .collect();
    EditResponse {
        accepted: error.is_none(),
        error,
        value,
        displays,
    }
}
