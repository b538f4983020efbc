use radix_core::settings::settings;
use radix_core::{NumeralSystem, RomanGrammar, ValidationError};

/// Per-session behaviour switches, normally taken from the global settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub roman_grammar: RomanGrammar,
    /// Systems included in a response, in order.
    pub systems: Vec<NumeralSystem>,
}

impl SessionConfig {
    pub fn from_settings() -> Self {
        let s = settings();
        Self {
            roman_grammar: s.roman.grammar(),
            systems: s.display.systems.clone(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roman_grammar: RomanGrammar::Lenient,
            systems: NumeralSystem::ALL.to_vec(),
        }
    }
}

/// One rendered system in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemDisplay {
    pub system: NumeralSystem,
    pub text: String,
    /// The value has no representation here; `text` is the `INVALID` sentinel.
    pub out_of_range: bool,
    /// False for the system the user is typing in, whose field must keep the
    /// raw text (and cursor) rather than the re-rendered canonical form.
    pub refresh_input: bool,
}

/// Response to one edit, step or reset, returned to the UI caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResponse {
    pub accepted: bool,
    pub error: Option<ValidationError>,
    pub value: u32,
    pub displays: Vec<SystemDisplay>,
}

impl EditResponse {
    pub fn display(&self, system: NumeralSystem) -> Option<&SystemDisplay> {
        self.displays.iter().find(|d| d.system == system)
    }

    /// Rendered text for `system`, if it is part of this response.
    pub fn text(&self, system: NumeralSystem) -> Option<&str> {
        self.display(system).map(|d| d.text.as_str())
    }
}
