//! Stateful converter session owning the canonical value.
//!
//! `ConverterSession` holds the single value every representation derives
//! from, plus the system the user is currently typing in, and answers each
//! edit, step or reset with an [`EditResponse`] the UI layer renders.

mod edit_handlers;
mod response;
mod types;

#[cfg(test)]
mod tests;

use radix_core::{parse_to_canonical, render, validate_with, NumeralSystem, ValidationError};
use tracing::debug;

pub use types::{EditResponse, SessionConfig, SystemDisplay};

/// Converter state: one canonical value, replaced wholesale on every change.
///
/// Not synchronised. Callers serialise edits against a session.
pub struct ConverterSession {
    value: u32,
    /// System whose input field holds user-typed text.
    active: Option<NumeralSystem>,
    pub(crate) config: SessionConfig,
}

impl ConverterSession {
    /// Session configured from the global settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::from_settings())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            value: 0,
            active: None,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Replace the canonical value.
    pub fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    pub fn active_system(&self) -> Option<NumeralSystem> {
        self.active
    }

    /// Validate `text` in `system` and, on success, make its value current.
    ///
    /// On failure the value and active system are left untouched.
    pub fn set_from_input(
        &mut self,
        text: &str,
        system: NumeralSystem,
    ) -> Result<(), ValidationError> {
        validate_with(text, system, self.config.roman_grammar)?;
        self.set_value(parse_to_canonical(text, system));
        self.active = Some(system);
        Ok(())
    }

    /// Current value rendered in `system` (`N` / `INVALID` for Roman edge cases).
    pub fn display(&self, system: NumeralSystem) -> String {
        render(self.value, system)
    }

    pub fn increment(&mut self) -> u32 {
        self.apply_delta(1)
    }

    pub fn decrement(&mut self) -> u32 {
        self.apply_delta(-1)
    }

    /// Add `delta` to the value, flooring at zero and saturating at `u32::MAX`.
    pub fn apply_delta(&mut self, delta: i64) -> u32 {
        let next = (i64::from(self.value) + delta).clamp(0, i64::from(u32::MAX));
        debug!(from = self.value, delta, to = next, "apply_delta");
        self.set_value(next as u32);
        self.active = None;
        self.value
    }

    pub fn reset(&mut self) {
        self.set_value(0);
        self.active = None;
    }

    /// Keystroke filter: whether `ch` may be typed into `system`'s field.
    pub fn accepts_char(&self, system: NumeralSystem, ch: char) -> bool {
        system.accepts_char(ch)
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}
