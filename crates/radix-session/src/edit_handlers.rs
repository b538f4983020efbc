use radix_core::NumeralSystem;
use tracing::{debug, debug_span};

use super::response::{build_response, Refresh};
use super::types::EditResponse;
use super::ConverterSession;

impl ConverterSession {
    /// Process the full text of `system`'s input field after an edit.
    pub fn handle_edit(&mut self, system: NumeralSystem, text: &str) -> EditResponse {
        let _span = debug_span!("handle_edit", %system, text).entered();
        match self.set_from_input(text, system) {
            Ok(()) => build_response(self, None, Refresh::Except(system)),
            Err(e) => {
                debug!(error = %e, "edit rejected");
                build_response(self, Some(e), Refresh::None)
            }
        }
    }

    /// Increment (`delta > 0`) or decrement (`delta < 0`).
    ///
    /// The value no longer matches any typed text, so every field refreshes.
    pub fn handle_step(&mut self, delta: i64) -> EditResponse {
        let _span = debug_span!("handle_step", delta).entered();
        self.apply_delta(delta);
        build_response(self, None, Refresh::All)
    }

    pub fn handle_reset(&mut self) -> EditResponse {
        let _span = debug_span!("handle_reset").entered();
        self.reset();
        build_response(self, None, Refresh::All)
    }

    /// Current state without changing anything.
    pub fn snapshot(&self) -> EditResponse {
        let refresh = match self.active_system() {
            Some(system) => Refresh::Except(system),
            None => Refresh::All,
        };
        build_response(self, None, refresh)
    }
}
