use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use radix_session::ConverterSession;

use super::types::{RadixEditResponse, RadixError, RadixSystem};

/// One converter form: the canonical value plus the field being edited.
///
/// The UI serialises calls; the mutex only makes the object shareable
/// across the FFI boundary.
#[derive(uniffi::Object)]
pub struct RadixConverter {
    session: Mutex<ConverterSession>,
}

impl RadixConverter {
    fn session(&self) -> MutexGuard<'_, ConverterSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl RadixConverter {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(ConverterSession::new()),
        })
    }

    pub fn value(&self) -> u32 {
        self.session().value()
    }

    pub fn set_from_input(&self, text: String, system: RadixSystem) -> Result<(), RadixError> {
        self.session().set_from_input(&text, system.into())?;
        Ok(())
    }

    pub fn display(&self, system: RadixSystem) -> String {
        self.session().display(system.into())
    }

    pub fn increment(&self) -> u32 {
        self.session().increment()
    }

    pub fn decrement(&self) -> u32 {
        self.session().decrement()
    }

    pub fn reset(&self) {
        self.session().reset();
    }

    pub fn accepts_char(&self, system: RadixSystem, ch: String) -> bool {
        let mut chars = ch.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.session().accepts_char(system.into(), c),
            _ => false,
        }
    }

    pub fn handle_edit(&self, system: RadixSystem, text: String) -> RadixEditResponse {
        self.session().handle_edit(system.into(), &text).into()
    }

    pub fn handle_step(&self, delta: i64) -> RadixEditResponse {
        self.session().handle_step(delta).into()
    }

    pub fn handle_reset(&self) -> RadixEditResponse {
        self.session().handle_reset().into()
    }

    pub fn snapshot(&self) -> RadixEditResponse {
        self.session().snapshot().into()
    }
}
