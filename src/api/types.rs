use radix_core::{NumeralSystem, ValidationError};
use radix_session::{EditResponse, SystemDisplay};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RadixError {
    #[error("{msg}")]
    Validation { system: RadixSystem, msg: String },
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<ValidationError> for RadixError {
    fn from(e: ValidationError) -> Self {
        Self::Validation {
            system: e.system().into(),
            msg: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum RadixSystem {
    Binary,
    Octal,
    Decimal,
    Hex,
    Roman,
}

impl From<NumeralSystem> for RadixSystem {
    fn from(s: NumeralSystem) -> Self {
        match s {
            NumeralSystem::Binary => Self::Binary,
            NumeralSystem::Octal => Self::Octal,
            NumeralSystem::Decimal => Self::Decimal,
            NumeralSystem::Hex => Self::Hex,
            NumeralSystem::Roman => Self::Roman,
        }
    }
}

impl From<RadixSystem> for NumeralSystem {
    fn from(s: RadixSystem) -> Self {
        match s {
            RadixSystem::Binary => Self::Binary,
            RadixSystem::Octal => Self::Octal,
            RadixSystem::Decimal => Self::Decimal,
            RadixSystem::Hex => Self::Hex,
            RadixSystem::Roman => Self::Roman,
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// Static metadata for building one numeral-system row in the UI.
#[derive(Clone, Debug, uniffi::Record)]
pub struct RadixSystemInfo {
    pub system: RadixSystem,
    pub id: String,
    pub label: String,
    pub indicator: String,
    /// Digit-count hint for sizing the input field; absent for Roman.
    pub max_digits: Option<u32>,
}

impl From<NumeralSystem> for RadixSystemInfo {
    fn from(s: NumeralSystem) -> Self {
        Self {
            system: s.into(),
            id: s.id().to_string(),
            label: s.label().to_string(),
            indicator: s.indicator().to_string(),
            max_digits: s.max_digits().map(|d| d as u32),
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct RadixDisplay {
    pub system: RadixSystem,
    pub text: String,
    pub out_of_range: bool,
    pub refresh_input: bool,
}

impl From<SystemDisplay> for RadixDisplay {
    fn from(d: SystemDisplay) -> Self {
        Self {
            system: d.system.into(),
            text: d.text,
            out_of_range: d.out_of_range,
            refresh_input: d.refresh_input,
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct RadixEditResponse {
    pub accepted: bool,
    /// Message to show next to the rejected field.
    pub error: Option<String>,
    pub value: u32,
    pub displays: Vec<RadixDisplay>,
}

impl From<EditResponse> for RadixEditResponse {
    fn from(r: EditResponse) -> Self {
        Self {
            accepted: r.accepted,
            error: r.error.map(|e| e.to_string()),
            value: r.value,
            displays: r.displays.into_iter().map(RadixDisplay::from).collect(),
        }
    }
}
