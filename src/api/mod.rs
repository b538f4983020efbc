//! UniFFI export layer — type-safe Swift/Kotlin bindings for the converter.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod converter;
mod types;


pub use converter::RadixConverter;
pub use types::{RadixDisplay, RadixEditResponse, RadixError, RadixSystem, RadixSystemInfo};

use std::path::Path;

use radix_core::NumeralSystem;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Metadata for every numeral system, in display order.
#[uniffi::export]
fn numeral_systems() -> Vec<RadixSystemInfo> {
    NumeralSystem::ALL.into_iter().map(RadixSystemInfo::from).collect()
}

/// Systems enabled in the display settings, in order.
#[uniffi::export]
fn displayed_systems() -> Vec<RadixSystem> {
    radix_core::settings::settings()
        .display
        .systems
        .iter()
        .map(|&s| s.into())
        .collect()
}

/// Stateless one-shot conversion.
#[uniffi::export]
fn convert_value(
    input: String,
    from: RadixSystem,
    to: RadixSystem,
) -> Result<String, RadixError> {
    Ok(radix_core::convert(&input, from.into(), to.into())?)
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), RadixError> {
    let content = std::fs::read_to_string(&path).map_err(|e| RadixError::Io {
        msg: format!("{path}: {e}"),
    })?;
    radix_core::settings::init_custom(content)
        .map_err(|e| RadixError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    radix_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
