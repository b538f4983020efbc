//! FFI entry point for the numeral-base converter.
//!
//! The engine itself lives in `radix-core` (conversion) and `radix-session`
//! (the owned state object); this crate only exports them through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;
