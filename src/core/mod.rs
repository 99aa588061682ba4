//! Core library components.
//!
//! Pure decision logic: where the TLS material is, which of it to surface and
//! how each shell dialect spells an exported variable.

pub mod constants;
pub mod env;
pub mod shell;
pub mod tls;
pub mod variables;
