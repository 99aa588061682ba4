//! Constants used throughout vespa-security-env.
//!
//! Centralizes environment variable names. The exported variable names live
//! with [`OutputVariable`](crate::core::variables::OutputVariable) since other
//! tools depend on them.

/// Login shell of the invoking user; consulted only without `--shell`.
pub const SHELL_VAR: &str = "SHELL";

/// Presence of this variable turns on failure traces and debug logging.
pub const DEBUG_VAR: &str = "VESPA_DEBUG";

/// Path of the JSON file describing the host's TLS material.
pub const TLS_CONFIG_FILE_VAR: &str = "VESPA_TLS_CONFIG_FILE";

/// Host mixed-mode posture during a plaintext to TLS migration.
pub const TLS_MIXED_MODE_VAR: &str = "VESPA_TLS_INSECURE_MIXED_MODE";

/// Tracing filter directive override.
pub const LOG_VAR: &str = "VESPA_SECURITY_ENV_LOG";
