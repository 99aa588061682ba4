//! vespa-security-env - Exports the host's TLS certificate locations for shells.
//!
//! Reads the host's transport security configuration and prints statements
//! that export `VESPA_TLS_CA_CERT`, `VESPA_TLS_CERT` and
//! `VESPA_TLS_PRIVATE_KEY` in the syntax of the invoking shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing, orchestration, exit codes
//! │   └── output        # Diagnostics on stderr
//! ├── core/             # Core library components
//! │   ├── constants     # Environment variable names
//! │   ├── env           # Immutable environment snapshot
//! │   ├── tls           # TLS config file and mixed mode
//! │   ├── variables     # Which variables to export
//! │   └── shell/        # Shell dialects
//! │       ├── mod       # Dialect detection
//! │       └── syntax    # Export statement rendering
//! └── error             # Error types
//! ```
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use vespa_security_env::core::shell::{render, ShellKind};
//! use vespa_security_env::core::tls::{MixedMode, TransportSecurityOptions};
//! use vespa_security_env::core::variables::select;
//!
//! let options = TransportSecurityOptions {
//!     ca_certificates_file: Some(PathBuf::from("/etc/vespa/ca.pem")),
//!     certificates_file: Some(PathBuf::from("/etc/vespa/cert.pem")),
//!     private_key_file: Some(PathBuf::from("/etc/vespa/key.pem")),
//! };
//! let mapping = select(&options, MixedMode::PlaintextClientMixedServer);
//! assert_eq!(
//!     render(&mapping, ShellKind::CShell),
//!     vec!["setenv VESPA_TLS_CA_CERT '/etc/vespa/ca.pem'"]
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
