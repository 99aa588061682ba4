//! Error types.
//!
//! Every failure the tool can hit ends up as one of these variants, and the
//! orchestrator turns each of them into a single diagnostic line plus exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    ArgumentParse(String),

    #[error("unsupported shell '{name}' (expected one of: {expected})")]
    UnsupportedShell { name: String, expected: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while producing the transport security options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read TLS config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TLS config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "both 'private-key' and 'certificates' must be configured together in {}",
        path.display()
    )]
    IncompleteCredentials { path: PathBuf },

    #[error("'{field}' is configured with an empty path in {}", path.display())]
    EmptyPath { path: PathBuf, field: &'static str },

    #[error("unknown mixed mode value '{0}'")]
    UnknownMixedMode(String),
}

impl Error {
    /// Lead-in for the one-line diagnostic printed on failure.
    pub fn context(&self) -> &'static str {
        match self {
            Error::ArgumentParse(_) => "Failed to parse command line arguments",
            Error::UnsupportedShell { .. } => "Invalid command line arguments",
            Error::Config(_) | Error::Io(_) => "Failed to generate security environment variables",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
