//! Test support utilities for vespa-security-env integration tests.
//!
//! Provides an isolated environment with a TLS config file and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes start from an empty environment, so nothing from the
/// developer's shell (`SHELL`, `VESPA_*`) leaks into assertions.
pub struct Test {
    /// Directory holding the TLS config file
    pub dir: TempDir,
    /// Extra environment variables for every command
    pub vars: Vec<(String, OsString)>,
}

impl Test {
    /// Create an environment with no TLS configuration.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self {
            dir,
            vars: Vec::new(),
        }
    }

    /// Create an environment whose TLS config file has the given contents.
    pub fn with_config(json: &str) -> Self {
        let mut t = Self::new();
        let path = t.write_config(json);
        t.set_var_os("VESPA_TLS_CONFIG_FILE", path);
        t
    }

    /// Create an environment with CA, certificate and private key configured.
    pub fn with_full_tls() -> Self {
        Self::with_config(&tls_config(Some(CA_PATH), Some(CERT_PATH), Some(KEY_PATH)))
    }

    /// Write a TLS config file into the temp directory.
    pub fn write_config(&self, json: &str) -> PathBuf {
        self.write_config_as("tls.json", json)
    }

    /// Write a TLS config file with the given file name.
    pub fn write_config_as(&self, name: impl AsRef<OsStr>, json: &str) -> PathBuf {
        let path = self.dir.path().join(name.as_ref());
        std::fs::write(&path, json).expect("failed to write tls config");
        path
    }

    /// Set an environment variable for every command run from this test.
    pub fn set_var(&mut self, key: &str, value: &str) -> &mut Self {
        self.set_var_os(key, value)
    }

    /// Set an environment variable whose value need not be unicode.
    pub fn set_var_os(&mut self, key: &str, value: impl AsRef<OsStr>) -> &mut Self {
        self.vars.push((key.to_string(), value.as_ref().to_os_string()));
        self
    }

    /// Set the host mixed mode.
    pub fn mixed_mode(&mut self, value: &str) -> &mut Self {
        self.set_var("VESPA_TLS_INSECURE_MIXED_MODE", value)
    }
}
