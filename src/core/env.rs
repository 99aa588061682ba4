//! Environment snapshot.
//!
//! The process environment is read once at startup and passed around as an
//! immutable value, so nothing below the binary entry point touches
//! `std::env` directly.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

use crate::core::constants;

/// Immutable view of the environment variables the tool was started with.
///
/// Names and values are kept as the platform gave them; a path in a
/// variable does not have to be valid unicode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of a variable, if set.
    pub fn get_os(&self, name: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(name)).map(OsString::as_os_str)
    }

    /// Value of a variable, treating an empty value as unset.
    pub fn non_empty_os(&self, name: &str) -> Option<&OsStr> {
        self.get_os(name).filter(|v| !v.is_empty())
    }

    /// Value of a variable if set and valid unicode.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_os(name).and_then(OsStr::to_str)
    }

    /// Whether a variable is present at all, whatever its value.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(OsStr::new(name))
    }

    /// Whether failure traces and debug logging were requested.
    pub fn debug_enabled(&self) -> bool {
        self.contains(constants::DEBUG_VAR)
    }
}
