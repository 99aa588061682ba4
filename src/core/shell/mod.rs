//! Shell dialect detection.
//!
//! Maps a shell identifier (a `$SHELL` path or a name given with `--shell`)
//! to one of the dialects we know how to write export statements for.

pub mod syntax;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

pub use syntax::{render, write};

/// Syntax family used for environment variable export statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellKind {
    /// Bourne-compatible shells: `export NAME='value'`
    #[default]
    Posix,
    /// csh and tcsh: `setenv NAME 'value'`
    CShell,
    /// fish: `set -x NAME 'value'`
    Fish,
}

impl ShellKind {
    /// All dialects, in display order.
    pub const ALL: [ShellKind; 3] = [ShellKind::Posix, ShellKind::CShell, ShellKind::Fish];

    /// Canonical name, as accepted by `--shell`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::CShell => "cshell",
            Self::Fish => "fish",
        }
    }

    /// Names recognised for this dialect: the canonical name and its aliases
    /// followed by the binary names found at the end of `$SHELL`.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Self::Posix => &[
                "posix", "bourne", "sh", "bash", "zsh", "ksh", "dash", "ash", "mksh",
            ],
            Self::CShell => &["cshell", "csh", "tcsh"],
            Self::Fish => &["fish"],
        }
    }

    /// Best-effort detection from a shell identifier such as `$SHELL`.
    ///
    /// Anything before the last `/` is ignored and the remainder must match a
    /// known name exactly. Absent, empty or unknown input falls back to
    /// [`ShellKind::Posix`]; detection never fails.
    pub fn detect(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            debug!("no shell identifier, using default dialect");
            return Self::default();
        };
        let name = raw.rsplit('/').next().unwrap_or(raw);
        match Self::lookup(name) {
            Some(kind) => {
                debug!(shell = raw, dialect = %kind, "detected shell dialect");
                kind
            }
            None => {
                debug!(shell = raw, "unrecognised shell, using default dialect");
                Self::default()
            }
        }
    }

    /// Resolve a dialect the user asked for by name.
    ///
    /// Unlike [`detect`](Self::detect) this does not fall back: an explicit
    /// request for an unknown shell is an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedShell` if `name` is not a known dialect name.
    pub fn from_explicit_name(name: &str) -> Result<Self> {
        Self::lookup(name).ok_or_else(|| Error::UnsupportedShell {
            name: name.to_string(),
            expected: Self::ALL
                .iter()
                .map(ShellKind::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.names().contains(&name))
    }
}

impl FromStr for ShellKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_explicit_name(s)
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
