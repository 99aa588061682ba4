//! Host transport security configuration.
//!
//! The TLS material locations come from a JSON file named by
//! `VESPA_TLS_CONFIG_FILE`; the mixed-mode posture comes from
//! `VESPA_TLS_INSECURE_MIXED_MODE`.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::env::Environment;
use crate::error::{ConfigError, Result};

/// Locations of the host's TLS material. Every path is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportSecurityOptions {
    pub ca_certificates_file: Option<PathBuf>,
    pub certificates_file: Option<PathBuf>,
    pub private_key_file: Option<PathBuf>,
}

/// On-disk layout of the TLS config file. Only the `files` section matters
/// here; peer authorization, ciphers and protocols are ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    files: Files,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Files {
    ca_certificates: Option<String>,
    certificates: Option<String>,
    private_key: Option<String>,
}

impl TransportSecurityOptions {
    /// Load the options configured for this host.
    ///
    /// Returns `Ok(None)` when `VESPA_TLS_CONFIG_FILE` is unset or empty, which
    /// means TLS is not configured.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed, or if it
    /// configures only one of certificates and private key.
    pub fn from_env(env: &Environment) -> Result<Option<Self>> {
        match env.non_empty_os(constants::TLS_CONFIG_FILE_VAR) {
            Some(path) => Self::load(Path::new(path)).map(Some),
            None => {
                debug!("{} not set, TLS is not configured", constants::TLS_CONFIG_FILE_VAR);
                Ok(None)
            }
        }
    }

    /// Read options from a TLS config file.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading TLS config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        let config: ConfigFile =
            serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let files = config.files;

        let field = |value: Option<String>, field: &'static str| -> Result<Option<PathBuf>> {
            match value {
                Some(v) if v.is_empty() => Err(ConfigError::EmptyPath {
                    path: path.to_path_buf(),
                    field,
                }
                .into()),
                v => Ok(v.map(PathBuf::from)),
            }
        };

        let options = Self {
            ca_certificates_file: field(files.ca_certificates, "ca-certificates")?,
            certificates_file: field(files.certificates, "certificates")?,
            private_key_file: field(files.private_key, "private-key")?,
        };

        if options.certificates_file.is_some() != options.private_key_file.is_some() {
            return Err(ConfigError::IncompleteCredentials {
                path: path.to_path_buf(),
            }
            .into());
        }

        debug!(
            ca = options.ca_certificates_file.is_some(),
            identity = options.certificates_file.is_some(),
            "TLS config loaded"
        );
        Ok(options)
    }

    /// Whether no TLS material is configured at all.
    pub fn is_empty(&self) -> bool {
        self.ca_certificates_file.is_none()
            && self.certificates_file.is_none()
            && self.private_key_file.is_none()
    }
}

/// How the host accepts plaintext and TLS connections while migrating to TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MixedMode {
    /// TLS only, both as client and server.
    #[default]
    Disabled,
    /// Clients use TLS; servers accept both.
    TlsClientMixedServer,
    /// Clients use plaintext; servers accept both.
    PlaintextClientMixedServer,
}

impl MixedMode {
    pub const ALL: [MixedMode; 3] = [
        MixedMode::Disabled,
        MixedMode::TlsClientMixedServer,
        MixedMode::PlaintextClientMixedServer,
    ];

    /// Value used for this mode in `VESPA_TLS_INSECURE_MIXED_MODE`.
    pub fn config_value(&self) -> &'static str {
        match self {
            Self::Disabled => "tls_client_tls_server",
            Self::TlsClientMixedServer => "tls_client_mixed_server",
            Self::PlaintextClientMixedServer => "plaintext_client_mixed_server",
        }
    }

    /// Parse a config value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownMixedMode` for anything but the three
    /// known values.
    pub fn from_config_value(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.config_value() == value)
            .ok_or_else(|| ConfigError::UnknownMixedMode(value.to_string()).into())
    }

    /// The host's mixed mode, [`MixedMode::Disabled`] when not set.
    ///
    /// # Errors
    ///
    /// See [`from_config_value`](Self::from_config_value).
    pub fn from_env(env: &Environment) -> Result<Self> {
        let mode = match env.non_empty_os(constants::TLS_MIXED_MODE_VAR) {
            Some(value) => match value.to_str() {
                Some(value) => Self::from_config_value(value)?,
                None => {
                    return Err(ConfigError::UnknownMixedMode(value.to_string_lossy().into()).into())
                }
            },
            None => Self::default(),
        };
        debug!(mixed_mode = %mode, "resolved mixed mode");
        Ok(mode)
    }
}

impl fmt::Display for MixedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_value())
    }
}
