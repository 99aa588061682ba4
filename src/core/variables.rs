//! Which variables to export.
//!
//! The one policy decision this tool makes: client identity material is never
//! advertised when the host accepts plaintext from clients while serving TLS,
//! because processes under that posture do not present a client certificate.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::core::tls::{MixedMode, TransportSecurityOptions};

/// A variable this tool may export.
///
/// Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputVariable {
    CaCertificate,
    Certificate,
    PrivateKey,
}

impl OutputVariable {
    /// Exported environment variable name. Other tools read these, so they
    /// must never change.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaCertificate => "VESPA_TLS_CA_CERT",
            Self::Certificate => "VESPA_TLS_CERT",
            Self::PrivateKey => "VESPA_TLS_PRIVATE_KEY",
        }
    }
}

impl fmt::Display for OutputVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variables to export with their values, iterated in [`OutputVariable`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMapping {
    entries: BTreeMap<OutputVariable, String>,
}

impl VariableMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `var`, replacing any previous value.
    pub fn insert(&mut self, var: OutputVariable, value: impl Into<String>) {
        self.entries.insert(var, value.into());
    }

    pub fn get(&self, var: OutputVariable) -> Option<&str> {
        self.entries.get(&var).map(String::as_str)
    }

    pub fn contains(&self, var: OutputVariable) -> bool {
        self.entries.contains_key(&var)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OutputVariable, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decide which variables to export for the configured TLS material.
///
/// - The CA certificate is exported whenever configured.
/// - Certificate and private key are exported when configured, unless
///   `mixed_mode` is [`MixedMode::PlaintextClientMixedServer`].
///
/// No configured paths yields an empty mapping.
pub fn select(options: &TransportSecurityOptions, mixed_mode: MixedMode) -> VariableMapping {
    let mut mapping = VariableMapping::new();

    if let Some(ca) = &options.ca_certificates_file {
        mapping.insert(OutputVariable::CaCertificate, ca.to_string_lossy());
    }

    if mixed_mode == MixedMode::PlaintextClientMixedServer {
        debug!(%mixed_mode, "suppressing client identity variables");
    } else {
        if let Some(cert) = &options.certificates_file {
            mapping.insert(OutputVariable::Certificate, cert.to_string_lossy());
        }
        if let Some(key) = &options.private_key_file {
            mapping.insert(OutputVariable::PrivateKey, key.to_string_lossy());
        }
    }

    debug!(variables = mapping.len(), "selected output variables");
    mapping
}
