//! Test fixtures and constants.

pub const CA_PATH: &str = "/etc/vespa/ca.pem";
pub const CERT_PATH: &str = "/etc/vespa/cert.pem";
pub const KEY_PATH: &str = "/etc/vespa/key.pem";

/// Build a TLS config file with the given paths under `files`.
pub fn tls_config(ca: Option<&str>, cert: Option<&str>, key: Option<&str>) -> String {
    let mut files = serde_json::Map::new();
    if let Some(ca) = ca {
        files.insert("ca-certificates".into(), ca.into());
    }
    if let Some(cert) = cert {
        files.insert("certificates".into(), cert.into());
    }
    if let Some(key) = key {
        files.insert("private-key".into(), key.into());
    }
    serde_json::json!({
        "files": files,
        "authorized-peers": [],
        "disable-hostname-validation": true,
    })
    .to_string()
}
