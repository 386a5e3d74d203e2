//! Process-wide connection defaults.
//!
//! Every optional profile setting falls back to these values when a
//! connection line does not override it. All fields have defaults to
//! allow minimal configs.

use serde::{Deserialize, Serialize};

use crate::profile::TlsVersion;

/// User agent advertised when a connection does not set its own.
pub const DEFAULT_USERAGENT: &str = concat!("http-profiles/", env!("CARGO_PKG_VERSION"));

/// Process-wide default values for per-connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionDefaults {
    /// Follow HTTP 3xx redirects.
    pub follow_redirects: bool,

    /// Request timeout in whole seconds.
    pub timeout_secs: u64,

    /// Maximum response body size in bytes (0 = unlimited).
    pub max_response_size: u64,

    /// Verify the peer's TLS certificate chain.
    pub verify_peer: bool,

    /// Verify that the certificate matches the requested host.
    pub verify_host: bool,

    /// TLS negotiation version.
    pub tls_version: TlsVersion,

    /// User-Agent header value.
    pub useragent: String,

    /// Client certificate path for TLS client authentication.
    pub client_cert: Option<String>,

    /// Client private key path.
    pub client_key: Option<String>,

    /// Cipher suite list handed to the transport.
    pub ciphersuites: Option<String>,
}

impl Default for ConnectionDefaults {
    fn default() -> Self {
        Self {
            follow_redirects: false,
            timeout_secs: 4,
            max_response_size: 0,
            verify_peer: true,
            verify_host: true,
            tls_version: TlsVersion::Auto,
            useragent: DEFAULT_USERAGENT.to_string(),
            client_cert: None,
            client_key: None,
            ciphersuites: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let defaults = ConnectionDefaults::default();
        assert!(!defaults.follow_redirects);
        assert_eq!(defaults.timeout_secs, 4);
        assert_eq!(defaults.max_response_size, 0);
        assert!(defaults.verify_peer);
        assert!(defaults.verify_host);
        assert_eq!(defaults.tls_version, TlsVersion::Auto);
        assert!(defaults.useragent.starts_with("http-profiles/"));
        assert_eq!(defaults.client_cert, None);
    }

    #[test]
    fn test_partial_toml_overlays_builtins() {
        let defaults: ConnectionDefaults =
            toml::from_str("timeout_secs = 10\ntls_version = \"tls_v1_2\"").unwrap();
        assert_eq!(defaults.timeout_secs, 10);
        assert_eq!(defaults.tls_version, TlsVersion::TlsV1_2);
        // Untouched fields keep the built-in values.
        assert!(defaults.verify_peer);
        assert!(defaults.useragent.starts_with("http-profiles/"));
    }
}
