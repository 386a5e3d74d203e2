//! Connection profile types.
//!
//! # Responsibilities
//! - Represent one named, fully resolved connection profile
//! - Hold the per-connection TLS, timeout, and failover settings
//! - Stay immutable once the registry hands out shared handles

pub mod builder;

pub use builder::build_profile;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// TLS negotiation version selector.
///
/// The numeric wire indices (`sslversion=<n>` in a connection line) are
/// fixed; values outside `0..=7` are rejected by the builder and fall
/// back to the process default.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsVersion {
    /// Let the transport negotiate.
    #[default]
    Auto = 0,
    TlsV1 = 1,
    SslV2 = 2,
    SslV3 = 3,
    TlsV1_0 = 4,
    TlsV1_1 = 5,
    TlsV1_2 = 6,
    TlsV1_3 = 7,
}

impl TlsVersion {
    /// Map a numeric configuration index to a version.
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Auto),
            1 => Some(Self::TlsV1),
            2 => Some(Self::SslV2),
            3 => Some(Self::SslV3),
            4 => Some(Self::TlsV1_0),
            5 => Some(Self::TlsV1_1),
            6 => Some(Self::TlsV1_2),
            7 => Some(Self::TlsV1_3),
            _ => None,
        }
    }
}

/// A named connection profile.
///
/// Built once during the configuration phase and never mutated
/// afterwards; request handlers receive shared `Arc` handles from the
/// registry.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionProfile {
    /// Case-insensitive hash of `name`, written once by the registry
    /// at insertion.
    #[serde(skip)]
    pub(crate) lookup_key: u64,

    /// Unique registry key. Content is case-sensitive.
    pub name: String,

    /// Transport scheme preceding `://`. Opaque to this subsystem.
    pub scheme: String,

    /// Base target: host and path, credentials and parameters stripped.
    pub url: String,

    /// Credentials, present only when the line carried an `@` segment.
    pub username: Option<String>,
    pub password: Option<String>,

    /// Secondary target tried when the primary fails. Opaque.
    pub failover: Option<String>,

    /// User-Agent header value.
    pub useragent: String,

    /// TLS client authentication material.
    pub client_cert: Option<String>,
    pub client_key: Option<String>,
    pub ciphersuites: Option<String>,

    pub tls_version: TlsVersion,
    pub verify_peer: bool,
    pub verify_host: bool,
    pub follow_redirects: bool,

    /// Total request timeout.
    pub timeout: Duration,

    /// Maximum response body size in bytes (0 = unlimited).
    pub max_response_size: u64,
}

impl ConnectionProfile {
    /// Case-insensitive hash of `name`, fixed at insertion time.
    pub fn lookup_key(&self) -> u64 {
        self.lookup_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_version_indices() {
        assert_eq!(TlsVersion::from_index(0), Some(TlsVersion::Auto));
        assert_eq!(TlsVersion::from_index(6), Some(TlsVersion::TlsV1_2));
        assert_eq!(TlsVersion::from_index(7), Some(TlsVersion::TlsV1_3));
        assert_eq!(TlsVersion::from_index(8), None);
        assert_eq!(TlsVersion::from_index(u64::MAX), None);
    }

    #[test]
    fn test_tls_version_default() {
        assert_eq!(TlsVersion::default(), TlsVersion::Auto);
    }
}
