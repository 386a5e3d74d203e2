//! Connection profile registry.
//!
//! # Data Flow
//! ```text
//! configuration phase (single actor)
//!     → insert(profile) per parsed line
//!     → duplicate names rejected, registry untouched
//!
//! steady state (concurrent request handlers)
//!     → lookup(name) → Arc<ConnectionProfile>
//! ```
//!
//! # Design Decisions
//! - Explicit owned object, not process-wide state; tests construct
//!   their own registries
//! - Insertion-ordered Vec with a hash pre-check: cardinality is
//!   configuration-sized, a linear scan is sufficient
//! - The hash is case-insensitive; equality is byte-exact, so hash
//!   collisions cannot alias entries
//! - No removal and no mutation after insertion

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::sync::Arc;

use thiserror::Error;

use crate::profile::ConnectionProfile;

/// Insertion attempted for an already registered name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate connection name `{name}`")]
pub struct DuplicateName {
    pub name: String,
}

/// Registry of named connection profiles.
///
/// Built once during the startup configuration phase, read-only
/// afterwards: `lookup` takes `&self` and profiles are immutable behind
/// `Arc`, so any number of request handlers may resolve names without
/// synchronization.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    entries: Vec<Arc<ConnectionProfile>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered profiles.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a profile by name.
    ///
    /// The precomputed hash narrows candidates; the byte-exact name
    /// comparison decides equality.
    pub fn lookup(&self, name: &str) -> Option<Arc<ConnectionProfile>> {
        let key = case_hash(name);
        self.entries
            .iter()
            .find(|entry| entry.lookup_key == key && entry.name == name)
            .cloned()
    }

    /// Register a profile under its name.
    ///
    /// Computes the lookup key exactly once. A byte-identical name
    /// already present rejects the insertion and leaves the registry
    /// unchanged.
    pub fn insert(
        &mut self,
        mut profile: ConnectionProfile,
    ) -> Result<Arc<ConnectionProfile>, DuplicateName> {
        let key = case_hash(&profile.name);
        if self
            .entries
            .iter()
            .any(|entry| entry.lookup_key == key && entry.name == profile.name)
        {
            return Err(DuplicateName { name: profile.name });
        }

        profile.lookup_key = key;
        let entry = Arc::new(profile);
        self.entries.push(Arc::clone(&entry));
        tracing::info!(connection = %entry.name, "added connection profile");
        Ok(entry)
    }

    /// Iterate profiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ConnectionProfile>> {
        self.entries.iter()
    }
}

/// Case-insensitive name hash used as the lookup pre-check.
fn case_hash(name: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    for byte in name.bytes() {
        hasher.write_u8(byte.to_ascii_lowercase());
    }
    hasher.finish()
}
