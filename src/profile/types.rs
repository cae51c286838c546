//! Profile value object and record conversion
//!
//! A profile bundles an identity, a fingerprint, an optional proxy and the
//! persisted session state. The record conversion pair here is the single
//! serialization boundary used for both disk persistence and import/export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fingerprint::Fingerprint;
use crate::Result;

/// Upstream proxy credentials for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Isolated browser identity profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// 12-char lowercase-alphanumeric id, unique within its store
    pub profile_id: String,
    pub name: String,
    pub fingerprint: Fingerprint,
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
    /// Opaque cookie records, order preserved
    #[serde(default)]
    pub cookies: Vec<Value>,
    #[serde(default)]
    pub local_storage: HashMap<String, String>,
    #[serde(default)]
    pub session_storage: HashMap<String, String>,
    #[serde(default = "unix_now")]
    pub created_at: i64,
    #[serde(default)]
    pub last_used: Option<i64>,
    #[serde(default)]
    pub notes: String,
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl Profile {
    /// Create a fresh profile with empty session state
    pub fn new(
        profile_id: String,
        name: String,
        fingerprint: Fingerprint,
        proxy: Option<ProxyConfig>,
    ) -> Self {
        Self {
            profile_id,
            name,
            fingerprint,
            proxy,
            cookies: Vec::new(),
            local_storage: HashMap::new(),
            session_storage: HashMap::new(),
            created_at: unix_now(),
            last_used: None,
            notes: String::new(),
        }
    }

    /// Encode the profile as a plain structured record
    ///
    /// No disk I/O; the same record shape backs persistence and export.
    pub fn to_record(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a profile from a plain structured record
    ///
    /// Missing optional fields (`proxy`, `cookies`, storage maps, `notes`,
    /// `last_used`) fall back to documented defaults; a missing `created_at`
    /// falls back to now. Round-trip safe: `from_record(to_record(p)) == p`.
    pub fn from_record(record: Value) -> Result<Self> {
        Ok(serde_json::from_value(record)?)
    }

    /// Apply a patch, field by field
    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(proxy) = patch.proxy {
            self.proxy = proxy;
        }
        if let Some(cookies) = patch.cookies {
            self.cookies = cookies;
        }
        if let Some(local_storage) = patch.local_storage {
            self.local_storage = local_storage;
        }
        if let Some(session_storage) = patch.session_storage {
            self.session_storage = session_storage;
        }
        if let Some(last_used) = patch.last_used {
            self.last_used = last_used;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Closed set of updatable profile fields
///
/// `None` leaves a field untouched. `proxy` and `last_used` are doubly
/// optional so the patch can clear them as well as set them. Identity
/// fields (`profile_id`, `created_at`) and the fingerprint are not
/// patchable; the fingerprint changes only through regeneration.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub proxy: Option<Option<ProxyConfig>>,
    pub cookies: Option<Vec<Value>>,
    pub local_storage: Option<HashMap<String, String>>,
    pub session_storage: Option<HashMap<String, String>>,
    pub last_used: Option<Option<i64>>,
    pub notes: Option<String>,
}
