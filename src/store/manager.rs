//! Profile store implementation
//!
//! Owns the id → profile map and the backing directory. Sole writer of
//! persisted state and sole authority for id uniqueness.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::fingerprint::FingerprintGenerator;
use crate::profile::{Profile, ProfilePatch, ProxyConfig};
use crate::Result;

/// Alphabet for profile ids
const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a profile id
const ID_LENGTH: usize = 12;

/// Profile store
///
/// One store instance owns its backing directory exclusively; concurrent
/// stores pointed at the same directory from different processes can race
/// on writes.
pub struct ProfileStore {
    /// Backing directory for persisted profile documents
    data_dir: PathBuf,
    /// Fingerprint generator
    generator: Arc<FingerprintGenerator>,
    /// Profile storage
    profiles: RwLock<HashMap<String, Profile>>,
}

impl ProfileStore {
    /// Open a store over a backing directory
    ///
    /// Creates the directory if absent (fatal on failure), then loads every
    /// persisted record found there. A record that fails to parse is skipped
    /// with a warning; load continues.
    pub async fn open(
        data_dir: impl Into<PathBuf>,
        generator: Arc<FingerprintGenerator>,
    ) -> Result<Self> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await?;

        let profiles = Self::load_profiles(&data_dir).await?;
        info!(
            profiles = profiles.len(),
            data_dir = %data_dir.display(),
            "Profile store opened"
        );

        Ok(Self {
            data_dir,
            generator,
            profiles: RwLock::new(profiles),
        })
    }

    /// Create a new profile with a fresh fingerprint
    pub async fn create(&self, name: &str, proxy: Option<ProxyConfig>) -> Result<Profile> {
        let fingerprint = self.generator.generate();

        let mut profiles = self.profiles.write().await;

        // Collision-checked under the write lock: the id space is large
        // enough that a retry is practically unreachable, but an existing
        // entry must never be silently overwritten.
        let profile_id = loop {
            let candidate = Self::generate_id();
            if !profiles.contains_key(&candidate) {
                break candidate;
            }
        };

        let profile = Profile::new(profile_id.clone(), name.to_string(), fingerprint, proxy);
        profiles.insert(profile_id.clone(), profile.clone());
        drop(profiles);

        self.persist(&profile).await?;
        debug!(profile_id = %profile_id, name = %profile.name, "Profile created");

        Ok(profile)
    }

    /// Get a profile by id
    pub async fn get(&self, profile_id: &str) -> Option<Profile> {
        let profiles = self.profiles.read().await;
        profiles.get(profile_id).cloned()
    }

    /// List all profiles, ordered by id
    pub async fn list(&self) -> Vec<Profile> {
        let profiles = self.profiles.read().await;
        let mut all: Vec<Profile> = profiles.values().cloned().collect();
        all.sort_by(|a, b| a.profile_id.cmp(&b.profile_id));
        all
    }

    /// Delete a profile and its persisted document
    ///
    /// Returns whether an entry existed. Deleting an unknown id is not an
    /// error.
    pub async fn delete(&self, profile_id: &str) -> Result<bool> {
        let removed = {
            let mut profiles = self.profiles.write().await;
            profiles.remove(profile_id).is_some()
        };

        if removed {
            match tokio::fs::remove_file(self.profile_path(profile_id)).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            debug!(profile_id = %profile_id, "Profile deleted");
        }

        Ok(removed)
    }

    /// Apply a typed patch to a profile and re-persist it
    pub async fn update(&self, profile_id: &str, patch: ProfilePatch) -> Result<bool> {
        let updated = {
            let mut profiles = self.profiles.write().await;
            match profiles.get_mut(profile_id) {
                Some(profile) => {
                    profile.apply_patch(patch);
                    Some(profile.clone())
                }
                None => None,
            }
        };

        match updated {
            Some(profile) => {
                self.persist(&profile).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace a profile's fingerprint with a fresh independent one
    ///
    /// No sub-field is preserved; profile identity is untouched.
    pub async fn regenerate_fingerprint(&self, profile_id: &str) -> Result<bool> {
        let fingerprint = self.generator.generate();

        let updated = {
            let mut profiles = self.profiles.write().await;
            match profiles.get_mut(profile_id) {
                Some(profile) => {
                    profile.fingerprint = fingerprint;
                    Some(profile.clone())
                }
                None => None,
            }
        };

        match updated {
            Some(profile) => {
                self.persist(&profile).await?;
                debug!(profile_id = %profile_id, "Fingerprint regenerated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Record that a profile was just used
    pub async fn mark_used(&self, profile_id: &str) -> Result<bool> {
        let patch = ProfilePatch {
            last_used: Some(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };
        self.update(profile_id, patch).await
    }

    /// Export a profile document to an arbitrary path
    ///
    /// Returns whether the source profile existed; the profile stays in the
    /// store.
    pub async fn export(&self, profile_id: &str, destination: impl AsRef<Path>) -> Result<bool> {
        let profile = match self.get(profile_id).await {
            Some(profile) => profile,
            None => return Ok(false),
        };

        let document = Self::encode(&profile)?;
        tokio::fs::write(destination.as_ref(), document).await?;

        Ok(true)
    }

    /// Import a profile document from an arbitrary path
    ///
    /// A malformed or unreadable document is recoverable: the failure is
    /// reported as a warning and `None` is returned. On success the profile
    /// is registered under the id found in the document, overwriting any
    /// existing entry with the same id.
    pub async fn import(&self, source: impl AsRef<Path>) -> Result<Option<Profile>> {
        let source = source.as_ref();

        let content = match tokio::fs::read_to_string(source).await {
            Ok(content) => content,
            Err(e) => {
                warn!(source = %source.display(), error = %e, "Failed to read import document");
                return Ok(None);
            }
        };

        let profile = match Self::decode(&content) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(source = %source.display(), error = %e, "Failed to parse import document");
                return Ok(None);
            }
        };

        {
            let mut profiles = self.profiles.write().await;
            profiles.insert(profile.profile_id.clone(), profile.clone());
        }
        self.persist(&profile).await?;
        info!(profile_id = %profile.profile_id, source = %source.display(), "Profile imported");

        Ok(Some(profile))
    }

    /// Path of the persisted document for an id
    fn profile_path(&self, profile_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", profile_id))
    }

    /// Generate a 12-char lowercase-alphanumeric id
    fn generate_id() -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LENGTH)
            .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect()
    }

    /// Encode a profile as a pretty-printed persisted document
    fn encode(profile: &Profile) -> Result<String> {
        let record = profile.to_record()?;
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// Decode a persisted document into a profile
    fn decode(content: &str) -> Result<Profile> {
        let record: serde_json::Value = serde_json::from_str(content)?;
        Profile::from_record(record)
    }

    /// Rewrite a profile's persisted document in full
    async fn persist(&self, profile: &Profile) -> Result<()> {
        let document = Self::encode(profile)?;
        tokio::fs::write(self.profile_path(&profile.profile_id), document).await?;
        Ok(())
    }

    /// Load every parseable profile document in the directory
    async fn load_profiles(data_dir: &Path) -> Result<HashMap<String, Profile>> {
        let mut profiles = HashMap::new();
        let mut entries = tokio::fs::read_dir(data_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read profile document");
                    continue;
                }
            };

            // A truncated document from a crashed write lands here too.
            match Self::decode(&content) {
                Ok(profile) => {
                    profiles.insert(profile.profile_id.clone(), profile);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unparseable profile document");
                }
            }
        }

        Ok(profiles)
    }
}
