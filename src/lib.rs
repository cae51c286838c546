//! Veil-Forge: browser identity profile management
//!
//! Manages isolated browser identity profiles for automated browsing. Each
//! profile carries a synthetic device/browser fingerprint, optional proxy
//! credentials and persisted cookie/storage state, so that multiple
//! automated sessions present as distinct, plausible users.
//!
//! The crate covers fingerprint generation and the profile lifecycle and
//! persistence contract. Launching the actual browser is a consumer concern
//! behind the [`stealth::SessionLauncher`] seam; consumers receive the
//! fingerprint and proxy descriptor by value and apply them with the script
//! rendered by [`stealth::build_stealth_script`].

pub mod config;
pub mod error;

pub mod fingerprint;
pub mod profile;
pub mod stealth;
pub mod store;

// Re-exports
pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, FingerprintGenerator};
pub use profile::{Profile, ProfilePatch, ProxyConfig};
pub use store::ProfileStore;

/// Veil-Forge library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
