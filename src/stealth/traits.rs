//! Stealth seam traits

use async_trait::async_trait;

use crate::fingerprint::Fingerprint;
use crate::profile::ProxyConfig;
use crate::Error;

/// Session launcher trait
///
/// Consumer seam for whatever starts the actual browser. The launcher
/// receives the fingerprint and proxy descriptor by value; the core holds no
/// reference to the session it creates, and the canonical profile record is
/// only ever mutated through the store's update path.
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    /// Start a browser session configured with the given identity
    async fn launch(
        &self,
        profile_id: &str,
        fingerprint: Fingerprint,
        proxy: Option<ProxyConfig>,
    ) -> Result<String, Error>;

    /// Close a session previously returned by `launch`
    async fn close(&self, session_id: &str) -> Result<(), Error>;
}
