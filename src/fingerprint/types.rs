//! Fingerprint record types
//!
//! The synthetic device/browser identity attached to every profile.

use serde::{Deserialize, Serialize};

/// Screen geometry reported to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
    pub pixel_ratio: f64,
}

/// WebRTC exposure settings, including the synthetic public address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebRtcConfig {
    pub enabled: bool,
    pub public_ip: String,
}

/// Browser plugin descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    pub filename: String,
}

/// Complete synthetic browser fingerprint
///
/// Immutable once generated; replaced wholesale by
/// [`ProfileStore::regenerate_fingerprint`](crate::store::ProfileStore::regenerate_fingerprint).
/// Every field is individually valid against its pool, but correlated fields
/// (user agent OS vs. platform vs. WebGL strings) are drawn independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub user_agent: String,
    pub screen_resolution: ScreenResolution,
    pub timezone: String,
    /// HTTP Accept-Language style string, e.g. "en-US,en;q=0.9"
    pub language: String,
    pub platform: String,
    pub hardware_concurrency: u32,
    pub device_memory: u32,
    pub webgl_vendor: String,
    pub webgl_renderer: String,
    /// 32 lowercase hex chars; seeds the per-session canvas noise offset
    pub canvas_fingerprint: String,
    pub webrtc: WebRtcConfig,
    pub fonts: Vec<String>,
    pub plugins: Vec<PluginInfo>,
    pub do_not_track: Option<String>,
    pub cookies_enabled: bool,
    /// Unix timestamp at generation
    pub created_at: i64,
}

impl Fingerprint {
    /// Language entries with q-values stripped, in declared order
    ///
    /// "pt-BR,pt;q=0.9,en;q=0.8" becomes ["pt-BR", "pt", "en"].
    pub fn language_list(&self) -> Vec<String> {
        self.language
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}
