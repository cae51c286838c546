//! Synthetic fingerprint generation
//!
//! Produces internally complete browser fingerprints from weighted/random
//! choice pools. Every field is individually valid against its pool;
//! correlated fields (user agent OS, platform, WebGL strings, timezone,
//! language) are drawn independently of each other.
//!
//! ## Module structure
//! - `types`: the fingerprint record and its sub-structs
//! - `generator`: the pool-backed generator with injected entropy

pub mod generator;
pub mod types;


pub use generator::{
    FingerprintGenerator, BASE_FONTS, DEVICE_MEMORY, EXTRA_FONTS, HARDWARE_CONCURRENCY, LANGUAGES,
    PIXEL_RATIOS, PLATFORMS, SCREEN_RESOLUTIONS, TIMEZONES, USER_AGENTS, WEBGL_RENDERERS,
    WEBGL_VENDORS,
};
pub use types::{Fingerprint, PluginInfo, ScreenResolution, WebRtcConfig};
