//! Fingerprint generator implementation
//!
//! Draws every fingerprint field from constant pools using an injected,
//! seedable entropy source.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Fingerprint, PluginInfo, ScreenResolution, WebRtcConfig};

/// User agent pool
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
];

/// Real-world screen resolutions
pub const SCREEN_RESOLUTIONS: &[(u32, u32)] = &[
    (1920, 1080),
    (1366, 768),
    (1440, 900),
    (1536, 864),
    (1600, 900),
    (2560, 1440),
    (1280, 720),
    (1680, 1050),
    (1280, 1024),
    (1920, 1200),
];

/// IANA timezone pool
pub const TIMEZONES: &[&str] = &[
    "America/Sao_Paulo",
    "America/New_York",
    "Europe/London",
    "Europe/Paris",
    "Asia/Tokyo",
    "Australia/Sydney",
    "America/Los_Angeles",
    "America/Chicago",
    "Europe/Berlin",
];

/// Accept-Language pool
pub const LANGUAGES: &[&str] = &[
    "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7",
    "en-US,en;q=0.9",
    "es-ES,es;q=0.9,en;q=0.8",
    "fr-FR,fr;q=0.9,en;q=0.8",
    "de-DE,de;q=0.9,en;q=0.8",
];

/// Navigator platform pool
pub const PLATFORMS: &[&str] = &["Win32", "MacIntel", "Linux x86_64"];

/// Device pixel ratios
pub const PIXEL_RATIOS: &[f64] = &[1.0, 1.25, 1.5, 2.0];

/// Hardware concurrency pool
pub const HARDWARE_CONCURRENCY: &[u32] = &[2, 4, 6, 8, 12, 16];

/// Device memory pool (GB)
pub const DEVICE_MEMORY: &[u32] = &[2, 4, 8, 16, 32];

/// WebGL vendors
pub const WEBGL_VENDORS: &[&str] = &[
    "Google Inc. (NVIDIA)",
    "Google Inc. (Intel)",
    "Google Inc. (AMD)",
    "Apple Inc.",
];

/// WebGL renderers
pub const WEBGL_RENDERERS: &[&str] = &[
    "ANGLE (NVIDIA GeForce GTX 1650 Direct3D11 vs_5_0 ps_5_0)",
    "ANGLE (Intel(R) UHD Graphics 620 Direct3D11 vs_5_0 ps_5_0)",
    "ANGLE (AMD Radeon RX 580 Direct3D11 vs_5_0 ps_5_0)",
    "Apple M1",
];

/// Fonts ubiquitous across systems
pub const BASE_FONTS: &[&str] = &[
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Courier New",
    "Verdana",
    "Georgia",
    "Comic Sans MS",
    "Trebuchet MS",
    "Arial Black",
    "Impact",
];

/// Fonts weighted heavier in the combined sampling pool
pub const EXTRA_FONTS: &[&str] = &[
    "Calibri",
    "Cambria",
    "Consolas",
    "Lucida Console",
    "Tahoma",
    "Segoe UI",
    "Palatino",
    "Garamond",
    "Bookman",
    "Courier",
];

/// Weight applied to EXTRA_FONTS in the combined pool
const EXTRA_FONT_WEIGHT: usize = 5;

/// Candidate browser plugins with their inclusion probability
const PLUGIN_CANDIDATES: &[(&str, &str, &str, f64)] = &[
    (
        "Chrome PDF Plugin",
        "Portable Document Format",
        "internal-pdf-viewer",
        0.5,
    ),
    (
        "Chrome PDF Viewer",
        "Portable Document Format",
        "mhjfbmdgcfjbbpaeojofohoefgiehjai",
        0.5,
    ),
    (
        "Native Client",
        "Native Client Executable",
        "internal-nacl-plugin",
        0.3,
    ),
];

/// Fingerprint generator
///
/// Holds its own seedable RNG so generation is deterministic under a fixed
/// seed and independent of any ambient global state. `generate` never fails:
/// every pool is non-empty by construction.
pub struct FingerprintGenerator {
    rng: Mutex<StdRng>,
}

impl Default for FingerprintGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerprintGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generate a complete fingerprint
    pub fn generate(&self) -> Fingerprint {
        let mut rng = self.rng.lock().unwrap_or_else(|p| p.into_inner());
        let rng = &mut *rng;

        let &(width, height) = pick(rng, SCREEN_RESOLUTIONS);

        Fingerprint {
            user_agent: pick(rng, USER_AGENTS).to_string(),
            screen_resolution: ScreenResolution {
                width,
                height,
                color_depth: 24,
                pixel_ratio: *pick(rng, PIXEL_RATIOS),
            },
            timezone: pick(rng, TIMEZONES).to_string(),
            language: pick(rng, LANGUAGES).to_string(),
            platform: pick(rng, PLATFORMS).to_string(),
            hardware_concurrency: *pick(rng, HARDWARE_CONCURRENCY),
            device_memory: *pick(rng, DEVICE_MEMORY),
            webgl_vendor: pick(rng, WEBGL_VENDORS).to_string(),
            webgl_renderer: pick(rng, WEBGL_RENDERERS).to_string(),
            canvas_fingerprint: Self::generate_canvas_hash(rng),
            webrtc: WebRtcConfig {
                enabled: rng.gen_bool(0.5),
                public_ip: Self::generate_fake_ip(rng),
            },
            fonts: Self::generate_font_list(rng),
            plugins: Self::generate_plugin_list(rng),
            do_not_track: if rng.gen_bool(0.5) {
                Some("1".to_string())
            } else {
                None
            },
            cookies_enabled: true,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Generate a 32-hex-char canvas content hash from fresh entropy
    fn generate_canvas_hash(rng: &mut StdRng) -> String {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        hex::encode(bytes)
    }

    /// Generate a plausible public dotted-quad
    fn generate_fake_ip(rng: &mut StdRng) -> String {
        format!(
            "{}.{}.{}.{}",
            rng.gen_range(1..=255u8),
            rng.gen_range(0..=255u8),
            rng.gen_range(0..=255u8),
            rng.gen_range(1..=254u8),
        )
    }

    /// Sample 30-80 font names without replacement from the combined pool
    fn generate_font_list(rng: &mut StdRng) -> Vec<String> {
        let mut pool: Vec<&str> = BASE_FONTS.to_vec();
        for _ in 0..EXTRA_FONT_WEIGHT {
            pool.extend_from_slice(EXTRA_FONTS);
        }

        let count = rng.gen_range(30..=80usize).min(pool.len());
        pool.choose_multiple(rng, count)
            .map(|font| font.to_string())
            .collect()
    }

    /// Independently include each candidate plugin by its probability
    fn generate_plugin_list(rng: &mut StdRng) -> Vec<PluginInfo> {
        PLUGIN_CANDIDATES
            .iter()
            .filter(|&&(_, _, _, probability)| rng.gen_bool(probability))
            .map(|&(name, description, filename, _)| PluginInfo {
                name: name.to_string(),
                description: description.to_string(),
                filename: filename.to_string(),
            })
            .collect()
    }
}

/// Uniform choice from a non-empty constant pool
fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}
