//! Veil-Forge management entry point
//!
//! Opens the profile store over the configured directory and reports its
//! contents. Environment variables:
//! - `VEIL_DATA_DIR`: profile directory (default: ./browser_profiles)
//! - `VEIL_FINGERPRINT_SEED`: fixed generator seed for deterministic runs
//! - `VEIL_CREATE_PROFILE`: when set, create a profile with that name
//! - `RUST_LOG`: log level (default: info)

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use veil_forge::{config::Config, FingerprintGenerator, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("Veil-Forge v{}", veil_forge::VERSION);

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: data_dir={}", config.data_dir);

    // Create fingerprint generator, optionally seeded
    let generator = Arc::new(match config.fingerprint_seed {
        Some(seed) => FingerprintGenerator::with_seed(seed),
        None => FingerprintGenerator::new(),
    });

    // Open the profile store
    let store = ProfileStore::open(&config.data_dir, generator).await?;

    if let Ok(name) = std::env::var("VEIL_CREATE_PROFILE") {
        let profile = store.create(&name, None).await?;
        info!(
            profile_id = %profile.profile_id,
            user_agent = %profile.fingerprint.user_agent,
            timezone = %profile.fingerprint.timezone,
            "Profile created"
        );
    }

    for profile in store.list().await {
        info!(
            profile_id = %profile.profile_id,
            name = %profile.name,
            resolution = %format!(
                "{}x{}",
                profile.fingerprint.screen_resolution.width,
                profile.fingerprint.screen_resolution.height
            ),
            proxy = profile.proxy.is_some(),
            "Profile"
        );
    }

    Ok(())
}
