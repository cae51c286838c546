//! Stealth integration surface
//!
//! The pieces a browser launcher consumes: the init script derived from a
//! profile's fingerprint and the launcher seam trait. The launcher itself
//! (real browser process, script injection transport) lives outside this
//! crate.
//!
//! ## Module structure
//! - `traits`: the `SessionLauncher` consumer seam
//! - `script`: stealth init-script rendering and the canvas noise offset

pub mod script;
pub mod traits;

#[cfg(test)]
mod tests;

pub use script::{build_stealth_script, canvas_noise_offset};
pub use traits::SessionLauncher;
