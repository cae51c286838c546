//! Browser identity profiles
//!
//! Value objects for profiles, their proxy descriptors and the typed update
//! patch, plus the record conversion used by every persistence path.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{Profile, ProfilePatch, ProxyConfig};
