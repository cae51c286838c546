//! Profile store
//!
//! Owns the collection of profiles and mediates creation, lookup, mutation,
//! deletion, import/export and disk persistence. One self-contained JSON
//! document per profile, named by its id, fully rewritten on every mutation.

pub mod manager;


pub use manager::ProfileStore;
