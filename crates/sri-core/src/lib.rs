//! sri-core
//!
//! Pure domain types for the SRI assessment engine.
//! No catalog or scoring logic — this is the shared vocabulary of the system.

pub mod error;
pub mod models;
