//! sri-storage
//!
//! Local JSON persistence for assessment sessions and the in-progress
//! snapshot. One blob per session, written atomically via a temp file.

pub mod error;
pub mod progress;
pub mod sessions;

pub use error::StorageError;
pub use progress::ProgressSnapshot;
pub use sessions::SessionStore;
