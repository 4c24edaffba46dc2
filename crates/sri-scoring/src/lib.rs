//! sri-scoring
//!
//! The SRI scoring pipeline: raw sub-scale sums, z-standardization against
//! a normative table, four dimension scores, and the composite 0–100 index
//! with severity classification. Synchronous and allocation-light; norms
//! are an explicit input, never global state.

pub mod error;
pub mod levels;
pub mod norms;
pub mod report;
pub mod scorer;
pub mod stats;

pub use error::ScoringError;
pub use norms::{Norm, NormativeData};
pub use scorer::{DimensionSources, Scorer};
