//! # yatra-recommend
//!
//! The recommendation engine: feature extraction, sparse-vector similarity,
//! the content-based and collaborative recommenders, the weighted hybrid
//! merger, and the interaction recorder.
//!
//! Everything is request-scoped: preference vectors and the co-occurrence
//! model are rebuilt from the interaction log on every call, so ranking
//! always reflects the latest interaction state.

pub mod collaborative;
pub mod content;
pub mod engine;
pub mod features;
pub mod hybrid;
pub mod recorder;
pub mod vector;

pub use engine::RecommendEngine;
pub use recorder::{InteractionRecorder, RecordRequest};
pub use vector::SparseVector;
