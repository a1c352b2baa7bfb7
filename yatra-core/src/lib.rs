//! # yatra-core
//!
//! Foundation crate for the yatra recommendation engine.
//! Defines the interaction and catalog types, the collaborator traits,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod interaction;
pub mod recommendation;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::Place;
pub use config::RecommendConfig;
pub use errors::{YatraError, YatraResult};
pub use interaction::{Action, Interaction, ItemType};
pub use recommendation::{Recommendation, Strategy};
