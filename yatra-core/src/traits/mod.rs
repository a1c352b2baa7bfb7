//! Collaborator interfaces. The recommenders only ever talk to storage
//! through these traits, so tests can swap in the in-memory engine.

mod catalog;
mod interaction_log;
mod recommender;

pub use catalog::ICatalogStore;
pub use interaction_log::{ActorItemSet, IInteractionLog};
pub use recommender::IRecommender;
