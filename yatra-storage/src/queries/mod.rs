//! Query modules, grouped by table.

pub mod interaction_ops;
pub mod place_ops;
