//! Default tuning values for the recommendation pipeline.

/// How many of the actor's most recent positive interactions feed the
/// content-based preference vector.
pub const DEFAULT_POSITIVE_WINDOW: usize = 100;

/// How many leading description words contribute feature tokens.
pub const DEFAULT_DESCRIPTION_TOKEN_CAP: usize = 20;

/// Content-based weight in the hybrid merge.
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.6;

/// Collaborative weight in the hybrid merge.
pub const DEFAULT_COLLAB_WEIGHT: f64 = 0.4;

/// Base confidence assigned to a collaborative hit before the
/// co-occurrence transform is applied.
pub const DEFAULT_COLLAB_BASE_CONFIDENCE: f64 = 0.6;

/// Hard ceiling on any reported confidence.
pub const DEFAULT_CONFIDENCE_CAP: f64 = 0.99;

/// Maximum number of highlight strings carried on a recommendation.
pub const MAX_HIGHLIGHTS: usize = 3;

/// Upper bound (inclusive) for a rating value.
pub const MAX_RATING: f64 = 5.0;
