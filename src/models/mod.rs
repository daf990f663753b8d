// Model exports
pub mod profile;
pub mod results;
pub mod weights;

pub use profile::{has_items, has_text, ProfileData, QUALIFYING_FIELDS};
pub use results::{ComponentDetail, ComponentScore, MatchResult, MatchSummary, MatchTier};
pub use weights::{MatchThresholds, MatchWeights, TierCutoffs};
