// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod scorers;
pub mod scoring;
pub mod search;
pub mod selection;
pub mod similarity;
pub mod synonyms;
pub mod terms;

pub use distance::{haversine_distance, location_proximity, LocationScore, MAX_LOCATION_DISTANCE_KM};
pub use matcher::{Matcher, RankedCandidate};
pub use scorers::{
    exact_match, skill_level_closeness, strengths_weaknesses_complement,
    study_style_compatibility, timezone_proximity, TimezoneScore,
};
pub use scoring::calculate_match_score;
pub use search::{match_score, SearchCandidate, SearchEngine, SearchOptions, SearchOutcome};
pub use selection::{
    filter_by_min_score, sort_by_match_score, weighted_random_sample, weighted_random_select,
};
pub use similarity::{calculate_similarity, levenshtein_distance};
pub use synonyms::SynonymIndex;
pub use terms::{get_intersection, jaccard, smart_jaccard, SmartJaccard, SYNONYM_MATCH_WEIGHT};
