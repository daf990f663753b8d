//! Study Match - partner matching and smart search engine
//!
//! This library provides the compatibility scoring used to pair study
//! partners: a weighted multi-criteria match score between two profiles,
//! synonym-aware fuzzy search over free-text candidate fields, and the
//! selection utilities behind the discovery feed.
//!
//! The engine is pure and synchronous: no I/O, no locks, no shared mutable
//! state. Every entry point is a bounded computation over its arguments,
//! safe to call concurrently from any number of threads.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use config::{Settings, SettingsError};
pub use core::{
    calculate_match_score, calculate_similarity, haversine_distance, jaccard, smart_jaccard,
    Matcher, RankedCandidate, SearchCandidate, SearchEngine, SearchOptions, SearchOutcome,
    SynonymIndex,
};
pub use models::{
    ComponentScore, MatchResult, MatchThresholds, MatchTier, MatchWeights, ProfileData,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::with_default_weights();
        let result = matcher.calculate_match(&ProfileData::default(), &ProfileData::default());
        assert!(result.match_data_insufficient);
    }
}
