use rand::Rng;
use serde::Serialize;

use crate::core::scoring::calculate_match_score;
use crate::core::selection::{filter_by_min_score, sort_by_match_score, weighted_random_select};
use crate::core::synonyms::SynonymIndex;
use crate::models::{MatchResult, MatchThresholds, MatchWeights, ProfileData};

/// A scored candidate, tied back to its position in the caller's list.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// Index into the candidate slice passed to the matcher.
    pub index: usize,
    pub result: MatchResult,
}

impl RankedCandidate {
    fn score(&self) -> Option<u8> {
        self.result.match_score
    }
}

/// Main matching orchestrator.
///
/// Owns the weight table, thresholds, and synonym index so callers score
/// pairs without re-threading configuration. Everything inside is immutable
/// after construction; a `Matcher` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchWeights,
    thresholds: MatchThresholds,
    synonyms: SynonymIndex,
}

impl Matcher {
    pub fn new(weights: MatchWeights, thresholds: MatchThresholds, synonyms: SynonymIndex) -> Self {
        Self {
            weights,
            thresholds,
            synonyms,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(
            MatchWeights::default(),
            MatchThresholds::default(),
            SynonymIndex::with_defaults(),
        )
    }

    /// Default thresholds and synonyms with a caller-supplied weight table.
    pub fn with_weights(weights: MatchWeights) -> Self {
        Self::new(
            weights,
            MatchThresholds::default(),
            SynonymIndex::with_defaults(),
        )
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn synonyms(&self) -> &SynonymIndex {
        &self.synonyms
    }

    /// Score one ordered pair of profiles.
    pub fn calculate_match(&self, a: &ProfileData, b: &ProfileData) -> MatchResult {
        calculate_match_score(a, b, &self.weights, &self.thresholds, &self.synonyms)
    }

    /// Score one pair with a per-call weight override.
    pub fn calculate_match_with_weights(
        &self,
        a: &ProfileData,
        b: &ProfileData,
        weights: &MatchWeights,
    ) -> MatchResult {
        calculate_match_score(a, b, weights, &self.thresholds, &self.synonyms)
    }

    fn score_all(&self, profile: &ProfileData, candidates: &[ProfileData]) -> Vec<RankedCandidate> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| RankedCandidate {
                index,
                result: self.calculate_match(profile, candidate),
            })
            .collect()
    }

    /// Score every candidate against `profile`, drop everything below
    /// `min_score` (and everything insufficient), sort best-first, and cap
    /// at `limit`.
    pub fn rank_candidates(
        &self,
        profile: &ProfileData,
        candidates: &[ProfileData],
        min_score: u8,
        limit: usize,
    ) -> Vec<RankedCandidate> {
        let scored = self.score_all(profile, candidates);
        let mut ranked = filter_by_min_score(scored, min_score, RankedCandidate::score);
        sort_by_match_score(&mut ranked, RankedCandidate::score);
        ranked.truncate(limit);

        tracing::debug!(
            candidates = candidates.len(),
            returned = ranked.len(),
            min_score,
            "ranked candidates"
        );
        ranked
    }

    /// Discovery feed: a quality-biased but varied sample of `count`
    /// scoreable candidates, drawn by score-weighted roulette.
    pub fn discovery_feed<R: Rng + ?Sized>(
        &self,
        profile: &ProfileData,
        candidates: &[ProfileData],
        count: usize,
        rng: &mut R,
    ) -> Vec<RankedCandidate> {
        let scored: Vec<RankedCandidate> = self
            .score_all(profile, candidates)
            .into_iter()
            .filter(|c| !c.result.match_data_insufficient)
            .collect();

        weighted_random_select(scored, count, RankedCandidate::score, rng)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
