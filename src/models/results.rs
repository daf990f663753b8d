use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score for a single compared attribute family.
///
/// Constructed fresh for every comparison; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    /// Raw component score in [0, 1].
    pub score: f64,
    /// Weight from the weight table.
    pub weight: f64,
    /// `score * weight`.
    #[serde(rename = "weightedScore")]
    pub weighted_score: f64,
    /// Human-readable explanation of the component result.
    pub details: String,
    /// The specific overlapping/matching values behind the score.
    #[serde(rename = "matchItems")]
    pub match_items: Vec<String>,
    /// False when either profile lacks this attribute; inactive components
    /// are excluded from aggregation entirely.
    #[serde(rename = "bothHaveData")]
    pub both_have_data: bool,
}

impl ComponentScore {
    /// An active component, scored against data present on both sides.
    pub fn active(score: f64, weight: f64, details: String, match_items: Vec<String>) -> Self {
        Self {
            score,
            weight,
            weighted_score: score * weight,
            details,
            match_items,
            both_have_data: true,
        }
    }

    /// An inactive component: one or both sides lack the attribute.
    /// The weight is preserved so callers can still see the table entry.
    pub fn inactive(weight: f64) -> Self {
        Self {
            score: 0.0,
            weight,
            weighted_score: 0.0,
            details: String::new(),
            match_items: Vec::new(),
            both_have_data: false,
        }
    }
}

/// Coarse, human-facing compatibility bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
    Insufficient,
}

impl MatchTier {
    /// The UI label derived from the tier.
    pub fn compatibility_label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Highly compatible",
            MatchTier::Good => "Very compatible",
            MatchTier::Fair => "Moderately compatible",
            MatchTier::Low => "Low compatibility",
            MatchTier::Insufficient => "Not enough information",
        }
    }
}

/// Fixed UI-friendly restatement of a component, kept stable for
/// backward-compatible consumption by older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDetail {
    #[serde(rename = "sharedCount")]
    pub shared_count: usize,
    pub items: Vec<String>,
    #[serde(rename = "scorePercent")]
    pub score_percent: u8,
    #[serde(rename = "hasData")]
    pub has_data: bool,
}

/// Compact rollup shown at the top of a match card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Active components that actually matched (score > 0).
    #[serde(rename = "matchedComponents")]
    pub matched_components: usize,
    /// Components with data on both sides.
    #[serde(rename = "activeComponents")]
    pub active_components: usize,
    #[serde(rename = "topReasons")]
    pub top_reasons: Vec<String>,
    #[serde(rename = "missingFieldsA")]
    pub missing_fields_a: Vec<String>,
    #[serde(rename = "missingFieldsB")]
    pub missing_fields_b: Vec<String>,
    pub compatibility: String,
}

/// Full result of comparing one ordered pair of profiles.
///
/// Computed on demand; the engine never caches or stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Integer 0-100, or `None` when there is not enough data to score.
    #[serde(rename = "matchScore")]
    pub match_score: Option<u8>,
    #[serde(rename = "matchDataInsufficient")]
    pub match_data_insufficient: bool,
    /// Ranked, human-readable explanations (at most 5).
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "matchDetails")]
    pub match_details: BTreeMap<String, ComponentDetail>,
    #[serde(rename = "componentScores")]
    pub component_scores: BTreeMap<String, ComponentScore>,
    #[serde(rename = "matchTier")]
    pub match_tier: MatchTier,
    #[serde(rename = "missingFieldsA")]
    pub missing_fields_a: Vec<String>,
    #[serde(rename = "missingFieldsB")]
    pub missing_fields_b: Vec<String>,
    pub summary: MatchSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_score_active() {
        let score = ComponentScore::active(0.5, 0.24, "shared".to_string(), vec!["math".into()]);
        assert!((score.weighted_score - 0.12).abs() < 1e-12);
        assert!(score.both_have_data);
    }

    #[test]
    fn test_component_score_inactive_keeps_weight() {
        let score = ComponentScore::inactive(0.15);
        assert_eq!(score.score, 0.0);
        assert_eq!(score.weight, 0.15);
        assert!(!score.both_have_data);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(MatchTier::Excellent.compatibility_label(), "Highly compatible");
        assert_eq!(
            MatchTier::Insufficient.compatibility_label(),
            "Not enough information"
        );
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_string(&MatchTier::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
