use serde::{Deserialize, Serialize};

/// Per-component weight table for match aggregation.
///
/// Callers may pass their own table per call; the aggregator renormalizes
/// over active components, so the table does not strictly need to sum to
/// 1.0, but the default does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub subjects: f64,
    pub interests: f64,
    pub goals: f64,
    #[serde(rename = "availableDays")]
    pub available_days: f64,
    #[serde(rename = "availableHours")]
    pub available_hours: f64,
    #[serde(rename = "skillLevel")]
    pub skill_level: f64,
    pub location: f64,
    pub languages: f64,
    pub role: f64,
    #[serde(rename = "studyStyle")]
    pub study_style: f64,
    #[serde(rename = "strengthsWeaknesses")]
    pub strengths_weaknesses: f64,
    pub school: f64,
    pub timezone: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            subjects: 0.24,
            interests: 0.15,
            goals: 0.12,
            available_days: 0.09,
            available_hours: 0.06,
            skill_level: 0.06,
            location: 0.06,
            languages: 0.06,
            role: 0.04,
            study_style: 0.04,
            strengths_weaknesses: 0.03,
            school: 0.03,
            timezone: 0.02,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.subjects
            + self.interests
            + self.goals
            + self.available_days
            + self.available_hours
            + self.skill_level
            + self.location
            + self.languages
            + self.role
            + self.study_style
            + self.strengths_weaknesses
            + self.school
            + self.timezone
    }

    /// All entries non-negative and at least one positive.
    pub fn is_valid(&self) -> bool {
        let entries = [
            self.subjects,
            self.interests,
            self.goals,
            self.available_days,
            self.available_hours,
            self.skill_level,
            self.location,
            self.languages,
            self.role,
            self.study_style,
            self.strengths_weaknesses,
            self.school,
            self.timezone,
        ];
        entries.iter().all(|w| *w >= 0.0 && w.is_finite()) && self.sum() > 0.0
    }
}

/// Score cutoffs for the human-facing match tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierCutoffs {
    pub excellent: u8,
    pub good: u8,
    pub fair: u8,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 70,
            fair: 50,
        }
    }
}

/// Data-sufficiency gates and tiering thresholds for the aggregator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Minimum qualifying fields each profile must have filled in.
    #[serde(rename = "minFieldsForMatching")]
    pub min_fields_for_matching: usize,
    /// Minimum components with data on both sides.
    #[serde(rename = "minActiveComponents")]
    pub min_active_components: usize,
    /// Active-component count at which the confidence factor reaches 1.0
    /// without adjustment.
    #[serde(rename = "fullConfidenceComponents")]
    pub full_confidence_components: usize,
    pub tiers: TierCutoffs,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            min_fields_for_matching: 3,
            min_active_components: 2,
            full_confidence_components: 4,
            tiers: TierCutoffs::default(),
        }
    }
}
