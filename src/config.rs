use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::{Matcher, SynonymIndex};
use crate::models::{MatchThresholds, MatchWeights, TierCutoffs};

/// Errors from loading or validating engine settings.
///
/// The scoring engine itself never errors; this is the one fallible surface
/// of the crate.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid weight table: {0}")]
    InvalidWeights(String),

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),
}

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_fields")]
    pub min_fields_for_matching: usize,
    #[serde(default = "default_excellent_cutoff")]
    pub excellent_cutoff: u8,
    #[serde(default = "default_good_cutoff")]
    pub good_cutoff: u8,
    #[serde(default = "default_fair_cutoff")]
    pub fair_cutoff: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_fields_for_matching: default_min_fields(),
            excellent_cutoff: default_excellent_cutoff(),
            good_cutoff: default_good_cutoff(),
            fair_cutoff: default_fair_cutoff(),
        }
    }
}

fn default_min_fields() -> usize { 3 }
fn default_excellent_cutoff() -> u8 { 85 }
fn default_good_cutoff() -> u8 { 70 }
fn default_fair_cutoff() -> u8 { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_subjects_weight")]
    pub subjects: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_goals_weight")]
    pub goals: f64,
    #[serde(default = "default_available_days_weight")]
    pub available_days: f64,
    #[serde(default = "default_available_hours_weight")]
    pub available_hours: f64,
    #[serde(default = "default_skill_level_weight")]
    pub skill_level: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_languages_weight")]
    pub languages: f64,
    #[serde(default = "default_role_weight")]
    pub role: f64,
    #[serde(default = "default_study_style_weight")]
    pub study_style: f64,
    #[serde(default = "default_strengths_weaknesses_weight")]
    pub strengths_weaknesses: f64,
    #[serde(default = "default_school_weight")]
    pub school: f64,
    #[serde(default = "default_timezone_weight")]
    pub timezone: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            subjects: default_subjects_weight(),
            interests: default_interests_weight(),
            goals: default_goals_weight(),
            available_days: default_available_days_weight(),
            available_hours: default_available_hours_weight(),
            skill_level: default_skill_level_weight(),
            location: default_location_weight(),
            languages: default_languages_weight(),
            role: default_role_weight(),
            study_style: default_study_style_weight(),
            strengths_weaknesses: default_strengths_weaknesses_weight(),
            school: default_school_weight(),
            timezone: default_timezone_weight(),
        }
    }
}

fn default_subjects_weight() -> f64 { 0.24 }
fn default_interests_weight() -> f64 { 0.15 }
fn default_goals_weight() -> f64 { 0.12 }
fn default_available_days_weight() -> f64 { 0.09 }
fn default_available_hours_weight() -> f64 { 0.06 }
fn default_skill_level_weight() -> f64 { 0.06 }
fn default_location_weight() -> f64 { 0.06 }
fn default_languages_weight() -> f64 { 0.06 }
fn default_role_weight() -> f64 { 0.04 }
fn default_study_style_weight() -> f64 { 0.04 }
fn default_strengths_weaknesses_weight() -> f64 { 0.03 }
fn default_school_weight() -> f64 { 0.03 }
fn default_timezone_weight() -> f64 { 0.02 }

impl From<&WeightsConfig> for MatchWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            subjects: config.subjects,
            interests: config.interests,
            goals: config.goals,
            available_days: config.available_days,
            available_hours: config.available_hours,
            skill_level: config.skill_level,
            location: config.location,
            languages: config.languages,
            role: config.role,
            study_style: config.study_style,
            strengths_weaknesses: config.strengths_weaknesses,
            school: config.school,
            timezone: config.timezone,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with STUDYMATCH_)
    ///    e.g. STUDYMATCH_SCORING__WEIGHTS__SUBJECTS -> scoring.weights.subjects
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("STUDYMATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STUDYMATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let weights = self.weights();
        if !weights.is_valid() {
            return Err(SettingsError::InvalidWeights(
                "weights must be non-negative with a positive sum".to_string(),
            ));
        }

        let m = &self.matching;
        if m.fair_cutoff >= m.good_cutoff || m.good_cutoff >= m.excellent_cutoff {
            return Err(SettingsError::InvalidThresholds(format!(
                "tier cutoffs must be strictly increasing, got fair={} good={} excellent={}",
                m.fair_cutoff, m.good_cutoff, m.excellent_cutoff
            )));
        }
        if m.min_fields_for_matching == 0 {
            return Err(SettingsError::InvalidThresholds(
                "min_fields_for_matching must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn weights(&self) -> MatchWeights {
        MatchWeights::from(&self.scoring.weights)
    }

    pub fn thresholds(&self) -> MatchThresholds {
        MatchThresholds {
            min_fields_for_matching: self.matching.min_fields_for_matching,
            tiers: TierCutoffs {
                excellent: self.matching.excellent_cutoff,
                good: self.matching.good_cutoff,
                fair: self.matching.fair_cutoff,
            },
            ..Default::default()
        }
    }

    /// Build a [`Matcher`] configured from these settings.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.weights(), self.thresholds(), SynonymIndex::with_defaults())
    }
}
