use std::collections::BTreeMap;

use crate::core::distance::location_proximity;
use crate::core::scorers::{
    exact_match, skill_level_closeness, strengths_weaknesses_complement,
    study_style_compatibility, timezone_proximity,
};
use crate::core::synonyms::SynonymIndex;
use crate::core::terms::{get_intersection, jaccard, smart_jaccard};
use crate::models::{
    has_items, has_text, ComponentDetail, ComponentScore, MatchResult, MatchSummary,
    MatchThresholds, MatchTier, MatchWeights, ProfileData,
};

/// Maximum number of reasons surfaced on a match result.
const MAX_REASONS: usize = 5;

/// Component keys in weight-table order. Stable: clients key off these.
const KEY_SUBJECTS: &str = "subjects";
const KEY_INTERESTS: &str = "interests";
const KEY_GOALS: &str = "goals";
const KEY_AVAILABLE_DAYS: &str = "availableDays";
const KEY_AVAILABLE_HOURS: &str = "availableHours";
const KEY_SKILL_LEVEL: &str = "skillLevel";
const KEY_LOCATION: &str = "location";
const KEY_LANGUAGES: &str = "languages";
const KEY_ROLE: &str = "role";
const KEY_STUDY_STYLE: &str = "studyStyle";
const KEY_STRENGTHS_WEAKNESSES: &str = "strengthsWeaknesses";
const KEY_SCHOOL: &str = "school";
const KEY_TIMEZONE: &str = "timezone";

/// Compare two profiles and produce a full, explainable match result.
///
/// Scoring formula (over components with data on BOTH sides):
///
/// ```text
/// raw   = 100 * Σ(score_i * weight_i) / Σ(weight_i)
/// final = clamp(raw * confidence, 0, 100)
/// ```
///
/// where `confidence = 0.85 + 0.05 * active_count` for fewer than
/// `full_confidence_components` active components, capped at 1.0. Two
/// data-sufficiency gates can short-circuit to an insufficient result
/// instead of a number; see [`MatchThresholds`].
pub fn calculate_match_score(
    a: &ProfileData,
    b: &ProfileData,
    weights: &MatchWeights,
    thresholds: &MatchThresholds,
    synonyms: &SynonymIndex,
) -> MatchResult {
    let missing_a = a.missing_fields();
    let missing_b = b.missing_fields();

    // Gate 1: both profiles need a minimum of filled fields, and at least
    // one side must carry the core tag data the match is built around.
    let filled_a = a.filled_field_count();
    let filled_b = b.filled_field_count();
    if filled_a < thresholds.min_fields_for_matching
        || filled_b < thresholds.min_fields_for_matching
        || (!a.has_subjects_or_interests() && !b.has_subjects_or_interests())
    {
        tracing::debug!(
            filled_a,
            filled_b,
            min = thresholds.min_fields_for_matching,
            "match gated: not enough profile data"
        );
        return insufficient_result(missing_a, missing_b);
    }

    let components = build_components(a, b, weights, synonyms);

    let active: Vec<&(&'static str, ComponentScore)> = components
        .iter()
        .filter(|(_, c)| c.both_have_data)
        .collect();
    let is_active =
        |key: &str| -> bool { active.iter().any(|(k, _)| *k == key) };

    // Gate 2: a profile can clear the field count with attributes that say
    // nothing about compatibility. Require real overlap in what was filled.
    if active.len() < thresholds.min_active_components
        || (!is_active(KEY_SUBJECTS) && !is_active(KEY_INTERESTS))
    {
        tracing::debug!(
            active = active.len(),
            "match gated: too few comparable components"
        );
        return insufficient_result(missing_a, missing_b);
    }

    let weight_sum: f64 = active.iter().map(|(_, c)| c.weight).sum();
    let weighted_sum: f64 = active.iter().map(|(_, c)| c.weighted_score).sum();
    let raw_score = if weight_sum > f64::EPSILON {
        100.0 * weighted_sum / weight_sum
    } else {
        0.0
    };

    // Scores built on very few signals are less trustworthy; pull them
    // toward the middle. Reaches 1.0 at three active components already,
    // although four is the nominal full-confidence count.
    let confidence = if active.len() < thresholds.full_confidence_components {
        (0.85 + 0.05 * active.len() as f64).min(1.0)
    } else {
        1.0
    };

    let final_score = (raw_score * confidence).round().clamp(0.0, 100.0) as u8;
    let tier = tier_for(final_score, thresholds);

    let mut reason_entries: Vec<(&str, f64)> = active
        .iter()
        .filter(|(_, c)| c.score > 0.0 && !c.match_items.is_empty())
        .map(|(_, c)| (c.details.as_str(), c.weighted_score))
        .collect();
    reason_entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let match_reasons: Vec<String> = reason_entries
        .iter()
        .take(MAX_REASONS)
        .map(|(details, _)| (*details).to_string())
        .collect();

    let matched_components = active.iter().filter(|(_, c)| c.score > 0.0).count();
    let active_components = active.len();

    let match_details: BTreeMap<String, ComponentDetail> = components
        .iter()
        .map(|(key, c)| {
            (
                (*key).to_string(),
                ComponentDetail {
                    shared_count: c.match_items.len(),
                    items: c.match_items.clone(),
                    score_percent: (c.score * 100.0).round().clamp(0.0, 100.0) as u8,
                    has_data: c.both_have_data,
                },
            )
        })
        .collect();

    let component_scores: BTreeMap<String, ComponentScore> = components
        .into_iter()
        .map(|(key, c)| (key.to_string(), c))
        .collect();

    let summary = MatchSummary {
        matched_components,
        active_components,
        top_reasons: match_reasons.iter().take(3).cloned().collect(),
        missing_fields_a: missing_a.iter().take(3).cloned().collect(),
        missing_fields_b: missing_b.iter().take(3).cloned().collect(),
        compatibility: tier.compatibility_label().to_string(),
    };

    tracing::debug!(
        score = final_score,
        active = active_components,
        matched = matched_components,
        "match scored"
    );

    MatchResult {
        match_score: Some(final_score),
        match_data_insufficient: false,
        match_reasons,
        match_details,
        component_scores,
        match_tier: tier,
        missing_fields_a: missing_a,
        missing_fields_b: missing_b,
        summary,
    }
}

fn tier_for(score: u8, thresholds: &MatchThresholds) -> MatchTier {
    let tiers = &thresholds.tiers;
    if score >= tiers.excellent {
        MatchTier::Excellent
    } else if score >= tiers.good {
        MatchTier::Good
    } else if score >= tiers.fair {
        MatchTier::Fair
    } else {
        MatchTier::Low
    }
}

/// The insufficient-data sentinel. Not an error: it tells the caller to
/// prompt for profile completion, which is why the missing-field lists are
/// still populated.
fn insufficient_result(missing_a: Vec<String>, missing_b: Vec<String>) -> MatchResult {
    let summary = MatchSummary {
        matched_components: 0,
        active_components: 0,
        top_reasons: Vec::new(),
        missing_fields_a: missing_a.iter().take(3).cloned().collect(),
        missing_fields_b: missing_b.iter().take(3).cloned().collect(),
        compatibility: MatchTier::Insufficient.compatibility_label().to_string(),
    };

    MatchResult {
        match_score: None,
        match_data_insufficient: true,
        match_reasons: Vec::new(),
        match_details: BTreeMap::new(),
        component_scores: BTreeMap::new(),
        match_tier: MatchTier::Insufficient,
        missing_fields_a: missing_a,
        missing_fields_b: missing_b,
        summary,
    }
}

fn build_components(
    a: &ProfileData,
    b: &ProfileData,
    weights: &MatchWeights,
    synonyms: &SynonymIndex,
) -> Vec<(&'static str, ComponentScore)> {
    vec![
        (
            KEY_SUBJECTS,
            smart_tag_component(&a.subjects, &b.subjects, weights.subjects, "subjects", synonyms),
        ),
        (
            KEY_INTERESTS,
            smart_tag_component(
                &a.interests,
                &b.interests,
                weights.interests,
                "interests",
                synonyms,
            ),
        ),
        (
            KEY_GOALS,
            smart_tag_component(&a.goals, &b.goals, weights.goals, "goals", synonyms),
        ),
        (
            KEY_AVAILABLE_DAYS,
            plain_tag_component(
                &a.available_days,
                &b.available_days,
                weights.available_days,
                "study days",
            ),
        ),
        (
            KEY_AVAILABLE_HOURS,
            plain_tag_component(
                &a.available_hours,
                &b.available_hours,
                weights.available_hours,
                "study hours",
            ),
        ),
        (KEY_SKILL_LEVEL, skill_level_component(a, b, weights.skill_level)),
        (KEY_LOCATION, location_component(a, b, weights.location)),
        (
            KEY_LANGUAGES,
            plain_tag_component(&a.languages, &b.languages, weights.languages, "languages"),
        ),
        (KEY_ROLE, equality_component(&a.role, &b.role, weights.role, "role")),
        (KEY_STUDY_STYLE, study_style_component(a, b, weights.study_style)),
        (
            KEY_STRENGTHS_WEAKNESSES,
            strengths_component(a, b, weights.strengths_weaknesses),
        ),
        (
            KEY_SCHOOL,
            equality_component(&a.school, &b.school, weights.school, "school"),
        ),
        (KEY_TIMEZONE, timezone_component(a, b, weights.timezone)),
    ]
}

/// Synonym-aware tag comparison for subjects/interests/goals.
fn smart_tag_component(
    a_tags: &[String],
    b_tags: &[String],
    weight: f64,
    label: &str,
    synonyms: &SynonymIndex,
) -> ComponentScore {
    if !has_items(a_tags) || !has_items(b_tags) {
        return ComponentScore::inactive(weight);
    }

    let result = smart_jaccard(a_tags, b_tags, synonyms);
    let details = match (result.direct_matches.is_empty(), result.synonym_matches.is_empty()) {
        (true, true) => format!("No overlapping {}", label),
        (false, true) => format!("Shared {}: {}", label, result.direct_matches.join(", ")),
        (true, false) => format!("Related {}: {}", label, result.synonym_matches.join(", ")),
        (false, false) => format!(
            "Shared {}: {} (plus related: {})",
            label,
            result.direct_matches.join(", "),
            result.synonym_matches.join(", ")
        ),
    };

    let mut match_items = result.direct_matches;
    match_items.extend(result.synonym_matches);

    ComponentScore::active(result.score, weight, details, match_items)
}

/// Plain Jaccard comparison for schedule and language lists.
fn plain_tag_component(
    a_tags: &[String],
    b_tags: &[String],
    weight: f64,
    label: &str,
) -> ComponentScore {
    if !has_items(a_tags) || !has_items(b_tags) {
        return ComponentScore::inactive(weight);
    }

    let score = jaccard(a_tags, b_tags);
    let shared = get_intersection(a_tags, b_tags);
    let details = if shared.is_empty() {
        format!("No overlapping {}", label)
    } else {
        format!("Overlapping {}: {}", label, shared.join(", "))
    };

    ComponentScore::active(score, weight, details, shared)
}

fn skill_level_component(a: &ProfileData, b: &ProfileData, weight: f64) -> ComponentScore {
    let (level_a, level_b) = match (a.skill_level.as_deref(), b.skill_level.as_deref()) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => (a.trim(), b.trim()),
        _ => return ComponentScore::inactive(weight),
    };

    let score = skill_level_closeness(level_a, level_b);
    let same = level_a.eq_ignore_ascii_case(level_b);
    let (details, match_items) = if score == 0.0 {
        ("Skill levels far apart".to_string(), Vec::new())
    } else if same {
        (
            format!("Same skill level ({})", level_a),
            vec![level_a.to_string()],
        )
    } else if score >= 0.7 {
        (
            format!("Similar skill levels ({} and {})", level_a, level_b),
            vec![level_a.to_string(), level_b.to_string()],
        )
    } else {
        (
            format!("Different skill levels ({} and {})", level_a, level_b),
            vec![level_a.to_string(), level_b.to_string()],
        )
    };

    ComponentScore::active(score, weight, details, match_items)
}

fn study_style_component(a: &ProfileData, b: &ProfileData, weight: f64) -> ComponentScore {
    let (style_a, style_b) = match (a.study_style.as_deref(), b.study_style.as_deref()) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => (a.trim(), b.trim()),
        _ => return ComponentScore::inactive(weight),
    };

    let score = study_style_compatibility(style_a, style_b);
    let (details, match_items) = if score == 1.0 {
        (
            format!("Same study style ({})", style_a),
            vec![style_a.to_string()],
        )
    } else if score == 0.7 {
        (
            format!("Compatible study styles ({} and {})", style_a, style_b),
            vec![style_a.to_string(), style_b.to_string()],
        )
    } else if score > 0.0 {
        (
            format!("Different study styles ({} and {})", style_a, style_b),
            vec![style_a.to_string(), style_b.to_string()],
        )
    } else {
        ("Study style not recognized".to_string(), Vec::new())
    };

    ComponentScore::active(score, weight, details, match_items)
}

fn location_component(a: &ProfileData, b: &ProfileData, weight: f64) -> ComponentScore {
    if !a.has_location() || !b.has_location() {
        return ComponentScore::inactive(weight);
    }

    let result = location_proximity(
        a.location_lat,
        a.location_lng,
        b.location_lat,
        b.location_lng,
        a.location_city.as_deref(),
        b.location_city.as_deref(),
        a.location_country.as_deref(),
        b.location_country.as_deref(),
    );

    let (details, match_items) = if result.same_city {
        let city = a
            .location_city
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();
        (format!("Same city ({})", city), vec![city])
    } else if let Some(distance) = result.distance_km {
        let label = format!("~{:.0} km apart", distance);
        (format!("About {:.0} km apart", distance), vec![label])
    } else if result.same_country {
        let country = a
            .location_country
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();
        (format!("Same country ({})", country), vec![country])
    } else {
        ("No location overlap".to_string(), Vec::new())
    };

    ComponentScore::active(result.score, weight, details, match_items)
}

fn timezone_component(a: &ProfileData, b: &ProfileData, weight: f64) -> ComponentScore {
    let (tz_a, tz_b) = match (a.timezone.as_deref(), b.timezone.as_deref()) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => (a.trim(), b.trim()),
        _ => return ComponentScore::inactive(weight),
    };

    let result = timezone_proximity(tz_a, tz_b);
    let (details, match_items) = match result.offset_hours {
        Some(0) => (
            format!("Same timezone ({})", tz_a),
            vec![tz_a.to_string()],
        ),
        Some(delta) => (
            format!("{} hour(s) apart", delta),
            vec![tz_a.to_string(), tz_b.to_string()],
        ),
        // unknown formats score neutral and never surface as a reason
        None => ("Timezones not comparable".to_string(), Vec::new()),
    };

    ComponentScore::active(result.score, weight, details, match_items)
}

/// Exact-equality component for scalar text attributes (school, role).
fn equality_component(
    a_value: &Option<String>,
    b_value: &Option<String>,
    weight: f64,
    label: &str,
) -> ComponentScore {
    if !has_text(a_value) || !has_text(b_value) {
        return ComponentScore::inactive(weight);
    }
    let a_str = a_value.as_deref().unwrap_or_default().trim();
    let b_str = b_value.as_deref().unwrap_or_default().trim();

    let score = exact_match(a_str, b_str);
    let (details, match_items) = if score > 0.0 {
        (format!("Same {} ({})", label, a_str), vec![a_str.to_string()])
    } else {
        (format!("Different {}", label), Vec::new())
    };

    ComponentScore::active(score, weight, details, match_items)
}

fn strengths_component(a: &ProfileData, b: &ProfileData, weight: f64) -> ComponentScore {
    let a_has = has_items(&a.strengths) || has_items(&a.weaknesses);
    let b_has = has_items(&b.strengths) || has_items(&b.weaknesses);
    if !a_has || !b_has {
        return ComponentScore::inactive(weight);
    }

    let (score, matched) =
        strengths_weaknesses_complement(&a.strengths, &a.weaknesses, &b.strengths, &b.weaknesses);
    let details = if matched.is_empty() {
        "No complementary strengths".to_string()
    } else {
        format!("Complementary strengths: {}", matched.join(", "))
    };

    ComponentScore::active(score, weight, details, matched)
}
