//! Independent per-attribute scorers fed into the match aggregator.
//!
//! Every scorer degrades gracefully: unrecognized labels score 0 and
//! unparseable timezones fall back to a neutral score. Nothing here errors.

use crate::core::terms::get_intersection;

/// Ordinal rank of a recognized skill level, 0-3.
fn skill_level_rank(level: &str) -> Option<u8> {
    match level.trim().to_uppercase().as_str() {
        "BEGINNER" => Some(0),
        "INTERMEDIATE" => Some(1),
        "ADVANCED" => Some(2),
        "EXPERT" => Some(3),
        _ => None,
    }
}

/// Ordinal closeness of two skill levels.
///
/// Equal rank scores 1.0, adjacent 0.7, two apart 0.4, three apart 0.
/// Unrecognized labels score 0.
pub fn skill_level_closeness(a: &str, b: &str) -> f64 {
    let (rank_a, rank_b) = match (skill_level_rank(a), skill_level_rank(b)) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    match rank_a.abs_diff(rank_b) {
        0 => 1.0,
        1 => 0.7,
        2 => 0.4,
        _ => 0.0,
    }
}

const STUDY_STYLES: [&str; 8] = [
    "VISUAL",
    "AUDITORY",
    "KINESTHETIC",
    "READING_WRITING",
    "COLLABORATIVE",
    "INDEPENDENT",
    "SOLO",
    "MIXED",
];

/// Hand-authored compatibility lists: styles that pair well without being
/// identical. MIXED pairs with everything.
fn compatible_styles(style: &str) -> &'static [&'static str] {
    match style {
        "VISUAL" => &["MIXED", "READING_WRITING"],
        "AUDITORY" => &["MIXED", "COLLABORATIVE"],
        "KINESTHETIC" => &["MIXED", "COLLABORATIVE"],
        "READING_WRITING" => &["MIXED", "VISUAL", "INDEPENDENT"],
        "COLLABORATIVE" => &["MIXED", "AUDITORY", "KINESTHETIC"],
        "INDEPENDENT" => &["MIXED", "SOLO", "READING_WRITING"],
        "SOLO" => &["MIXED", "INDEPENDENT"],
        "MIXED" => &[
            "VISUAL",
            "AUDITORY",
            "KINESTHETIC",
            "READING_WRITING",
            "COLLABORATIVE",
            "INDEPENDENT",
            "SOLO",
        ],
        _ => &[],
    }
}

fn normalize_style(style: &str) -> String {
    style.trim().to_uppercase().replace([' ', '-'], "_")
}

/// Study-style pairing score: 1.0 identical, 0.7 listed-compatible,
/// 0.3 different-but-not-incompatible, 0 for unrecognized labels.
pub fn study_style_compatibility(a: &str, b: &str) -> f64 {
    let style_a = normalize_style(a);
    let style_b = normalize_style(b);

    if !STUDY_STYLES.contains(&style_a.as_str()) || !STUDY_STYLES.contains(&style_b.as_str()) {
        return 0.0;
    }
    if style_a == style_b {
        return 1.0;
    }
    if compatible_styles(&style_a).contains(&style_b.as_str()) {
        return 0.7;
    }
    0.3
}

/// Outcome of the timezone proximity scorer.
#[derive(Debug, Clone)]
pub struct TimezoneScore {
    pub score: f64,
    /// Absolute hour difference, when both offsets could be determined.
    pub offset_hours: Option<i32>,
}

/// Parse a UTC offset in whole hours from strings like "UTC+5", "GMT-3",
/// "+2" or "utc +1". Offsets outside ±14 are rejected.
fn parse_utc_offset(timezone: &str) -> Option<i32> {
    let mut rest = timezone.trim().to_lowercase();
    for prefix in ["utc", "gmt"] {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped.trim_start().to_string();
            break;
        }
    }

    let bytes = rest.as_bytes();
    if bytes.is_empty() {
        // bare "UTC"/"GMT" means offset zero
        return if timezone.trim().is_empty() { None } else { Some(0) };
    }

    let (sign, digits_start) = match bytes[0] {
        b'+' => (1, 1),
        b'-' => (-1, 1),
        b'0'..=b'9' => (1, 0),
        _ => return None,
    };

    let digits: String = rest[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }

    let hours: i32 = digits.parse().ok()?;
    let offset = sign * hours;
    if offset.abs() > 14 {
        return None;
    }
    Some(offset)
}

/// Timezone closeness.
///
/// Identical raw strings score 1.0. Otherwise both strings are parsed for a
/// signed hour offset and scored `max(0, 1 - |Δ|/12)`. When either side
/// cannot be parsed the result is a neutral 0.5: unknown, not penalized.
pub fn timezone_proximity(tz1: &str, tz2: &str) -> TimezoneScore {
    if tz1.trim() == tz2.trim() {
        return TimezoneScore {
            score: 1.0,
            offset_hours: Some(0),
        };
    }

    match (parse_utc_offset(tz1), parse_utc_offset(tz2)) {
        (Some(offset1), Some(offset2)) => {
            let delta = (offset1 - offset2).abs();
            TimezoneScore {
                score: (1.0 - delta as f64 / 12.0).max(0.0),
                offset_hours: Some(delta),
            }
        }
        _ => TimezoneScore {
            score: 0.5,
            offset_hours: None,
        },
    }
}

/// Case-insensitive, trimmed string equality: 1.0 or 0.
pub fn exact_match(a: &str, b: &str) -> f64 {
    if a.trim().to_lowercase() == b.trim().to_lowercase() {
        1.0
    } else {
        0.0
    }
}

/// Complementarity between one side's strengths and the other's weaknesses.
///
/// Matched items are `a.strengths ∩ b.weaknesses` plus
/// `b.strengths ∩ a.weaknesses`; the score is the fraction of all listed
/// weaknesses covered by the other side's strengths, capped at 1.
pub fn strengths_weaknesses_complement(
    a_strengths: &[String],
    a_weaknesses: &[String],
    b_strengths: &[String],
    b_weaknesses: &[String],
) -> (f64, Vec<String>) {
    let mut matched = get_intersection(a_strengths, b_weaknesses);
    for item in get_intersection(b_strengths, a_weaknesses) {
        if !matched
            .iter()
            .any(|m| m.to_lowercase() == item.to_lowercase())
        {
            matched.push(item);
        }
    }

    let weakness_count = a_weaknesses
        .iter()
        .chain(b_weaknesses.iter())
        .filter(|s| !s.trim().is_empty())
        .count();
    let denominator = weakness_count.max(1) as f64;
    let score = (matched.len() as f64 / denominator).min(1.0);

    (score, matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_closeness() {
        assert_eq!(skill_level_closeness("BEGINNER", "BEGINNER"), 1.0);
        assert_eq!(skill_level_closeness("BEGINNER", "INTERMEDIATE"), 0.7);
        assert_eq!(skill_level_closeness("BEGINNER", "ADVANCED"), 0.4);
        assert_eq!(skill_level_closeness("BEGINNER", "EXPERT"), 0.0);
    }

    #[test]
    fn test_skill_level_case_insensitive() {
        assert_eq!(skill_level_closeness("beginner", " Beginner "), 1.0);
    }

    #[test]
    fn test_skill_level_unrecognized() {
        assert_eq!(skill_level_closeness("WIZARD", "BEGINNER"), 0.0);
        assert_eq!(skill_level_closeness("", "EXPERT"), 0.0);
    }

    #[test]
    fn test_study_style_identical() {
        assert_eq!(study_style_compatibility("VISUAL", "visual"), 1.0);
    }

    #[test]
    fn test_study_style_compatible() {
        assert_eq!(study_style_compatibility("VISUAL", "MIXED"), 0.7);
        assert_eq!(study_style_compatibility("VISUAL", "READING_WRITING"), 0.7);
        assert_eq!(study_style_compatibility("reading writing", "visual"), 0.7);
    }

    #[test]
    fn test_study_style_different() {
        assert_eq!(study_style_compatibility("VISUAL", "AUDITORY"), 0.3);
    }

    #[test]
    fn test_study_style_unrecognized() {
        assert_eq!(study_style_compatibility("TELEPATHIC", "VISUAL"), 0.0);
    }

    #[test]
    fn test_mixed_pairs_with_everything() {
        for style in STUDY_STYLES {
            let expected = if style == "MIXED" { 1.0 } else { 0.7 };
            assert_eq!(study_style_compatibility("MIXED", style), expected);
        }
    }

    #[test]
    fn test_timezone_identical_string() {
        let result = timezone_proximity("Europe/Berlin", "Europe/Berlin");
        assert_eq!(result.score, 1.0);
        assert_eq!(result.offset_hours, Some(0));
    }

    #[test]
    fn test_timezone_offset_scoring() {
        let result = timezone_proximity("UTC+2", "UTC-3");
        assert_eq!(result.offset_hours, Some(5));
        assert!((result.score - (1.0 - 5.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_timezone_far_apart_floors_at_zero() {
        let result = timezone_proximity("UTC+12", "UTC-12");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_timezone_unparseable_is_neutral() {
        let result = timezone_proximity("Europe/Berlin", "America/New_York");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.offset_hours, None);
    }

    #[test]
    fn test_parse_utc_offset_variants() {
        assert_eq!(parse_utc_offset("UTC+5"), Some(5));
        assert_eq!(parse_utc_offset("gmt -3"), Some(-3));
        assert_eq!(parse_utc_offset("+2"), Some(2));
        assert_eq!(parse_utc_offset("7"), Some(7));
        assert_eq!(parse_utc_offset("UTC"), Some(0));
        assert_eq!(parse_utc_offset("UTC+99"), None);
        assert_eq!(parse_utc_offset("Europe/Berlin"), None);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(exact_match(" MIT ", "mit"), 1.0);
        assert_eq!(exact_match("MIT", "Stanford"), 0.0);
    }

    #[test]
    fn test_strengths_weaknesses_complement() {
        let (score, matched) = strengths_weaknesses_complement(
            &["Calculus".to_string(), "Essays".to_string()],
            &["Chemistry".to_string()],
            &["Chemistry".to_string()],
            &["Calculus".to_string()],
        );
        // both weaknesses covered
        assert_eq!(score, 1.0);
        assert_eq!(matched.len(), 2);
        assert!(matched.contains(&"Calculus".to_string()));
    }

    #[test]
    fn test_strengths_weaknesses_partial() {
        let (score, matched) = strengths_weaknesses_complement(
            &["Calculus".to_string()],
            &[],
            &[],
            &["Calculus".to_string(), "Physics".to_string()],
        );
        assert_eq!(matched, vec!["Calculus".to_string()]);
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_strengths_weaknesses_no_overlap() {
        let (score, matched) = strengths_weaknesses_complement(
            &["Art".to_string()],
            &["Math".to_string()],
            &["Biology".to_string()],
            &["History".to_string()],
        );
        assert_eq!(score, 0.0);
        assert!(matched.is_empty());
    }
}
