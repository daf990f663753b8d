// Unit tests for the study-match engine

use study_match::core::{
    distance::{haversine_distance, location_proximity},
    scorers::{skill_level_closeness, timezone_proximity},
    search::match_score,
    selection::weighted_random_select,
    similarity::calculate_similarity,
    terms::{jaccard, smart_jaccard},
    SearchEngine, SearchOptions, SynonymIndex,
};
use study_match::models::{MatchTier, MatchWeights, ProfileData};
use study_match::Matcher;

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_jaccard_empty_sets_score_zero() {
    assert_eq!(jaccard(&[], &[]), 0.0);
}

#[test]
fn test_jaccard_identical_singletons() {
    assert_eq!(jaccard(&tags(&["math"]), &tags(&["math"])), 1.0);
}

#[test]
fn test_jaccard_symmetry() {
    let cases = [
        (tags(&["math", "physics"]), tags(&["physics"])),
        (tags(&["a", "b", "c"]), tags(&["d"])),
        (tags(&[]), tags(&["x"])),
    ];
    for (a, b) in &cases {
        assert_eq!(jaccard(a, b), jaccard(b, a));
    }
}

#[test]
fn test_smart_jaccard_synonym_only_match() {
    let index = SynonymIndex::with_defaults();
    let result = smart_jaccard(&tags(&["math"]), &tags(&["calculus"]), &index);

    assert!(result.score > 0.0);
    assert!(result.direct_matches.is_empty());
    assert_eq!(result.synonym_matches, vec!["math".to_string()]);
}

#[test]
fn test_skill_level_closeness_ladder() {
    assert_eq!(skill_level_closeness("BEGINNER", "BEGINNER"), 1.0);
    assert_eq!(skill_level_closeness("BEGINNER", "ADVANCED"), 0.4);
    assert_eq!(skill_level_closeness("BEGINNER", "EXPERT"), 0.0);
}

#[test]
fn test_same_city_wins_over_coordinates() {
    // London vs New York coordinates, but the same city string
    let result = location_proximity(
        Some(51.5074),
        Some(-0.1278),
        Some(40.7128),
        Some(-74.0060),
        Some("Springfield"),
        Some("SPRINGFIELD"),
        None,
        None,
    );
    assert_eq!(result.score, 1.0);
    assert_eq!(result.distance_km, Some(0.0));
}

#[test]
fn test_haversine_london_paris() {
    let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
    assert!((distance - 344.0).abs() < 10.0);
}

#[test]
fn test_timezone_neutral_when_unparseable() {
    let result = timezone_proximity("Mars/Olympus", "Europe/Berlin");
    assert_eq!(result.score, 0.5);
}

#[test]
fn test_identical_core_profiles_match_well() {
    let profile = ProfileData {
        subjects: tags(&["math", "physics"]),
        interests: tags(&["chess"]),
        skill_level: Some("INTERMEDIATE".to_string()),
        study_style: Some("VISUAL".to_string()),
        available_days: tags(&["Mon", "Wed"]),
        ..Default::default()
    };
    let matcher = Matcher::with_default_weights();

    let result = matcher.calculate_match(&profile, &profile.clone());

    assert!(!result.match_data_insufficient);
    assert!(matches!(
        result.match_tier,
        MatchTier::Good | MatchTier::Excellent
    ));
    assert!(result.match_reasons.iter().any(|r| r.contains("subjects")));
}

#[test]
fn test_age_only_profile_is_insufficient() {
    let sparse = ProfileData {
        age: Some(20),
        ..Default::default()
    };
    let full = ProfileData {
        subjects: tags(&["math"]),
        interests: tags(&["chess"]),
        skill_level: Some("BEGINNER".to_string()),
        ..Default::default()
    };
    let matcher = Matcher::with_default_weights();

    let result = matcher.calculate_match(&sparse, &full);
    assert!(result.match_data_insufficient);
    assert_eq!(result.match_score, None);
}

#[test]
fn test_weighted_select_returns_whole_list_when_count_covers_it() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let items: Vec<(u32, Option<u8>)> = vec![(0, Some(80)), (1, Some(20)), (2, None)];
    let mut rng = StdRng::seed_from_u64(99);
    let picked = weighted_random_select(items.clone(), 3, |(_, s)| *s, &mut rng);
    assert_eq!(picked, items);

    let mut rng = StdRng::seed_from_u64(99);
    let picked = weighted_random_select(items.clone(), 10, |(_, s)| *s, &mut rng);
    assert_eq!(picked, items);
}

#[test]
fn test_calculate_similarity_endpoints() {
    assert_eq!(calculate_similarity("hello", "hello"), 1.0);
    assert_eq!(calculate_similarity("", "x"), 0.0);
}

#[test]
fn test_empty_query_matches_everything() {
    let engine = SearchEngine::with_defaults();
    let outcome = engine.smart_search("", &["any target text"], SearchOptions::default());
    assert!(outcome.matches);
    assert_eq!(outcome.score, 100);
}

#[test]
fn test_match_score_tiers_are_ordered() {
    let exact = match_score("physics", "physics");
    let contains = match_score("physics", "physics study group");
    let word = match_score("quantum physics homework", "physics and chemistry");
    let nothing = match_score("pottery", "accounting");

    assert_eq!(exact, 100);
    assert_eq!(contains, 90);
    assert!(word > nothing);
    assert!(contains > word);
    assert_eq!(nothing, 0);
}

#[test]
fn test_default_weight_table() {
    let weights = MatchWeights::default();
    assert_eq!(weights.subjects, 0.24);
    assert_eq!(weights.interests, 0.15);
    assert_eq!(weights.goals, 0.12);
    assert_eq!(weights.available_days, 0.09);
    assert_eq!(weights.available_hours, 0.06);
    assert_eq!(weights.skill_level, 0.06);
    assert_eq!(weights.location, 0.06);
    assert_eq!(weights.languages, 0.06);
    assert_eq!(weights.role, 0.04);
    assert_eq!(weights.study_style, 0.04);
    assert_eq!(weights.strengths_weaknesses, 0.03);
    assert_eq!(weights.school, 0.03);
    assert_eq!(weights.timezone, 0.02);
    assert!((weights.sum() - 1.0).abs() < 1e-9);
}
