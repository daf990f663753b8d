// Criterion benchmarks for the study-match engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use study_match::core::{
    distance::haversine_distance, similarity::calculate_similarity, terms::smart_jaccard,
    SearchEngine, SearchOptions, SynonymIndex,
};
use study_match::{Matcher, ProfileData};

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_profile(seed: usize) -> ProfileData {
    let subject_pool = [
        "math", "physics", "chemistry", "biology", "computer science", "history", "economics",
    ];
    let interest_pool = ["chess", "hiking", "gaming", "reading", "music", "cooking"];
    let levels = ["BEGINNER", "INTERMEDIATE", "ADVANCED", "EXPERT"];
    let styles = ["VISUAL", "AUDITORY", "COLLABORATIVE", "MIXED"];

    ProfileData {
        subjects: tags(&[
            subject_pool[seed % subject_pool.len()],
            subject_pool[(seed + 2) % subject_pool.len()],
        ]),
        interests: tags(&[interest_pool[seed % interest_pool.len()]]),
        goals: tags(&["pass finals"]),
        available_days: tags(&["Mon", "Wed", "Fri"]),
        skill_level: Some(levels[seed % levels.len()].to_string()),
        study_style: Some(styles[seed % styles.len()].to_string()),
        timezone: Some(format!("UTC+{}", seed % 12)),
        location_lat: Some(40.0 + (seed as f64 * 0.01) % 10.0),
        location_lng: Some(-74.0 + (seed as f64 * 0.01) % 10.0),
        location_country: Some("USA".to_string()),
        ..Default::default()
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.72),
                black_box(-74.01),
            )
        });
    });
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("calculate_similarity", |b| {
        b.iter(|| calculate_similarity(black_box("chemstry"), black_box("chemistry")));
    });
}

fn bench_smart_jaccard(c: &mut Criterion) {
    let index = SynonymIndex::with_defaults();
    let a = tags(&["math", "physics", "chem", "bio"]);
    let b_tags = tags(&["calculus", "mechanics", "art", "ecology"]);

    c.bench_function("smart_jaccard", |b| {
        b.iter(|| smart_jaccard(black_box(&a), black_box(&b_tags), &index));
    });
}

fn bench_calculate_match(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile_a = create_profile(1);
    let profile_b = create_profile(4);

    c.bench_function("calculate_match", |b| {
        b.iter(|| matcher.calculate_match(black_box(&profile_a), black_box(&profile_b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile(0);

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500].iter() {
        let candidates: Vec<ProfileData> =
            (0..*candidate_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank_candidates(
                        black_box(&profile),
                        black_box(&candidates),
                        black_box(5),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_smart_search(c: &mut Criterion) {
    let engine = SearchEngine::with_defaults();
    let fields = [
        "Calculus study circle",
        "We meet twice a week to work through problem sets",
    ];

    c.bench_function("smart_search", |b| {
        b.iter(|| {
            engine.smart_search(
                black_box("math help"),
                black_box(&fields),
                SearchOptions::default(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_similarity,
    bench_smart_jaccard,
    bench_calculate_match,
    bench_ranking,
    bench_smart_search
);

criterion_main!(benches);
