//! Free-text search scoring: exact/substring/word-boundary/fuzzy tiers with
//! optional synonym expansion of the query.

use serde::{Deserialize, Serialize};

use crate::core::similarity::calculate_similarity;
use crate::core::synonyms::SynonymIndex;

/// Knobs for [`SearchEngine::smart_search`].
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Expand query tokens through the synonym index before scoring.
    pub expand_synonyms: bool,
    /// Fall back to edit-distance scanning when nothing else matched.
    pub fuzzy_match: bool,
    /// Minimum normalized score for a candidate to count as a match.
    pub min_score: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            expand_synonyms: true,
            fuzzy_match: true,
            min_score: 20,
        }
    }
}

/// Outcome of scoring one candidate against a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub matches: bool,
    /// Normalized 0-100.
    pub score: u8,
    /// The (possibly expanded) terms that hit the candidate's text.
    #[serde(rename = "matchedTerms")]
    pub matched_terms: Vec<String>,
}

/// The text fields of an entity considered by the ranking helper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCandidate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(rename = "skillLevel", default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Tiered relevance of a single search term against a single text.
///
/// Exact match 100; containment 90 (term in text) or 80 (text in term);
/// word-boundary scoring next (2 points per exact word hit, 1 per partial,
/// mapped to `min(70, 40 + points*10)`); finally edit-distance similarity
/// mapped to 60 or 40 points depending on how close it is.
pub fn match_score(search_term: &str, target_text: &str) -> u8 {
    let term = search_term.trim().to_lowercase();
    let target = target_text.trim().to_lowercase();

    if term.is_empty() || target.is_empty() {
        return 0;
    }
    if term == target {
        return 100;
    }
    if target.contains(&term) {
        return 90;
    }
    if term.contains(&target) {
        return 80;
    }

    let term_words: Vec<&str> = term.split_whitespace().collect();
    let target_words: Vec<&str> = target.split_whitespace().collect();
    let mut points = 0u32;
    for term_word in &term_words {
        if target_words.iter().any(|w| w == term_word) {
            points += 2;
        } else if target_words
            .iter()
            .any(|w| w.contains(term_word) || term_word.contains(w))
        {
            points += 1;
        }
    }
    if points > 0 {
        return (40 + points * 10).min(70) as u8;
    }

    let similarity = calculate_similarity(&term, &target);
    if similarity > 0.7 {
        (similarity * 60.0).round() as u8
    } else if similarity > 0.5 {
        (similarity * 40.0).round() as u8
    } else {
        0
    }
}

/// Synonym-aware, typo-tolerant search over a candidate's text fields.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    synonyms: SynonymIndex,
}

impl SearchEngine {
    pub fn new(synonyms: SynonymIndex) -> Self {
        Self { synonyms }
    }

    pub fn with_defaults() -> Self {
        Self::new(SynonymIndex::with_defaults())
    }

    /// Score `target_fields` (concatenated into one haystack) against a
    /// free-text query.
    ///
    /// An empty query matches everything with score 100. Otherwise the
    /// query is tokenized, optionally synonym-expanded, each term scored
    /// with [`match_score`], and the total normalized by term count. When
    /// the normalized score misses `min_score` and fuzzy matching is on,
    /// the query tokens are scanned against individual haystack words and
    /// the first pair above 0.7 similarity rescues the candidate with
    /// `round(similarity * 50)`.
    pub fn smart_search(
        &self,
        query: &str,
        target_fields: &[&str],
        options: SearchOptions,
    ) -> SearchOutcome {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return SearchOutcome {
                matches: true,
                score: 100,
                matched_terms: Vec::new(),
            };
        }

        let tokens: Vec<String> = query.split_whitespace().map(str::to_string).collect();
        let terms: Vec<String> = if options.expand_synonyms {
            let mut expanded: Vec<String> =
                self.synonyms.expand_many(tokens.iter()).into_iter().collect();
            expanded.sort();
            expanded
        } else {
            tokens.clone()
        };

        let haystack = target_fields.join(" ").to_lowercase();

        let mut total = 0u32;
        let mut matched_terms = Vec::new();
        for term in &terms {
            let term_score = match_score(term, &haystack);
            if term_score > 0 {
                matched_terms.push(term.clone());
            }
            total += u32::from(term_score);
        }
        let mut score = if terms.is_empty() {
            0
        } else {
            (total as f64 / terms.len() as f64).round() as u8
        };

        if score < options.min_score && options.fuzzy_match {
            'outer: for token in &tokens {
                for word in haystack.split_whitespace() {
                    let similarity = calculate_similarity(token, word);
                    if similarity > 0.7 {
                        score = (similarity * 50.0).round() as u8;
                        matched_terms = vec![token.clone()];
                        tracing::trace!(token = token.as_str(), word, similarity, "fuzzy fallback hit");
                        break 'outer;
                    }
                }
            }
        }

        SearchOutcome {
            matches: score >= options.min_score,
            score,
            matched_terms,
        }
    }

    /// Additive ranking score over an entity's fields with hand-tuned
    /// per-field weights. Not normalized: only meaningful for relative
    /// ordering of candidates under the same query.
    pub fn relevance_score(&self, query: &str, candidate: &SearchCandidate) -> u32 {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return 0;
        }

        let terms = self.synonyms.expand_many(query.split_whitespace());
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_lowercase();

        let name = field(&candidate.name);
        let subject = field(&candidate.subject);
        let description = field(&candidate.description);
        let about = field(&candidate.about);
        let skill_level = field(&candidate.skill_level);
        let tags: Vec<String> = candidate.tags.iter().map(|t| t.to_lowercase()).collect();

        let mut score = 0u32;
        if !name.is_empty() && name == query {
            score += 5;
        }
        for term in &terms {
            if !name.is_empty() && name.contains(term) {
                score += 10;
            }
            if !subject.is_empty() && subject.contains(term) {
                score += 8;
            }
            if tags.iter().any(|t| t.contains(term)) {
                score += 7;
            }
            if !description.is_empty() && description.contains(term) {
                score += 6;
            }
            if !about.is_empty() && about.contains(term) {
                score += 5;
            }
            if !skill_level.is_empty() && skill_level.contains(term) {
                score += 4;
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_score_exact() {
        assert_eq!(match_score("math", "math"), 100);
        assert_eq!(match_score("Math", " MATH "), 100);
    }

    #[test]
    fn test_match_score_substring_tiers() {
        assert_eq!(match_score("math", "math tutoring group"), 90);
        assert_eq!(match_score("advanced math", "math"), 80);
    }

    #[test]
    fn test_match_score_word_boundary() {
        // "calculus" hits exactly (2 pts), "help" partially via "helpers"
        // (1 pt): min(70, 40 + 30) = 70
        assert_eq!(match_score("calculus help", "calculus exam helpers"), 70);
    }

    #[test]
    fn test_match_score_word_points_capped() {
        let score = match_score("e d c b a", "a b c d e f");
        assert_eq!(score, 70);
    }

    #[test]
    fn test_match_score_fuzzy_tier() {
        // "chemstry" vs "chemistry": distance 1 over 9 chars, sim ~0.89
        let score = match_score("chemstry", "chemistry");
        assert_eq!(score, (8.0 / 9.0 * 60.0_f64).round() as u8);
    }

    #[test]
    fn test_match_score_no_match() {
        assert_eq!(match_score("zoology", "accounting"), 0);
    }

    #[test]
    fn test_smart_search_empty_query_matches_everything() {
        let engine = SearchEngine::with_defaults();
        let outcome = engine.smart_search("", &["anything at all"], SearchOptions::default());
        assert!(outcome.matches);
        assert_eq!(outcome.score, 100);
    }

    #[test]
    fn test_smart_search_direct_hit_without_expansion() {
        let engine = SearchEngine::with_defaults();
        let options = SearchOptions {
            expand_synonyms: false,
            ..Default::default()
        };
        let outcome = engine.smart_search("physics", &["Physics study group"], options);
        assert!(outcome.matches);
        assert_eq!(outcome.score, 90);
        assert_eq!(outcome.matched_terms, vec!["physics".to_string()]);
    }

    #[test]
    fn test_smart_search_synonym_expansion_finds_related() {
        let engine = SearchEngine::with_defaults();
        // the candidate never says "math", but expansion reaches "calculus"
        let outcome = engine.smart_search(
            "math",
            &["Calculus study partners wanted"],
            SearchOptions::default(),
        );
        assert!(outcome
            .matched_terms
            .iter()
            .any(|t| t == "calculus"));
    }

    #[test]
    fn test_smart_search_fuzzy_fallback() {
        let engine = SearchEngine::with_defaults();
        let options = SearchOptions {
            expand_synonyms: false,
            fuzzy_match: true,
            min_score: 20,
        };
        let outcome = engine.smart_search("biologi", &["biology lab notes"], options);
        assert!(outcome.matches);
        assert!(outcome.score > 0);
    }

    #[test]
    fn test_smart_search_fuzzy_disabled() {
        let engine = SearchEngine::with_defaults();
        let options = SearchOptions {
            expand_synonyms: false,
            fuzzy_match: false,
            min_score: 20,
        };
        let outcome = engine.smart_search("qqqq", &["totally unrelated"], options);
        assert!(!outcome.matches);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_relevance_score_field_weights() {
        let engine = SearchEngine::with_defaults();
        let in_name = SearchCandidate {
            name: Some("Physics club".to_string()),
            ..Default::default()
        };
        let in_description = SearchCandidate {
            description: Some("we talk physics".to_string()),
            ..Default::default()
        };
        let name_score = engine.relevance_score("physics", &in_name);
        let description_score = engine.relevance_score("physics", &in_description);
        assert!(name_score > description_score);
    }

    #[test]
    fn test_relevance_score_exact_name_bonus() {
        let engine = SearchEngine::with_defaults();
        let exact = SearchCandidate {
            name: Some("physics".to_string()),
            ..Default::default()
        };
        let partial = SearchCandidate {
            name: Some("physics club".to_string()),
            ..Default::default()
        };
        assert_eq!(
            engine.relevance_score("physics", &exact),
            engine.relevance_score("physics", &partial) + 5
        );
    }

    #[test]
    fn test_relevance_score_empty_query() {
        let engine = SearchEngine::with_defaults();
        let candidate = SearchCandidate {
            name: Some("anything".to_string()),
            ..Default::default()
        };
        assert_eq!(engine.relevance_score("", &candidate), 0);
    }

    #[test]
    fn test_relevance_score_orders_by_hits() {
        let engine = SearchEngine::with_defaults();
        let strong = SearchCandidate {
            name: Some("Math circle".to_string()),
            subject: Some("Mathematics".to_string()),
            tags: vec!["algebra".to_string()],
            ..Default::default()
        };
        let weak = SearchCandidate {
            about: Some("sometimes mathematics".to_string()),
            ..Default::default()
        };
        assert!(engine.relevance_score("math", &strong) > engine.relevance_score("math", &weak));
    }
}
