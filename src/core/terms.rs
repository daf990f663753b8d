//! Tag-set similarity: plain Jaccard and synonym-aware "smart" Jaccard.

use std::collections::HashSet;

use crate::core::synonyms::SynonymIndex;

/// Weight of a synonym match relative to a direct match in
/// [`smart_jaccard`].
pub const SYNONYM_MATCH_WEIGHT: f64 = 0.7;

/// Lowercased, trimmed, deduplicated view of a tag list. Order of first
/// appearance is preserved so reported matches stay stable.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for tag in tags {
        let normalized = tag.trim().to_lowercase();
        if !normalized.is_empty() && seen.insert(normalized.clone()) {
            out.push(normalized);
        }
    }
    out
}

/// Classic set similarity `|A ∩ B| / |A ∪ B|`, case-insensitive.
///
/// Returns 0 when both sets are empty: absence of data is never a match.
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<String> = normalize_tags(a).into_iter().collect();
    let set_b: HashSet<String> = normalize_tags(b).into_iter().collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Case-insensitive intersection preserving `a`'s original casing, used to
/// surface human-readable matched items.
pub fn get_intersection(a: &[String], b: &[String]) -> Vec<String> {
    let set_b: HashSet<String> = normalize_tags(b).into_iter().collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|tag| {
            let normalized = tag.trim().to_lowercase();
            !normalized.is_empty() && set_b.contains(&normalized) && seen.insert(normalized)
        })
        .map(|tag| tag.trim().to_string())
        .collect()
}

/// Result of a synonym-aware tag-set comparison.
#[derive(Debug, Clone, Default)]
pub struct SmartJaccard {
    /// `min(1, (direct + 0.7 * synonym) / max(|a|, |b|))`.
    pub score: f64,
    /// Terms from `a` that matched `b` verbatim (a's casing).
    pub direct_matches: Vec<String>,
    /// Terms from `a` that matched `b` only through synonym expansion.
    pub synonym_matches: Vec<String>,
}

/// Synonym-aware set similarity.
///
/// Direct (case-insensitive) matches are found first; every remaining term
/// of `a` is then expanded through the synonym index and counted as a
/// synonym match if its expansion intersects the expansion of any remaining
/// term of `b`. Each source term counts once no matter how many target
/// terms it relates to. The denominator is the LARGER set size, so a small
/// fully-contained tag set cannot inflate the score.
pub fn smart_jaccard(a: &[String], b: &[String], index: &SynonymIndex) -> SmartJaccard {
    let norm_a = normalize_tags(a);
    let norm_b = normalize_tags(b);

    if norm_a.is_empty() && norm_b.is_empty() {
        return SmartJaccard::default();
    }

    // Map back to a's original casing for reporting.
    let original_casing = |needle: &str| -> String {
        a.iter()
            .find(|tag| tag.trim().to_lowercase() == needle)
            .map(|tag| tag.trim().to_string())
            .unwrap_or_else(|| needle.to_string())
    };

    let set_b: HashSet<&String> = norm_b.iter().collect();
    let direct: Vec<String> = norm_a
        .iter()
        .filter(|term| set_b.contains(term))
        .cloned()
        .collect();
    let direct_set: HashSet<&String> = direct.iter().collect();

    let remaining_a: Vec<&String> = norm_a.iter().filter(|t| !direct_set.contains(t)).collect();
    let remaining_b: Vec<&String> = norm_b.iter().filter(|t| !direct_set.contains(t)).collect();

    // Expand each remaining target term once; the nested scan below is
    // quadratic in tag-list size, which is fine for the short lists this
    // engine sees (typically <20 items).
    let expanded_b: Vec<HashSet<String>> = remaining_b
        .iter()
        .map(|term| index.expand(term))
        .collect();

    let mut synonym_matches = Vec::new();
    for term_a in &remaining_a {
        let expanded_a = index.expand(term_a);
        let hit = expanded_b
            .iter()
            .any(|exp_b| !expanded_a.is_disjoint(exp_b));
        if hit {
            synonym_matches.push((*term_a).clone());
        }
    }

    let denominator = norm_a.len().max(norm_b.len()) as f64;
    let raw = (direct.len() as f64 + SYNONYM_MATCH_WEIGHT * synonym_matches.len() as f64)
        / denominator;

    SmartJaccard {
        score: raw.min(1.0),
        direct_matches: direct.iter().map(|t| original_casing(t)).collect(),
        synonym_matches: synonym_matches.iter().map(|t| original_casing(t)).collect(),
    }
}
