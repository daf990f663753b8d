//! Pure list operations over scored entries: ranking, threshold filtering,
//! and score-weighted random sampling for the discovery feed.

use rand::Rng;

/// Stable descending sort by score. Entries without a score sort last
/// (treated as -1).
pub fn sort_by_match_score<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> Option<u8>,
{
    items.sort_by_key(|item| {
        let value = score(item).map(i16::from).unwrap_or(-1);
        std::cmp::Reverse(value)
    });
}

/// Drop entries with no score or a score below `min_score`.
pub fn filter_by_min_score<T, F>(items: Vec<T>, min_score: u8, score: F) -> Vec<T>
where
    F: Fn(&T) -> Option<u8>,
{
    items
        .into_iter()
        .filter(|item| score(item).map_or(false, |s| s >= min_score))
        .collect()
}

/// Selection weight: `(score + 1)^2`, so a zero-score entry still has
/// weight 1 and a non-zero chance of being picked. Unscored entries get
/// weight 0 and are only drawn when nothing weighted remains.
fn selection_weight(score: Option<u8>) -> f64 {
    match score {
        Some(s) => {
            let w = s as f64 + 1.0;
            w * w
        }
        None => 0.0,
    }
}

/// Score-weighted random sampling without replacement.
///
/// Biases the pick toward higher-scoring candidates while still surfacing
/// variety. Implemented as a re-normalized roulette wheel: draw a uniform
/// value in `[0, Σweights)`, walk the remaining pool, remove the hit, and
/// repeat. O(n * count), fine for discovery-feed sizes.
///
/// If `items.len() <= count` the input comes back unchanged.
pub fn weighted_random_select<T, F, R>(
    mut items: Vec<T>,
    count: usize,
    score: F,
    rng: &mut R,
) -> Vec<T>
where
    F: Fn(&T) -> Option<u8>,
    R: Rng + ?Sized,
{
    if items.len() <= count {
        return items;
    }

    let mut weights: Vec<f64> = items.iter().map(|item| selection_weight(score(item))).collect();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count {
        let total: f64 = weights.iter().sum();
        let index = if total <= 0.0 {
            // nothing weighted left; take in order
            0
        } else {
            let mut draw = rng.gen_range(0.0..total);
            let mut hit = weights.len() - 1;
            for (i, w) in weights.iter().enumerate() {
                if draw < *w {
                    hit = i;
                    break;
                }
                draw -= w;
            }
            hit
        };

        selected.push(items.remove(index));
        weights.remove(index);
    }

    selected
}

/// [`weighted_random_select`] with the thread-local RNG.
pub fn weighted_random_sample<T, F>(items: Vec<T>, count: usize, score: F) -> Vec<T>
where
    F: Fn(&T) -> Option<u8>,
{
    weighted_random_select(items, count, score, &mut rand::thread_rng())
}
