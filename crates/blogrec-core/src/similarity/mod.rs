//! Cosine similarity and threshold/top-K ranking

use std::collections::BTreeMap;

/// Cosine similarity between two sparse vectors.
///
/// Keys missing from one side contribute nothing to the dot product. Returns
/// 0.0 when either vector has zero norm.
pub fn cosine_similarity<K: Ord>(vec_a: &BTreeMap<K, f64>, vec_b: &BTreeMap<K, f64>) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (key, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(key) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Minimum score a candidate needs to be kept
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Keep `score >= value`
    Inclusive(f64),
    /// Keep `score > value`
    Exclusive(f64),
}

impl Threshold {
    pub fn admits(&self, score: f64) -> bool {
        match *self {
            Threshold::Inclusive(min) => score >= min,
            Threshold::Exclusive(min) => score > min,
        }
    }
}

/// Ranked candidate: index into the candidate slice plus its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    pub index: usize,
    pub score: f64,
}

/// Ranking parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    pub threshold: Threshold,
    /// Keep at most this many results
    pub limit: Option<usize>,
    /// Candidate index to leave out regardless of its score
    pub exclude: Option<usize>,
}

/// Score every candidate against the query and return the admitted ones,
/// best first.
///
/// Ties keep the original candidate order (the sort is stable).
pub fn rank<K: Ord>(
    query: &BTreeMap<K, f64>,
    candidates: &[BTreeMap<K, f64>],
    options: RankOptions,
) -> Vec<ScoredIndex> {
    let mut results: Vec<ScoredIndex> = candidates
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != options.exclude)
        .map(|(index, candidate)| ScoredIndex {
            index,
            score: cosine_similarity(query, candidate),
        })
        .filter(|scored| options.threshold.admits(scored.score))
        .collect();

    sort_descending(&mut results, |r| r.score);

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }
    results
}

/// Stable descending sort by a float key
pub fn sort_descending<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}

/// Round to `places` decimals, exact halves to the even digit
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round_ties_even() / factor
}
