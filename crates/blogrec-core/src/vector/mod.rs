//! TF-IDF vectorization over a shared corpus vocabulary

use std::collections::{BTreeMap, BTreeSet};

/// Sparse vector keyed by term (or any ordered id).
///
/// Ordered keys keep floating point summation order, and therefore scores,
/// identical across runs.
pub type SparseVector<K = String> = BTreeMap<K, f64>;

/// Smoothed inverse document frequency per term, built once per corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: BTreeMap<String, f64>,
}

impl IdfTable {
    /// Weight for a term; terms outside the corpus weigh 0
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// `ln((N + 1) / (df + 1)) + 1` for every term present in the corpus
pub fn compute_idf<S: AsRef<str>>(corpus: &[Vec<S>]) -> IdfTable {
    let total_docs = corpus.len() as f64;
    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();

    for tokens in corpus {
        let unique: BTreeSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let weights = doc_freq
        .into_iter()
        .map(|(term, df)| {
            let idf = ((total_docs + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
            (term.to_string(), idf)
        })
        .collect();

    IdfTable { weights }
}

/// Term count divided by document length; empty documents yield an empty vector
pub fn compute_tf<S: AsRef<str>>(tokens: &[S]) -> SparseVector {
    let mut tf = SparseVector::new();
    if tokens.is_empty() {
        return tf;
    }

    for token in tokens {
        *tf.entry(token.as_ref().to_string()).or_insert(0.0) += 1.0;
    }

    let total = tokens.len() as f64;
    for value in tf.values_mut() {
        *value /= total;
    }
    tf
}

/// Elementwise `tf * idf`
pub fn compute_tfidf(tf: &SparseVector, idf: &IdfTable) -> SparseVector {
    tf.iter()
        .map(|(term, tf_val)| (term.clone(), tf_val * idf.weight(term)))
        .collect()
}

/// Fitted vectorizer: IDF table derived from the comparison corpus only.
///
/// Queries are vectorized against the same table and never contribute to it.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    idf: IdfTable,
}

impl Vectorizer {
    /// Fit on the full candidate corpus
    pub fn fit<S: AsRef<str>>(corpus: &[Vec<S>]) -> Self {
        Self {
            idf: compute_idf(corpus),
        }
    }

    /// Fit, then keep only the `max_terms` terms with the highest corpus-wide
    /// count. Ties are broken alphabetically.
    pub fn fit_with_limit<S: AsRef<str>>(corpus: &[Vec<S>], max_terms: usize) -> Self {
        let mut idf = compute_idf(corpus);
        if idf.len() <= max_terms {
            return Self { idf };
        }

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in corpus {
            for token in tokens {
                *counts.entry(token.as_ref()).or_insert(0) += 1;
            }
        }

        // BTreeMap iteration is alphabetical and sort_by is stable
        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let kept: BTreeSet<&str> = ranked
            .into_iter()
            .take(max_terms)
            .map(|(term, _)| term)
            .collect();

        idf.weights.retain(|term, _| kept.contains(term.as_str()));
        Self { idf }
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    /// TF-IDF vector for one token sequence
    pub fn transform<S: AsRef<str>>(&self, tokens: &[S]) -> SparseVector {
        compute_tfidf(&compute_tf(tokens), &self.idf)
    }
}
