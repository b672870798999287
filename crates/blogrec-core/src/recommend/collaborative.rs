//! Item-item collaborative filtering over "like" interactions

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::config::CollabConfig;
use crate::error::Result;
use crate::model::Like;
use crate::output::{CollabRecommendation, RecommendationsPayload};
use crate::similarity::{cosine_similarity, round_to, sort_descending};
use crate::source::BlogSource;
use crate::trace_time;
use crate::vector::SparseVector;

/// User -> liked blogs. Users and their blogs keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct InteractionMatrix {
    users: Vec<String>,
    liked: HashMap<String, Vec<String>>,
}

impl InteractionMatrix {
    /// Build from like records, skipping records without both ids
    pub fn from_likes(likes: &[Like]) -> Self {
        let mut matrix = Self::default();

        for like in likes {
            let (Some(user), Some(blog)) = (like.user_id.as_deref(), like.blog_id.as_deref()) else {
                continue;
            };
            if user.is_empty() || blog.is_empty() {
                continue;
            }

            let blogs = matrix.liked.entry(user.to_string()).or_insert_with(|| {
                matrix.users.push(user.to_string());
                Vec::new()
            });
            if !blogs.iter().any(|b| b == blog) {
                blogs.push(blog.to_string());
            }
        }

        matrix
    }

    /// Blogs liked by `user`; empty for unknown users
    pub fn liked_by(&self, user: &str) -> &[String] {
        self.liked.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Blog -> user interaction vectors
    pub fn transpose(&self) -> ItemVectors {
        let mut items = ItemVectors::default();

        for user in &self.users {
            for blog in self.liked_by(user) {
                let index = match items.index.get(blog) {
                    Some(&index) => index,
                    None => {
                        items.index.insert(blog.clone(), items.ids.len());
                        items.ids.push(blog.clone());
                        items.vectors.push(SparseVector::new());
                        items.ids.len() - 1
                    }
                };
                items.vectors[index].insert(user.clone(), 1.0);
            }
        }

        items
    }
}

/// Per-blog interaction vectors, in first-seen blog order
#[derive(Debug, Clone, Default)]
pub struct ItemVectors {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<SparseVector>,
}

impl ItemVectors {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Symmetric blog x blog cosine similarity table, self-similarity included
#[derive(Debug, Clone)]
pub struct ItemSimilarity {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    scores: Vec<f64>,
}

impl ItemSimilarity {
    /// Compute every unordered pair once and mirror it
    pub fn compute(items: &ItemVectors) -> Self {
        let n = items.len();
        let mut scores = vec![0.0; n * n];

        for i in 0..n {
            for j in i..n {
                let sim = cosine_similarity(&items.vectors[i], &items.vectors[j]);
                scores[i * n + j] = sim;
                scores[j * n + i] = sim;
            }
        }

        Self {
            ids: items.ids.clone(),
            index: items.index.clone(),
            scores,
        }
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;
        Some(self.scores[i * self.ids.len() + j])
    }

    /// Similarities of `blog` to every blog, in table order
    fn row(&self, blog: &str) -> Option<&[f64]> {
        let n = self.ids.len();
        let i = *self.index.get(blog)?;
        Some(&self.scores[i * n..(i + 1) * n])
    }
}

/// Recommends blogs similar, by co-likes, to what a user already liked
pub struct CollabRecommender {
    config: CollabConfig,
}

impl CollabRecommender {
    pub fn new(config: CollabConfig) -> Self {
        Self { config }
    }

    /// Top blogs for `user_id` by summed similarity to the user's liked blogs.
    ///
    /// Already-liked blogs are never returned. Ties keep first-seen blog order.
    pub fn recommend(&self, likes: &[Like], user_id: &str) -> Vec<CollabRecommendation> {
        let start = Instant::now();
        let matrix = InteractionMatrix::from_likes(likes);
        let items = matrix.transpose();

        if items.len() < self.config.min_items {
            tracing::debug!(items = items.len(), "too few interacting blogs");
            return Vec::new();
        }

        let similarity = ItemSimilarity::compute(&items);
        tracing::debug!(
            users = matrix.user_count(),
            items = items.len(),
            "item similarity computed"
        );

        let liked = matrix.liked_by(user_id);
        if liked.is_empty() {
            tracing::debug!(user_id, "user has no interactions");
            return Vec::new();
        }
        let liked_set: HashSet<&str> = liked.iter().map(String::as_str).collect();

        // (item index, accumulated score) in first-seen order
        let mut totals: Vec<(usize, f64)> = Vec::new();
        let mut slot: HashMap<usize, usize> = HashMap::new();

        for blog in liked {
            let Some(row) = similarity.row(blog) else {
                continue;
            };
            for (candidate, score) in row.iter().enumerate() {
                let candidate_id = similarity.ids[candidate].as_str();
                if candidate_id == blog || liked_set.contains(candidate_id) {
                    continue;
                }
                let position = *slot.entry(candidate).or_insert_with(|| {
                    totals.push((candidate, 0.0));
                    totals.len() - 1
                });
                totals[position].1 += score;
            }
        }

        sort_descending(&mut totals, |(_, score)| *score);
        totals.truncate(self.config.limit);
        trace_time!(start, "collab_recommend");

        totals
            .into_iter()
            .map(|(index, score)| CollabRecommendation {
                blog_id: similarity.ids[index].clone(),
                score: round_to(score, self.config.precision),
            })
            .collect()
    }
}

/// Fetch likes and recommend for `user_id`; never fails.
#[tracing::instrument(skip_all, fields(user_id = ?user_id))]
pub fn run(
    source: &dyn BlogSource,
    user_id: Option<&str>,
    config: CollabConfig,
) -> RecommendationsPayload<CollabRecommendation> {
    let Some(user_id) = user_id else {
        tracing::debug!("no user id given");
        return RecommendationsPayload::ok(Vec::new());
    };

    match try_run(source, user_id.trim(), config) {
        Ok(recommendations) => RecommendationsPayload::ok(recommendations),
        Err(e) => {
            tracing::warn!(error = %e, error_type = e.error_type(), "collaborative recommendation failed");
            RecommendationsPayload::failed(e)
        }
    }
}

fn try_run(
    source: &dyn BlogSource,
    user_id: &str,
    config: CollabConfig,
) -> Result<Vec<CollabRecommendation>> {
    let likes = source.fetch_likes()?;
    if likes.is_empty() {
        return Ok(Vec::new());
    }
    Ok(CollabRecommender::new(config).recommend(&likes, user_id))
}
