//! Free-text query recommender with category fallback

use std::collections::HashSet;
use std::time::Instant;

use crate::config::ContentConfig;
use crate::error::Result;
use crate::model::Blog;
use crate::output::{BlogSummary, ContentRecommendation, RecommendationsPayload};
use crate::similarity::{rank, round_to, sort_descending, RankOptions, ScoredIndex};
use crate::source::BlogSource;
use crate::text::Tokenizer;
use crate::trace_time;
use crate::vector::{SparseVector, Vectorizer};

/// Ranks the corpus against a query string
pub struct ContentRecommender {
    config: ContentConfig,
    tokenizer: Tokenizer,
}

impl ContentRecommender {
    pub fn new(config: ContentConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&config.tokenizer)?;
        Ok(Self { config, tokenizer })
    }

    /// Rank `blogs` against `query`, best first.
    ///
    /// When the query names one of the configured categories, blogs labelled
    /// with it that did not pass the similarity threshold are appended with
    /// the fallback score.
    pub fn recommend(&self, blogs: &[Blog], query: &str) -> Vec<ContentRecommendation> {
        let start = Instant::now();
        let query = query.trim().to_lowercase();

        let docs: Vec<Vec<String>> = blogs
            .iter()
            .map(|blog| self.tokenizer.tokenize(&blog.document_text()))
            .collect();
        let vectorizer = Vectorizer::fit(&docs);
        let vectors: Vec<SparseVector> = docs.iter().map(|d| vectorizer.transform(d)).collect();
        let query_vec = vectorizer.transform(&self.tokenizer.tokenize(&query));

        tracing::debug!(
            documents = blogs.len(),
            vocabulary = vectorizer.idf().len(),
            query_terms = query_vec.len(),
            "vectorized"
        );

        let mut scored = rank(
            &query_vec,
            &vectors,
            RankOptions {
                threshold: self.config.threshold,
                limit: None,
                exclude: None,
            },
        );
        let matched = scored.len();

        if self.config.categories.contains(&query.as_str()) {
            self.append_category_matches(blogs, &query, &mut scored);
            sort_descending(&mut scored, |r| r.score);
        }

        tracing::debug!(matched, total = scored.len(), "ranked");
        trace_time!(start, "content_recommend");

        scored
            .into_iter()
            .map(|r| ContentRecommendation {
                blog: BlogSummary::from(&blogs[r.index]),
                similarity: round_to(r.score, self.config.precision),
            })
            .collect()
    }

    fn append_category_matches(&self, blogs: &[Blog], category: &str, scored: &mut Vec<ScoredIndex>) {
        let mut seen: HashSet<&str> = scored.iter().map(|r| blogs[r.index].id.as_str()).collect();

        for (index, blog) in blogs.iter().enumerate() {
            if blog.has_category(category) && seen.insert(blog.id.as_str()) {
                scored.push(ScoredIndex {
                    index,
                    score: self.config.fallback_score,
                });
            }
        }
    }
}

/// Fetch the corpus and recommend for `query`; never fails.
///
/// A missing query or empty corpus gives an empty list; fetch and setup
/// errors give an empty list plus the error message.
#[tracing::instrument(skip_all, fields(query = ?query))]
pub fn run(
    source: &dyn BlogSource,
    query: Option<&str>,
    config: ContentConfig,
) -> RecommendationsPayload<ContentRecommendation> {
    let Some(query) = query else {
        tracing::debug!("no query given");
        return RecommendationsPayload::ok(Vec::new());
    };

    match try_run(source, query, config) {
        Ok(recommendations) => RecommendationsPayload::ok(recommendations),
        Err(e) => {
            tracing::warn!(error = %e, error_type = e.error_type(), "content recommendation failed");
            RecommendationsPayload::failed(e)
        }
    }
}

fn try_run(
    source: &dyn BlogSource,
    query: &str,
    config: ContentConfig,
) -> Result<Vec<ContentRecommendation>> {
    let recommender = ContentRecommender::new(config)?;
    let blogs = source.fetch_blogs()?;
    if blogs.is_empty() {
        return Ok(Vec::new());
    }
    Ok(recommender.recommend(&blogs, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    fn blog(id: &str, title: &str, content: &str, categories: &[&str]) -> Blog {
        Blog {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Blog::default()
        }
    }

    fn recommender() -> ContentRecommender {
        ContentRecommender::new(ContentConfig::default()).unwrap()
    }

    fn ids(results: &[ContentRecommendation]) -> Vec<&str> {
        results.iter().map(|r| r.blog.id.as_str()).collect()
    }

    #[test]
    fn test_query_matches_only_relevant_blog() {
        let blogs = vec![
            blog("1", "Go concurrency", "goroutines channels", &[]),
            blog("2", "Cooking pasta", "tomato basil", &[]),
        ];

        let results = recommender().recommend(&blogs, "goroutines");

        assert_eq!(ids(&results), vec!["1"]);
        // query term is 1 of 4 equally weighted document terms: cos = 0.5
        assert_eq!(results[0].similarity, 0.5);
    }

    #[test]
    fn test_query_is_case_and_whitespace_insensitive() {
        let blogs = vec![
            blog("1", "Go concurrency", "goroutines channels", &[]),
            blog("2", "Cooking pasta", "tomato basil", &[]),
        ];
        let a = recommender().recommend(&blogs, "  GOROUTINES ");
        let b = recommender().recommend(&blogs, "goroutines");
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_fallback_appends_unmatched_blogs() {
        let blogs = vec![
            blog("1", "Marathon tips", "running pace", &["Sports"]),
            blog("2", "Sports weekly", "football recap", &["news"]),
            blog("3", "Pasta", "tomato", &["food"]),
        ];

        let results = recommender().recommend(&blogs, "Sports");

        assert_eq!(ids(&results), vec!["2", "1"]);
        assert!(results[0].similarity > 0.05);
        assert_eq!(results[1].similarity, 0.03);
    }

    #[test]
    fn test_category_fallback_never_duplicates() {
        let blogs = vec![
            blog("1", "Travel", "travel diaries", &["travel"]),
            blog("2", "Beaches", "sand sun", &["travel"]),
            blog("3", "Pasta", "tomato", &[]),
        ];

        let results = recommender().recommend(&blogs, "travel");

        assert_eq!(ids(&results), vec!["1", "2"]);
        // Similarity match keeps its own, higher score
        assert!(results[0].similarity > 0.03);
        assert_eq!(results[1].similarity, 0.03);
    }

    #[test]
    fn test_unknown_category_has_no_fallback() {
        let blogs = vec![blog("1", "Pasta", "tomato", &["gardening"])];
        assert!(recommender().recommend(&blogs, "gardening stuff").is_empty());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let blogs = vec![
            blog("1", "Rust async", "tokio futures executors", &[]),
            blog("2", "Rust traits", "generics traits bounds", &[]),
            blog("3", "Async Python", "asyncio event loop", &[]),
        ];
        let first = recommender().recommend(&blogs, "rust async futures");
        for _ in 0..5 {
            assert_eq!(recommender().recommend(&blogs, "rust async futures"), first);
        }
    }

    #[test]
    fn test_run_without_query_is_empty() {
        let source = StaticSource::with_blogs(vec![blog("1", "Go", "goroutines", &[])]);
        let payload = run(&source, None, ContentConfig::default());
        assert!(payload.recommendations.is_empty());
        assert!(payload.error.is_none());
    }

    #[test]
    fn test_loose_created_at_does_not_break_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"blogs":[
                {"_id":"1","title":"Go concurrency","content":"goroutines channels","createdAt":"2024-03-01 10:00:00"},
                {"_id":"2","title":"Cooking pasta","content":"tomato basil","createdAt":"yesterday"}
            ]}"#,
        )
        .unwrap();

        let source = crate::source::FileSource::new(&path);
        let payload = run(&source, Some("goroutines"), ContentConfig::default());

        assert!(payload.error.is_none());
        assert_eq!(ids(&payload.recommendations), vec!["1"]);
        assert_eq!(payload.recommendations[0].similarity, 0.5);
    }

    #[test]
    fn test_run_with_empty_corpus_is_empty() {
        let payload = run(&StaticSource::default(), Some("rust"), ContentConfig::default());
        assert!(payload.recommendations.is_empty());
        assert!(payload.error.is_none());
    }
}
