//! Related posts for one target blog

use std::time::Instant;

use crate::config::RelatedConfig;
use crate::error::Result;
use crate::model::Blog;
use crate::output::{RelatedBlog, RelatedPayload};
use crate::similarity::{rank, round_to, RankOptions};
use crate::source::BlogSource;
use crate::text::Tokenizer;
use crate::trace_time;
use crate::vector::{SparseVector, Vectorizer};

pub struct RelatedRecommender {
    config: RelatedConfig,
    tokenizer: Tokenizer,
}

impl RelatedRecommender {
    pub fn new(config: RelatedConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&config.tokenizer)?;
        Ok(Self { config, tokenizer })
    }

    /// Blogs most similar to the one with `target_id`, best first.
    ///
    /// The target itself is never returned. Unknown ids yield no results.
    pub fn recommend(&self, blogs: &[Blog], target_id: &str) -> Vec<RelatedBlog> {
        let start = Instant::now();
        let Some(target_index) = blogs.iter().position(|b| b.id == target_id) else {
            tracing::debug!(target_id, "target blog not found");
            return Vec::new();
        };

        let docs: Vec<Vec<String>> = blogs
            .iter()
            .map(|blog| self.tokenizer.tokenize(&blog.document_text()))
            .collect();
        let vectorizer = match self.config.max_terms {
            Some(max_terms) => Vectorizer::fit_with_limit(&docs, max_terms),
            None => Vectorizer::fit(&docs),
        };
        let vectors: Vec<SparseVector> = docs.iter().map(|d| vectorizer.transform(d)).collect();

        let ranked = rank(
            &vectors[target_index],
            &vectors,
            RankOptions {
                threshold: self.config.threshold,
                limit: Some(self.config.limit),
                exclude: Some(target_index),
            },
        );

        tracing::debug!(
            documents = blogs.len(),
            vocabulary = vectorizer.idf().len(),
            related = ranked.len(),
            "ranked"
        );
        trace_time!(start, "related_recommend");

        ranked
            .into_iter()
            .map(|r| RelatedBlog::new(&blogs[r.index], round_to(r.score, self.config.precision)))
            .collect()
    }
}

/// Fetch the corpus and find posts related to `blog_id`; never fails.
#[tracing::instrument(skip_all, fields(blog_id = ?blog_id))]
pub fn run(source: &dyn BlogSource, blog_id: Option<&str>, config: RelatedConfig) -> RelatedPayload {
    let Some(blog_id) = blog_id else {
        tracing::debug!("no blog id given");
        return RelatedPayload::ok(Vec::new());
    };

    match try_run(source, blog_id.trim(), config) {
        Ok(related) => RelatedPayload::ok(related),
        Err(e) => {
            tracing::warn!(error = %e, error_type = e.error_type(), "related recommendation failed");
            RelatedPayload::failed(e)
        }
    }
}

fn try_run(source: &dyn BlogSource, blog_id: &str, config: RelatedConfig) -> Result<Vec<RelatedBlog>> {
    let recommender = RelatedRecommender::new(config)?;
    let blogs = source.fetch_blogs()?;
    Ok(recommender.recommend(&blogs, blog_id))
}
