//! JSON payload shapes written to stdout
//!
//! Every payload has the same top-level array key on success and failure;
//! failures add an `error` string.

use serde::Serialize;

use crate::model::Blog;

const UNKNOWN_AUTHOR: &str = "Unknown";

/// Author as emitted in results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
}

/// Public projection of a blog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub author: AuthorSummary,
}

impl From<&Blog> for BlogSummary {
    fn from(blog: &Blog) -> Self {
        let author = blog.author.clone().unwrap_or_default();
        Self {
            id: blog.id.clone(),
            title: blog.title.clone(),
            content: blog.content.clone(),
            image: blog.image.clone(),
            categories: blog.categories.clone(),
            author: AuthorSummary {
                id: author.id,
                name: author.name.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            },
        }
    }
}

/// Content recommender result entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecommendation {
    #[serde(flatten)]
    pub blog: BlogSummary,
    pub similarity: f64,
}

/// Related-post recommender result entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedBlog {
    #[serde(flatten)]
    pub blog: BlogSummary,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub score: f64,
}

impl RelatedBlog {
    pub fn new(blog: &Blog, score: f64) -> Self {
        Self {
            blog: BlogSummary::from(blog),
            created_at: blog.created_at.as_ref().map(|t| t.display()),
            score,
        }
    }
}

/// Collaborative recommender result entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollabRecommendation {
    #[serde(rename = "blogId")]
    pub blog_id: String,
    pub score: f64,
}

/// `{"recommendations": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationsPayload<T> {
    pub recommendations: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> RecommendationsPayload<T> {
    pub fn ok(recommendations: Vec<T>) -> Self {
        Self {
            recommendations,
            error: None,
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            recommendations: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

/// `{"relatedBlogs": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedPayload {
    #[serde(rename = "relatedBlogs")]
    pub related_blogs: Vec<RelatedBlog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelatedPayload {
    pub fn ok(related_blogs: Vec<RelatedBlog>) -> Self {
        Self {
            related_blogs,
            error: None,
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            related_blogs: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}
