//! Data sources for blogs and likes
//!
//! Fetching is an explicit step behind [`BlogSource`], so recommenders run
//! equally against the HTTP API, a local fixture file, or in-memory data.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::error::Result;
use crate::model::{Blog, Like};

/// Supplier of the corpus and interaction data for one invocation
pub trait BlogSource {
    fn fetch_blogs(&self) -> Result<Vec<Blog>>;
    fn fetch_likes(&self) -> Result<Vec<Like>>;
}

/// In-memory fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub blogs: Vec<Blog>,
    pub likes: Vec<Like>,
}

impl StaticSource {
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs,
            likes: Vec::new(),
        }
    }

    pub fn with_likes(likes: Vec<Like>) -> Self {
        Self {
            blogs: Vec::new(),
            likes,
        }
    }
}

impl BlogSource for StaticSource {
    fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        Ok(self.blogs.clone())
    }

    fn fetch_likes(&self) -> Result<Vec<Like>> {
        Ok(self.likes.clone())
    }
}
