//! Blog and like records as served by the blog API

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Blog author reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A blog post. Immutable once fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_created_at")]
    pub created_at: Option<CreatedAt>,
}

/// Creation timestamp. RFC 3339 values are normalised, anything else is
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl CreatedAt {
    /// Millisecond RFC 3339 with `Z`, or the raw upstream string
    pub fn display(&self) -> String {
        match self {
            Self::Parsed(t) => t.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Raw(s) => s.clone(),
        }
    }
}

impl From<&str> for CreatedAt {
    fn from(s: &str) -> Self {
        match DateTime::parse_from_rfc3339(s) {
            Ok(t) => Self::Parsed(t.with_timezone(&Utc)),
            Err(_) => Self::Raw(s.to_string()),
        }
    }
}

// Non-string values (numbers, objects) are dropped rather than failing the corpus
fn lenient_created_at<'de, D>(deserializer: D) -> Result<Option<CreatedAt>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(CreatedAt::from(s.as_str())),
        _ => None,
    })
}

impl Blog {
    /// Text that gets vectorized: title and body joined by a space
    pub fn document_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }

    /// Case-insensitive category membership
    pub fn has_category(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == category)
    }
}

/// One "like" interaction. Either id may be absent in upstream data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "blogId", default)]
    pub blog_id: Option<String>,
}

impl Like {
    pub fn new(user_id: &str, blog_id: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            blog_id: Some(blog_id.to_string()),
        }
    }
}

/// Envelope returned by the blog data endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogsEnvelope {
    #[serde(default)]
    pub blogs: Vec<Blog>,
}
