//! Local JSON fixture source: `{ "blogs": [...], "likes": [...] }`

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use super::BlogSource;
use crate::error::{RecError, Result};
use crate::model::{Blog, Like};

#[derive(Debug, Default, Deserialize)]
struct Fixture {
    #[serde(default)]
    blogs: Vec<Blog>,
    #[serde(default)]
    likes: Vec<Like>,
}

/// Reads blogs and likes from a JSON file on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Fixture> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| RecError::fetch(&self.path.display().to_string(), e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl BlogSource for FileSource {
    fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        Ok(self.load()?.blogs)
    }

    fn fetch_likes(&self) -> Result<Vec<Like>> {
        Ok(self.load()?.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reads_both_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"blogs":[{"_id":"b1"}],"likes":[{"userId":"u1","blogId":"b1"}]}"#,
        )
        .unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch_blogs().unwrap().len(), 1);
        assert_eq!(source.fetch_likes().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{}").unwrap();

        let source = FileSource::new(&path);
        assert!(source.fetch_blogs().unwrap().is_empty());
        assert!(source.fetch_likes().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_fetch_error() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(
            source.fetch_blogs().unwrap_err(),
            RecError::Fetch { .. }
        ));
    }
}
