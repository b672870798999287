//! Blocking HTTP client for the blog API

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::BlogSource;
use crate::config::SourceConfig;
use crate::error::{RecError, Result};
use crate::model::{Blog, BlogsEnvelope, Like};

/// Fetches blogs and likes from the configured API, one request per call
pub struct HttpSource {
    pub config: SourceConfig,
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpSource {
    pub fn new(config: SourceConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .build()
            .into();
        let user_agent = format!(
            "blogrec/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        Self {
            config,
            agent,
            user_agent,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "fetch");

        let mut response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => RecError::HttpStatus {
                    url: url.to_string(),
                    status,
                },
                other => RecError::fetch(url, other),
            })?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RecError::fetch(url, e))?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl BlogSource for HttpSource {
    fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        let envelope: BlogsEnvelope = self.get_json(&self.config.blogs_url())?;
        Ok(envelope.blogs)
    }

    fn fetch_likes(&self) -> Result<Vec<Like>> {
        self.get_json(&self.config.likes_url())
    }
}
