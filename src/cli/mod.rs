//! CLI argument parsing for blogrec
//!
//! Global flags: --api-url, --data-file, --timeout, --pretty, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blogrec - content and collaborative blog recommendations as JSON
#[derive(Parser, Debug)]
#[command(name = "blogrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the blog API (overrides BLOGREC_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Read blogs and likes from a local JSON file instead of the API
    #[arg(long, global = true, conflicts_with = "api_url")]
    pub data_file: Option<PathBuf>,

    /// Request timeout in seconds (overrides BLOGREC_TIMEOUT)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON payload
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, blogrec_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend blogs for a free-text query or category name
    Content {
        /// Search text or category (e.g. "rust async", "travel")
        query: Option<String>,
    },

    /// List blogs related to a given blog
    Related {
        /// Target blog ID
        blog_id: Option<String>,
    },

    /// Recommend blogs from other users' likes
    Collab {
        /// Target user ID
        user_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        let result = Cli::try_parse_from(["blogrec", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_content_with_query() {
        let cli = Cli::try_parse_from(["blogrec", "content", "rust async"]).unwrap();
        if let Commands::Content { query } = cli.command {
            assert_eq!(query.as_deref(), Some("rust async"));
        } else {
            panic!("Expected Content command");
        }
    }

    #[test]
    fn test_positional_is_optional() {
        let cli = Cli::try_parse_from(["blogrec", "collab"]).unwrap();
        assert!(matches!(cli.command, Commands::Collab { user_id: None }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "blogrec",
            "related",
            "b1",
            "--data-file",
            "fixture.json",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("fixture.json")));
        assert!(cli.pretty);
    }

    #[test]
    fn test_data_file_conflicts_with_api_url() {
        let result = Cli::try_parse_from([
            "blogrec",
            "--api-url",
            "http://x",
            "--data-file",
            "f.json",
            "content",
        ]);
        assert!(result.is_err());
    }
}
