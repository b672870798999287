//! Command dispatch: build the data source, run one recommender, emit JSON

use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use blogrec_core::config::{CollabConfig, ContentConfig, RelatedConfig, SourceConfig};
use blogrec_core::error::Result;
use blogrec_core::recommend::{collaborative, content, related};
use blogrec_core::source::{BlogSource, FileSource, HttpSource};

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let source = build_source(cli);
    tracing::debug!(elapsed = ?start.elapsed(), "build_source");

    match &cli.command {
        Commands::Content { query } => {
            let payload = content::run(&*source, query.as_deref(), ContentConfig::default());
            emit(cli, &payload)
        }
        Commands::Related { blog_id } => {
            let payload = related::run(&*source, blog_id.as_deref(), RelatedConfig::default());
            emit(cli, &payload)
        }
        Commands::Collab { user_id } => {
            let payload =
                collaborative::run(&*source, user_id.as_deref(), CollabConfig::default());
            emit(cli, &payload)
        }
    }?;

    tracing::debug!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn build_source(cli: &Cli) -> Box<dyn BlogSource> {
    if let Some(path) = &cli.data_file {
        tracing::debug!(path = %path.display(), "using data file");
        return Box::new(FileSource::new(path));
    }

    let mut config = SourceConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(seconds);
    }
    tracing::debug!(base_url = %config.base_url, timeout = config.timeout_seconds, "using api");
    Box::new(HttpSource::new(config))
}

/// Write exactly one JSON document to stdout
fn emit<T: Serialize>(cli: &Cli, payload: &T) -> Result<()> {
    let json = if cli.pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
