//! Error types and exit codes for blogrec
//!
//! Exit codes:
//! - 0: Success (including degraded, empty recommendation payloads)
//! - 1: Generic failure (e.g. stdout closed)
//! - 2: Usage error (bad flags/args)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while fetching data or computing recommendations
#[derive(Error, Debug)]
pub enum RecError {
    #[error("{0}")]
    UsageError(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{0}")]
    Other(String),
}

impl RecError {
    /// Create an error for a failed fetch against an upstream endpoint
    pub fn fetch(url: &str, error: impl std::fmt::Display) -> Self {
        RecError::Fetch {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RecError::UsageError(_) => ExitCode::Usage,
            RecError::Fetch { .. }
            | RecError::HttpStatus { .. }
            | RecError::Io(_)
            | RecError::Json(_)
            | RecError::Pattern(_)
            | RecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier for logs and structured output
    pub fn error_type(&self) -> &'static str {
        match self {
            RecError::UsageError(_) => "usage_error",
            RecError::Fetch { .. } => "fetch_error",
            RecError::HttpStatus { .. } => "http_status",
            RecError::Io(_) => "io_error",
            RecError::Json(_) => "json_error",
            RecError::Pattern(_) => "pattern_error",
            RecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON for structured error output on stderr
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for blogrec operations
pub type Result<T> = std::result::Result<T, RecError>;
