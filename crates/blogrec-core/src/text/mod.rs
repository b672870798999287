//! Text processing utilities for tokenization
//!
//! Two presets exist and are kept separate on purpose: the content recommender
//! keeps `+`/`-` inside words and uses a short stop list, the related-post
//! recommender keeps only runs of two or more word characters and uses the
//! standard English stop list.

mod stop_words;

pub use stop_words::{CONTENT_STOP_WORDS, ENGLISH_STOP_WORDS};

use std::collections::HashSet;

use regex::Regex;

use crate::error::Result;

/// Rule deciding what counts as a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPattern {
    /// Word characters, optionally with internal `+` or `-` (`well-known`)
    WordWithJoiners,
    /// Two or more word characters, nothing else
    Word,
}

impl TokenPattern {
    fn regex(self) -> &'static str {
        match self {
            TokenPattern::WordWithJoiners => r"\b\w[\w+\-]*\b",
            TokenPattern::Word => r"\b\w\w+\b",
        }
    }
}

/// Tokenizer configuration: token rule plus stop word set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub pattern: TokenPattern,
    pub stop_words: &'static [&'static str],
}

impl TokenizerConfig {
    /// Preset used for free-text and category queries
    pub fn content() -> Self {
        Self {
            pattern: TokenPattern::WordWithJoiners,
            stop_words: CONTENT_STOP_WORDS,
        }
    }

    /// Preset used when comparing posts against each other
    pub fn related() -> Self {
        Self {
            pattern: TokenPattern::Word,
            stop_words: ENGLISH_STOP_WORDS,
        }
    }
}

/// Lowercasing, pattern-based tokenizer with stop word removal
#[derive(Debug, Clone)]
pub struct Tokenizer {
    regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(config.pattern.regex())?,
            stop_words: config.stop_words.iter().copied().collect(),
        })
    }

    /// Split text into lowercase tokens, dropping stop words.
    ///
    /// Token order follows the input text.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Tokenizer {
        Tokenizer::new(&TokenizerConfig::content()).unwrap()
    }

    fn related() -> Tokenizer {
        Tokenizer::new(&TokenizerConfig::related()).unwrap()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = content().tokenize("Hello world! This is a test.");
        // Filters "this", "is", "a"
        assert_eq!(tokens, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_tokenize_keeps_hyphenated_words() {
        let tokens = content().tokenize("A well-known C-style trick");
        assert_eq!(tokens, vec!["well-known", "c-style", "trick"]);
    }

    #[test]
    fn test_related_splits_hyphenated_words() {
        let tokens = related().tokenize("well-known rust-lang");
        // "well" is an English stop word
        assert_eq!(tokens, vec!["known", "rust", "lang"]);
    }

    #[test]
    fn test_related_drops_single_characters() {
        let tokens = related().tokenize("x y rust z");
        assert_eq!(tokens, vec!["rust"]);
    }

    #[test]
    fn test_stop_lists_differ() {
        // "about" is only in the English list
        assert_eq!(content().tokenize("about rust"), vec!["about", "rust"]);
        assert_eq!(related().tokenize("about rust"), vec!["rust"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(content().tokenize("").is_empty());
        assert!(content().tokenize("   \t\n ").is_empty());
        assert!(related().tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = content().tokenize("Graph THEORY and Networks");
        assert_eq!(tokens, vec!["graph", "theory", "networks"]);
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "Rust ownership, borrowing and lifetimes in practice";
        assert_eq!(content().tokenize(text), content().tokenize(text));
    }
}
