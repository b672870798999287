//! Blogrec Core Library
//!
//! TF-IDF content ranking and item-item collaborative filtering for blog
//! recommendations.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod recommend;
pub mod similarity;
pub mod source;
pub mod text;
pub mod vector;
