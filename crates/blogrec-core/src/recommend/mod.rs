//! Recommendation pipelines
//!
//! - [`content`]: rank blogs against a free-text query, with category fallback
//! - [`related`]: rank blogs against one target blog
//! - [`collaborative`]: item-item filtering over likes
//!
//! Each pipeline builds its vectors and tables fresh per call; nothing is
//! shared or mutated across calls. Memory grows with corpus size times
//! vocabulary (or blogs squared for the collaborative table), which bounds the
//! corpus sizes this is suited to.

pub mod collaborative;
pub mod content;
pub mod related;

pub use collaborative::{CollabRecommender, InteractionMatrix, ItemSimilarity};
pub use content::ContentRecommender;
pub use related::RelatedRecommender;
