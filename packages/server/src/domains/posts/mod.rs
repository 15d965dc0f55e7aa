pub mod actions;
pub mod models;

// Re-export models (domain models)
pub use models::enriched::{EnrichedPost, PostAuthor, PostFilter, PostSort};
pub use models::post::Post;
