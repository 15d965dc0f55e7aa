pub mod enriched;
pub mod post;

pub use enriched::{EnrichedPost, PostAuthor, PostFilter, PostSort};
pub use post::Post;
