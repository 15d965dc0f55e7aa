pub mod create_post;
pub mod delete_post;
pub mod edit_post;
pub mod feed;
pub mod queries;
pub mod search;

pub use create_post::create_post;
pub use delete_post::delete_post;
pub use edit_post::edit_post;
pub use feed::feed_for;
pub use queries::{count_posts_by_author, find_post, posts_by_author};
pub use search::search_posts;

use crate::common::{DomainError, DomainResult};
use crate::kernel::sanitize::clean_text;

/// Shared cleanup + validation for post content: trim and strip markup,
/// then collect every violated rule before rejecting.
pub(crate) fn sanitized_content(raw_title: &str, raw_body: &str) -> DomainResult<(String, String)> {
    let title = clean_text(raw_title);
    let body = clean_text(raw_body);

    let mut errors = Vec::new();
    if title.is_empty() {
        errors.push("Title cannot be empty!".to_string());
    }
    if body.is_empty() {
        errors.push("Body cannot be empty!".to_string());
    }

    if !errors.is_empty() {
        return Err(DomainError::validation(errors));
    }
    Ok((title, body))
}
