//! Post creation action

use tracing::info;

use crate::common::{DomainResult, PostId, UserId};
use crate::domains::posts::actions::sanitized_content;
use crate::domains::posts::models::Post;
use crate::kernel::ServerDeps;

/// Validate, sanitize, and persist a new post; returns the new id.
///
/// A storage failure here is infrastructure, not user error, and surfaces
/// as `DomainError::Storage` rather than validation text.
pub async fn create_post(
    raw_title: &str,
    raw_body: &str,
    author: UserId,
    deps: &ServerDeps,
) -> DomainResult<PostId> {
    let (title, body) = sanitized_content(raw_title, raw_body)?;

    let post = Post::insert(&title, &body, author, &deps.db_pool).await?;

    info!(post_id = %post.id, author_id = %author, "post created");
    Ok(post.id)
}
