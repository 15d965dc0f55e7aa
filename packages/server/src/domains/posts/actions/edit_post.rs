//! Post editing action
//!
//! Ownership is re-verified here no matter what the request layer already
//! checked: the lookup resolves the post with the requester as viewer, and
//! the write itself matches on both id and author so a non-owner can never
//! mutate, even when the check and the write interleave with other
//! requests. `created_at` and `author_id` are never touched by an edit.

use tracing::info;

use crate::common::{DomainError, DomainResult, PostId, UserId};
use crate::domains::posts::actions::sanitized_content;
use crate::domains::posts::models::{EnrichedPost, Post, PostFilter, PostSort};
use crate::kernel::ServerDeps;

/// Apply sanitized title/body updates to a post owned by the requester.
pub async fn edit_post(
    id: &str,
    raw_title: &str,
    raw_body: &str,
    requester: UserId,
    deps: &ServerDeps,
) -> DomainResult<()> {
    let post_id = PostId::parse(id).map_err(|_| DomainError::InvalidId)?;

    // Authoritative ownership check, viewer = requester.
    let existing = EnrichedPost::query(
        &PostFilter::ById(post_id),
        PostSort::NewestFirst,
        Some(requester),
        &deps.db_pool,
    )
    .await?;
    let Some(existing) = existing.into_iter().next() else {
        return Err(DomainError::NotFound);
    };
    if !existing.is_viewer_owner {
        return Err(DomainError::Forbidden);
    }

    let (title, body) = sanitized_content(raw_title, raw_body)?;

    let updated = Post::update_content(post_id, requester, &title, &body, &deps.db_pool).await?;
    if !updated {
        // Matched nothing: the post was deleted between check and write.
        return Err(DomainError::NotFound);
    }

    info!(post_id = %post_id, author_id = %requester, "post updated");
    Ok(())
}
