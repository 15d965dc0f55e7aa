//! Post deletion action
//!
//! Same ownership re-verification sequence as editing. Deleting an
//! already-gone id fails with `NotFound` every time, so repeat deletes are
//! harmless.

use tracing::info;

use crate::common::{DomainError, DomainResult, PostId, UserId};
use crate::domains::posts::models::{EnrichedPost, Post, PostFilter, PostSort};
use crate::kernel::ServerDeps;

/// Delete a post owned by the requester.
pub async fn delete_post(id: &str, requester: UserId, deps: &ServerDeps) -> DomainResult<()> {
    let post_id = PostId::parse(id).map_err(|_| DomainError::InvalidId)?;

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

    let deleted = Post::delete_by_author(post_id, requester, &deps.db_pool).await?;
    if !deleted {
        return Err(DomainError::NotFound);
    }

    info!(post_id = %post_id, author_id = %requester, "post deleted");
    Ok(())
}
