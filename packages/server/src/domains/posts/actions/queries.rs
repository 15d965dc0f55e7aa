//! Single-post and author-timeline lookups

use crate::common::{DomainError, DomainResult, PostId, UserId};
use crate::domains::posts::models::{EnrichedPost, Post, PostFilter, PostSort};
use crate::kernel::ServerDeps;

/// Look up one post by its opaque string id, decorated for the viewer.
/// Malformed ids are rejected before any query runs.
pub async fn find_post(
    id: &str,
    viewer: Option<UserId>,
    deps: &ServerDeps,
) -> DomainResult<EnrichedPost> {
    let post_id = PostId::parse(id).map_err(|_| DomainError::InvalidId)?;

    let posts = EnrichedPost::query(
        &PostFilter::ById(post_id),
        PostSort::NewestFirst,
        viewer,
        &deps.db_pool,
    )
    .await?;

    posts.into_iter().next().ok_or(DomainError::NotFound)
}

/// An author's posts, newest first. The viewer is optional; without one
/// the ownership flag is false on every row.
pub async fn posts_by_author(
    author: UserId,
    viewer: Option<UserId>,
    deps: &ServerDeps,
) -> DomainResult<Vec<EnrichedPost>> {
    Ok(EnrichedPost::query(
        &PostFilter::ByAuthor(author),
        PostSort::NewestFirst,
        viewer,
        &deps.db_pool,
    )
    .await?)
}

/// Count of an author's posts (profile header).
pub async fn count_posts_by_author(author: UserId, deps: &ServerDeps) -> DomainResult<i64> {
    Ok(Post::count_by_author(author, &deps.db_pool).await?)
}
