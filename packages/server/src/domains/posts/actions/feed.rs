//! Feed construction
//!
//! Two read-only steps: resolve the followed-author set, then run the
//! enrichment query over it. A user who follows no one gets an empty feed
//! without touching the posts table.

use tracing::debug;

use crate::common::{DomainResult, UserId};
use crate::domains::follows::models::Follow;
use crate::domains::posts::models::{EnrichedPost, PostFilter, PostSort};
use crate::kernel::ServerDeps;

/// The time-ordered union of posts by everyone the user follows.
pub async fn feed_for(user: UserId, deps: &ServerDeps) -> DomainResult<Vec<EnrichedPost>> {
    let followed = Follow::followed_ids(user, &deps.db_pool).await?;
    if followed.is_empty() {
        debug!(user_id = %user, "empty follow set, empty feed");
        return Ok(Vec::new());
    }

    Ok(EnrichedPost::query(
        &PostFilter::ByAuthors(followed),
        PostSort::NewestFirst,
        Some(user),
        &deps.db_pool,
    )
    .await?)
}
