//! Full-text post search

use crate::common::{DomainError, DomainResult, UserId};
use crate::domains::posts::models::{EnrichedPost, PostFilter, PostSort};
use crate::kernel::ServerDeps;

/// Search posts by relevance. A blank term is rejected; a term that
/// matches nothing returns an empty vec, never an error.
pub async fn search_posts(
    term: &str,
    viewer: Option<UserId>,
    deps: &ServerDeps,
) -> DomainResult<Vec<EnrichedPost>> {
    let term = term.trim();
    if term.is_empty() {
        return Err(DomainError::InvalidQuery);
    }

    Ok(EnrichedPost::query(
        &PostFilter::Text(term.to_string()),
        PostSort::Relevance,
        viewer,
        &deps.db_pool,
    )
    .await?)
}
