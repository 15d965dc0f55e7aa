//! The aggregation/enrichment engine.
//!
//! Every read path (single post, author timeline, feed, search) goes
//! through [`EnrichedPost::query`]: one filtered, sorted query that joins
//! each post with its author row and decorates the result with the public
//! author identity and a viewer-relative ownership flag. Keeping the join
//! in one place guarantees every surface shows the same author shape and
//! the same ownership semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::{PostId, UserId};
use crate::domains::identity::models::user::avatar_url;

/// Caller-supplied row filter.
#[derive(Debug, Clone)]
pub enum PostFilter {
    /// Exactly one post by id.
    ById(PostId),
    /// Everything a single author wrote.
    ByAuthor(UserId),
    /// Everything written by any author in the set (feed candidates).
    ByAuthors(Vec<UserId>),
    /// Full-text match over title and body.
    Text(String),
}

/// Caller-supplied ordering. The engine imposes nothing beyond what is
/// asked for.
#[derive(Debug, Clone, Copy)]
pub enum PostSort {
    NewestFirst,
    /// Descending text-search rank; only meaningful with `PostFilter::Text`.
    Relevance,
}

/// Public author identity attached to each enriched post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub username: String,
    pub avatar: String,
}

/// A post joined with its author, decorated for a specific viewer.
/// Ephemeral by design: `is_viewer_owner` is viewer-relative, so this view
/// must be computed fresh per query and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedPost {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_id: UserId,
    pub author: PostAuthor,
    pub is_viewer_owner: bool,
}

#[derive(sqlx::FromRow)]
struct EnrichedRow {
    id: PostId,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    author_id: UserId,
    author_username: String,
    author_email: String,
}

fn build_query(filter: &PostFilter, sort: &PostSort) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT p.id, p.title, p.body, p.created_at, p.author_id, \
         u.username AS author_username, u.email AS author_email \
         FROM posts p JOIN users u ON u.id = p.author_id",
    );

    match filter {
        PostFilter::ById(id) => {
            qb.push(" WHERE p.id = ");
            qb.push_bind(*id);
        }
        PostFilter::ByAuthor(author) => {
            qb.push(" WHERE p.author_id = ");
            qb.push_bind(*author);
        }
        PostFilter::ByAuthors(authors) => {
            qb.push(" WHERE p.author_id = ANY(");
            qb.push_bind(authors.clone());
            qb.push(")");
        }
        PostFilter::Text(term) => {
            qb.push(" WHERE p.search_tsv @@ websearch_to_tsquery('english', ");
            qb.push_bind(term.clone());
            qb.push(")");
        }
    }

    match (sort, filter) {
        (PostSort::NewestFirst, _) => {
            qb.push(" ORDER BY p.created_at DESC");
        }
        (PostSort::Relevance, PostFilter::Text(term)) => {
            qb.push(" ORDER BY ts_rank(p.search_tsv, websearch_to_tsquery('english', ");
            qb.push_bind(term.clone());
            qb.push(")) DESC");
        }
        // Relevance without a text filter has no rank to sort by.
        (PostSort::Relevance, _) => {}
    }

    qb
}

impl EnrichedPost {
    /// Run the enrichment query for a filter, sort, and viewer.
    ///
    /// Anonymous viewers (`None`) own nothing. Multi-item callers take the
    /// empty vec as-is; single-item callers map it to their own not-found
    /// error.
    pub async fn query(
        filter: &PostFilter,
        sort: PostSort,
        viewer: Option<UserId>,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut qb = build_query(filter, &sort);
        let rows: Vec<EnrichedRow> = qb.build_query_as().fetch_all(pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| EnrichedPost {
                id: row.id,
                title: row.title,
                body: row.body,
                created_at: row.created_at,
                author_id: row.author_id,
                author: PostAuthor {
                    username: row.author_username,
                    avatar: avatar_url(&row.author_email),
                },
                is_viewer_owner: viewer == Some(row.author_id),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_filter_sql() {
        let qb = build_query(&PostFilter::ById(PostId::new()), &PostSort::NewestFirst);
        let sql = qb.sql();
        assert!(sql.contains("WHERE p.id = $1"));
        assert!(sql.contains("ORDER BY p.created_at DESC"));
    }

    #[test]
    fn test_author_set_filter_sql() {
        let qb = build_query(
            &PostFilter::ByAuthors(vec![UserId::new(), UserId::new()]),
            &PostSort::NewestFirst,
        );
        assert!(qb.sql().contains("WHERE p.author_id = ANY($1)"));
    }

    #[test]
    fn test_text_filter_sorts_by_rank() {
        let qb = build_query(&PostFilter::Text("dogs".to_string()), &PostSort::Relevance);
        let sql = qb.sql();
        assert!(sql.contains("websearch_to_tsquery('english', $1)"));
        assert!(sql.contains("ORDER BY ts_rank"));
    }

    #[test]
    fn test_relevance_without_text_filter_adds_no_ordering() {
        let qb = build_query(&PostFilter::ByAuthor(UserId::new()), &PostSort::Relevance);
        assert!(!qb.sql().contains("ORDER BY"));
    }

    #[test]
    fn test_join_always_selects_author_identity() {
        let qb = build_query(&PostFilter::ById(PostId::new()), &PostSort::NewestFirst);
        let sql = qb.sql();
        assert!(sql.contains("JOIN users u ON u.id = p.author_id"));
        assert!(sql.contains("u.username AS author_username"));
        assert!(sql.contains("u.email AS author_email"));
    }
}
