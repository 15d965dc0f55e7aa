use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{PostId, UserId};

/// Post row. Title and body are stored sanitized (plain text, no markup);
/// `created_at` and `author_id` are set once at creation and never change.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Post {
    /// Insert a new post; `created_at` comes from the database clock.
    pub async fn insert(
        title: &str,
        body: &str,
        author_id: UserId,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, body, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, author_id, created_at
            "#,
        )
        .bind(PostId::new())
        .bind(title)
        .bind(body)
        .bind(author_id)
        .fetch_one(pool)
        .await
    }

    /// Conditionally update title/body, matching on BOTH id and author.
    /// Returns `false` when no row matched, i.e. the post is gone or the
    /// requester is not the owner; a non-owner can never mutate even if a
    /// prior ownership check raced with another writer.
    pub async fn update_content(
        id: PostId,
        author_id: UserId,
        title: &str,
        body: &str,
        pool: &PgPool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $3, body = $4
            WHERE id = $1 AND author_id = $2
            "#,
        )
        .bind(id)
        .bind(author_id)
        .bind(title)
        .bind(body)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Conditionally delete, matching on BOTH id and author. Returns
    /// `false` when no row matched.
    pub async fn delete_by_author(
        id: PostId,
        author_id: UserId,
        pool: &PgPool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count posts by author (profile header count).
    pub async fn count_by_author(author_id: UserId, pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await
    }
}
