use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::UserId;

/// Directed follower → followed edge. Feed construction only reads the
/// followed side; the write queries exist for the follow/unfollow surface.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Follow {
    pub follower_id: UserId,
    pub followed_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// All user ids the given user follows (the feed candidate set).
    pub async fn followed_ids(follower: UserId, pool: &PgPool) -> Result<Vec<UserId>, sqlx::Error> {
        sqlx::query_scalar::<_, UserId>(
            "SELECT followed_id FROM follows WHERE follower_id = $1",
        )
        .bind(follower)
        .fetch_all(pool)
        .await
    }

    /// Create a follow edge. Duplicate follows are a no-op; self-follows
    /// are rejected by the `follows_no_self` check constraint.
    pub async fn create(
        follower: UserId,
        followed: UserId,
        pool: &PgPool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, followed_id) DO NOTHING
            "#,
        )
        .bind(follower)
        .bind(followed)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a follow edge; removing a non-existent edge is a no-op.
    pub async fn remove(
        follower: UserId,
        followed: UserId,
        pool: &PgPool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower)
            .bind(followed)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// How many users follow the given user (profile header count).
    pub async fn count_followers(user: UserId, pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE followed_id = $1")
            .bind(user)
            .fetch_one(pool)
            .await
    }

    /// How many users the given user follows.
    pub async fn count_following(user: UserId, pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE follower_id = $1")
            .bind(user)
            .fetch_one(pool)
            .await
    }
}
