//! Shared fixtures: a deterministic password hasher and data builders.
//!
//! The database is shared across tests, so fixture usernames and emails
//! carry a random numeric suffix to stay out of each other's way.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use scribe_core::common::{PostId, UserId};
use scribe_core::domains::follows::Follow;
use scribe_core::domains::identity::actions::register;
use scribe_core::domains::posts::actions::create_post;
use scribe_core::kernel::{BasePasswordHasher, ServerDeps};

/// Password accepted by every fixture account.
pub const TEST_PASSWORD: &str = "a perfectly fine password";

/// Deterministic hasher so tests never pay the argon2 cost.
pub struct FakePasswordHasher;

#[async_trait]
impl BasePasswordHasher for FakePasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        Ok(format!("fake${plaintext}"))
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> bool {
        digest == format!("fake${plaintext}")
    }
}

/// A username that satisfies the letters-then-digits pattern and is
/// unique across the shared database.
pub fn unique_username(stem: &str) -> String {
    let suffix = Uuid::new_v4().as_u128() % 1_000_000;
    format!("{stem}{suffix:06}")
}

pub fn unique_email(stem: &str) -> String {
    let suffix = Uuid::new_v4().as_u128() % 1_000_000;
    format!("{stem}{suffix:06}@example.com")
}

/// Register a fresh account and return its id.
pub async fn register_user(stem: &str, deps: &ServerDeps) -> UserId {
    register(
        &unique_username(stem),
        &unique_email(stem),
        TEST_PASSWORD,
        deps,
    )
    .await
    .expect("fixture registration should succeed")
}

/// Create a post and return its id.
pub async fn make_post(title: &str, body: &str, author: UserId, deps: &ServerDeps) -> PostId {
    create_post(title, body, author, deps)
        .await
        .expect("fixture post creation should succeed")
}

/// Make `follower` follow `followed`.
pub async fn follow(follower: UserId, followed: UserId, deps: &ServerDeps) {
    Follow::create(follower, followed, &deps.db_pool)
        .await
        .expect("fixture follow should succeed");
}
