//! Login action
//!
//! Verifies credentials against the stored hash. An unknown username and a
//! wrong password both fail with the same generic error so the login form
//! cannot be used to probe which usernames exist.

use tracing::debug;

use crate::common::{DomainError, DomainResult};
use crate::domains::identity::data::profile::PublicProfile;
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Authenticate a username/password pair; returns the public profile on
/// success.
pub async fn authenticate(
    raw_username: &str,
    password: &str,
    deps: &ServerDeps,
) -> DomainResult<PublicProfile> {
    let username = raw_username.trim().to_lowercase();

    let Some(user) = User::find_by_username(&username, &deps.db_pool).await? else {
        debug!(username = %username, "login failed: unknown username");
        return Err(DomainError::Authentication);
    };

    if !deps
        .password_hasher
        .verify(password, &user.password_hash)
        .await
    {
        debug!(user_id = %user.id, "login failed: password mismatch");
        return Err(DomainError::Authentication);
    }

    Ok(user.public_profile())
}
