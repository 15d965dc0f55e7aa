//! Profile resolution queries

use crate::common::{DomainError, DomainResult, UserId};
use crate::domains::identity::data::profile::PublicProfile;
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Resolve a user id to its public profile.
pub async fn resolve_profile(user_id: UserId, deps: &ServerDeps) -> DomainResult<PublicProfile> {
    let user = User::find_by_id(user_id, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound)?;
    Ok(user.public_profile())
}

/// Resolve a username (profile page lookup) to its public profile.
pub async fn find_profile_by_username(
    raw_username: &str,
    deps: &ServerDeps,
) -> DomainResult<PublicProfile> {
    let username = raw_username.trim().to_lowercase();
    let user = User::find_by_username(&username, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound)?;
    Ok(user.public_profile())
}

/// Live availability check used by the registration form.
pub async fn email_exists(raw_email: &str, deps: &ServerDeps) -> DomainResult<bool> {
    let email = raw_email.trim().to_lowercase();
    Ok(User::email_exists(&email, &deps.db_pool).await?)
}
