//! Account registration action
//!
//! Normalizes and validates the submitted fields, collecting every
//! violation before rejecting, then hashes the password and inserts the
//! account. Uniqueness is checked up front for a friendly message, and the
//! database unique constraints are the authoritative guard: a constraint
//! violation from a racing registration maps to the same validation error.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};
use validator::ValidateEmail;

use crate::common::{DomainError, DomainResult, UserId};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;
const PASSWORD_MIN: usize = 12;
const PASSWORD_MAX: usize = 100;

lazy_static! {
    // At least two letters followed by at least two digits.
    static ref USERNAME_PATTERN: Regex = Regex::new(r"[A-Za-z]{2,}\d{2,}").unwrap();
}

/// Trim and lowercase a submitted username or email.
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Syntax-only validation over normalized fields. Returns every violated
/// rule, never just the first.
fn validate_account(username: &str, email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if username.is_empty() {
        errors.push("Username cannot be empty".to_string());
    }
    if !username.is_empty() && !USERNAME_PATTERN.is_match(username) {
        errors.push("Username must be alphanumeric".to_string());
    }
    let username_len = username.chars().count();
    if username_len > 0 && username_len < USERNAME_MIN {
        errors.push("Username must exceed three characters".to_string());
    }
    if username_len > USERNAME_MAX {
        errors.push("Username cannot exceed 30 characters".to_string());
    }

    if !email.validate_email() {
        errors.push("Email cannot be empty or is invalid".to_string());
    }

    if password.is_empty() {
        errors.push("Password cannot be empty".to_string());
    }
    let password_len = password.chars().count();
    if password_len > 0 && password_len < PASSWORD_MIN {
        errors.push("Password must be at least 12 characters".to_string());
    }
    if password_len > PASSWORD_MAX {
        errors.push("Password cannot exceed 100 characters".to_string());
    }

    errors
}

/// Whether the normalized username is worth checking against the database.
fn username_checkable(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&len) && USERNAME_PATTERN.is_match(username)
}

/// Register a new account and return its id.
pub async fn register(
    raw_username: &str,
    raw_email: &str,
    password: &str,
    deps: &ServerDeps,
) -> DomainResult<UserId> {
    let username = normalize(raw_username);
    let email = normalize(raw_email);

    let mut errors = validate_account(&username, &email, password);

    // Friendly uniqueness messages; only worth a query for usable values.
    if username_checkable(&username)
        && User::username_exists(&username, &deps.db_pool).await?
    {
        errors.push("Username has already been taken".to_string());
    }
    if email.validate_email() && User::email_exists(&email, &deps.db_pool).await? {
        errors.push("Email has already been taken".to_string());
    }

    if !errors.is_empty() {
        debug!(username = %username, ?errors, "registration rejected");
        return Err(DomainError::validation(errors));
    }

    let password_hash = deps.password_hasher.hash(password).await?;

    let user = User::insert(&username, &email, &password_hash, &deps.db_pool)
        .await
        .map_err(map_unique_violation)?;

    info!(user_id = %user.id, username = %user.username, "account registered");
    Ok(user.id)
}

/// A racing registration can slip past the existence checks; the unique
/// constraints win and the loser gets the same validation message.
fn map_unique_violation(err: sqlx::Error) -> DomainError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.constraint() {
            Some("users_username_key") => {
                return DomainError::validation(vec![
                    "Username has already been taken".to_string()
                ]);
            }
            Some("users_email_key") => {
                return DomainError::validation(vec![
                    "Email has already been taken".to_string()
                ]);
            }
            _ => {}
        }
    }
    DomainError::Storage(err)
}
