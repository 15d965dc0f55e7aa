use serde::{Deserialize, Serialize};

use crate::common::UserId;

/// Public view of an account: everything the platform shows about a user
/// to other users. The email and password hash never leave the identity
/// domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: UserId,
    pub username: String,
    /// Deterministic gravatar URL derived from the account email.
    pub avatar: String,
}
