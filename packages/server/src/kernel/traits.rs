// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names.

use anyhow::Result;
use async_trait::async_trait;

/// Salted one-way password hashing.
///
/// Registration and login delegate the credential primitive through this
/// trait; tests substitute a cheap deterministic implementation.
#[async_trait]
pub trait BasePasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt.
    async fn hash(&self, plaintext: &str) -> Result<String>;

    /// Verify a plaintext password against a stored digest.
    /// Returns `false` for a mismatch or an undecodable digest.
    async fn verify(&self, plaintext: &str, digest: &str) -> bool;
}
