//! Server dependencies for domain actions (using traits for testability)
//!
//! Every action takes a `&ServerDeps` instead of reaching for globals, so
//! tests can assemble a container around a scratch database and a fake
//! hasher.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::traits::BasePasswordHasher;

/// Dependency container passed into every domain action.
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub password_hasher: Arc<dyn BasePasswordHasher>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, password_hasher: Arc<dyn BasePasswordHasher>) -> Self {
        Self {
            db_pool,
            password_hasher,
        }
    }
}
