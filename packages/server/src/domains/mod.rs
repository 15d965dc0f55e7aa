// Business domains
pub mod follows;
pub mod identity;
pub mod posts;
