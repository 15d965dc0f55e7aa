pub mod actions;
pub mod data;
pub mod models;

// Re-export data types (API-facing DTOs)
pub use data::profile::PublicProfile;

// Re-export models (domain models)
pub use models::user::User;
