pub mod authenticate;
pub mod queries;
pub mod register;

pub use authenticate::authenticate;
pub use queries::{email_exists, find_profile_by_username, resolve_profile};
pub use register::register;
