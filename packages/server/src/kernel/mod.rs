// Infrastructure shared by all domains

pub mod deps;
pub mod password;
pub mod sanitize;
pub mod traits;

pub use deps::ServerDeps;
pub use password::Argon2PasswordHasher;
pub use sanitize::clean_text;
pub use traits::BasePasswordHasher;
