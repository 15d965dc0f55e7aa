// Scribe - content store and feed/aggregation core
//
// This crate is the persistence-facing core of a social writing platform:
// account registration and login, post authoring with sanitization and
// ownership enforcement, follow-based feeds, and full-text search.
// The HTTP layer, sessions, and the chat transport live elsewhere and
// call into the actions exposed by the domains below.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::Config;
