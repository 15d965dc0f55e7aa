//! Typed ID definitions for the domain entities.

pub use super::id::Id;

/// Marker type for User entities.
pub struct User;

/// Marker type for Post entities.
pub struct Post;

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Post entities.
pub type PostId = Id<Post>;
