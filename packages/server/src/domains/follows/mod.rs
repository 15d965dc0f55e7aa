pub mod models;

pub use models::follow::Follow;
