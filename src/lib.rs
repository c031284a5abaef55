/// Blog Service Library
///
/// A small blog backend serving posts out of a single relational table.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the `/api/posts` surface
/// - `models`: Data structures for posts
/// - `db`: Database access layer, schema bootstrap, and seed data
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
