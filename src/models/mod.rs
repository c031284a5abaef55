/// Data models for the blog service
use serde::{Deserialize, Serialize};

/// Post entity - one row of the `posts` table.
///
/// Rows are created only by the startup seed step and mutated only by the
/// like toggle; there are no create/update/delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub image_url: Option<String>,
    pub likes: i64,
}
