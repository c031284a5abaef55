/// HTTP handlers for the `/api/posts` surface
///
/// - List posts and fetch a post by slug (read-only)
/// - Toggle the like counter on a post
/// - Accept a comment for a post (stub, nothing is persisted)
pub mod posts;

// Re-export handler functions at module level
pub use posts::{add_comment, get_post_by_slug, list_posts, toggle_like};
