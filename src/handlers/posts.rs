/// Post handlers - HTTP endpoints for post operations
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::Post;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::AnyPool;

/// Outward-facing post shape for the list and get endpoints.
///
/// The like count is deliberately not part of this shape; it is only
/// reported by the mutation endpoints.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub image_url: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            author: post.author,
            content: post.content,
            image_url: post.image_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes: i64,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub user: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CommentEntry {
    pub user: String,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub likes: i64,
    pub comments: Vec<CommentEntry>,
}

/// Get all posts, ordered by ascending id
pub async fn list_posts(pool: web::Data<AnyPool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(&pool).await?;
    let shaped: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(shaped))
}

/// Get a single post by slug
pub async fn get_post_by_slug(
    pool: web::Data<AnyPool>,
    slug: web::Path<String>,
) -> Result<HttpResponse> {
    let post = require_post(&pool, &slug).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// Toggle the like counter on a post
///
/// "like" increments by one, "unlike" decrements by one clamped at zero, and
/// any other action string changes nothing (kept permissive for parity with
/// the original behavior). The read-then-write pair is not atomic, so
/// concurrent toggles on the same slug can lose updates.
pub async fn toggle_like(
    pool: web::Data<AnyPool>,
    slug: web::Path<String>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let post = require_post(&pool, &slug).await?;

    let likes = match req.action.as_str() {
        "like" => {
            let likes = post.likes + 1;
            post_repo::update_likes(&pool, &post.slug, likes).await?;
            likes
        }
        "unlike" => {
            let likes = (post.likes - 1).max(0);
            post_repo::update_likes(&pool, &post.slug, likes).await?;
            likes
        }
        other => {
            tracing::debug!(slug = %post.slug, action = other, "unrecognized like action, no-op");
            post.likes
        }
    };

    Ok(HttpResponse::Ok().json(LikeResponse { likes }))
}

/// Accept a comment for a post (stub)
///
/// Comments are not persisted anywhere: the response echoes the submitted
/// comment as a single-element list with a placeholder date, and every call
/// starts from an empty comment history.
pub async fn add_comment(
    pool: web::Data<AnyPool>,
    slug: web::Path<String>,
    req: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let post = require_post(&pool, &slug).await?;
    let req = req.into_inner();

    let comments = vec![CommentEntry {
        user: req.user,
        content: req.content,
        date: "just now".to_string(),
    }];

    Ok(HttpResponse::Ok().json(CommentResponse {
        likes: post.likes,
        comments,
    }))
}

/// Resolve a slug to its post, or fail with the client-facing 404
async fn require_post(pool: &AnyPool, slug: &str) -> Result<Post> {
    post_repo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}
