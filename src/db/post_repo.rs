use crate::models::Post;
use sqlx::{AnyConnection, AnyPool, Row};

/// Get all posts, ordered by ascending id (insertion/seed order)
pub async fn list_posts(pool: &AnyPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, slug, title, author, content, image_url, likes
        FROM posts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by its slug
///
/// At most one row can match thanks to the UNIQUE constraint on slug.
pub async fn find_by_slug(pool: &AnyPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, slug, title, author, content, image_url, likes
        FROM posts
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Persist a new like count for a post
pub async fn update_likes(pool: &AnyPool, slug: &str, likes: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET likes = $1
        WHERE slug = $2
        "#,
    )
    .bind(likes)
    .bind(slug)
    .execute(pool)
    .await?;

    Ok(())
}

/// Count total posts
pub async fn count_posts(pool: &AnyPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Insert a post on an open connection (used by the seed transaction)
pub async fn insert_post(
    conn: &mut AnyConnection,
    slug: &str,
    title: &str,
    author: &str,
    content: &str,
    image_url: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO posts (slug, title, author, content, image_url, likes)
        VALUES ($1, $2, $3, $4, $5, 0)
        "#,
    )
    .bind(slug)
    .bind(title)
    .bind(author)
    .bind(content)
    .bind(image_url)
    .execute(conn)
    .await?;

    Ok(())
}
