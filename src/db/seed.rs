/// Startup seed data for the `posts` table
use super::post_repo;
use sqlx::AnyPool;

/// One built-in post inserted on first startup
pub struct SeedPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub content: &'static str,
    pub image_url: Option<&'static str>,
}

/// The fixed built-in post set. Inserted exactly once across the table's
/// lifetime, in this order, with like counts starting at zero.
pub const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        slug: "my-first-post",
        title: "My First Post",
        author: "Alice Chen",
        content: "Welcome to the blog! This is the very first post, written to make sure \
                  everything works end to end. Expect more writing here soon.",
        image_url: Some("/img/first-post.jpg"),
    },
    SeedPost {
        slug: "getting-started-with-rust",
        title: "Getting Started with Rust",
        author: "Alice Chen",
        content: "Rust pairs a strict compiler with a friendly toolchain. In this post we \
                  walk through installing rustup, creating a project with cargo, and \
                  reading your first borrow checker error without panicking.",
        image_url: Some("/img/rust-intro.jpg"),
    },
    SeedPost {
        slug: "postcards-from-kyoto",
        title: "Postcards from Kyoto",
        author: "Ben Okafor",
        content: "Three days in Kyoto: temples at dawn, coffee kissaten in the afternoon, \
                  and the Kamo river at night. Notes and photos from the trip.",
        image_url: Some("/img/kyoto.jpg"),
    },
    SeedPost {
        slug: "sourdough-troubleshooting",
        title: "Sourdough Troubleshooting",
        author: "Ben Okafor",
        content: "Flat loaves, gummy crumb, and starters that refuse to rise. A checklist \
                  of the mistakes I made so you do not have to make them too.",
        image_url: Some("/img/sourdough.jpg"),
    },
    SeedPost {
        slug: "on-writing-less",
        title: "On Writing Less",
        author: "Alice Chen",
        content: "Shorter posts, published more often. An argument for treating a blog as \
                  a notebook rather than a magazine.",
        image_url: None,
    },
];

/// Insert the built-in post set if the table is empty; otherwise do nothing.
///
/// The whole batch runs inside one transaction: any insertion error rolls
/// everything back and propagates, so the table is never left half-seeded.
/// Returns the number of posts inserted (zero when the table already has
/// rows, making startup idempotent).
pub async fn seed_if_empty(pool: &AnyPool) -> Result<u64, sqlx::Error> {
    let existing = post_repo::count_posts(pool).await?;
    if existing > 0 {
        tracing::info!(existing, "posts table already populated, skipping seed");
        return Ok(0);
    }

    tracing::info!("posts table empty, inserting seed data");

    let mut tx = pool.begin().await?;
    for post in SEED_POSTS {
        post_repo::insert_post(
            &mut *tx,
            post.slug,
            post.title,
            post.author,
            post.content,
            post.image_url,
        )
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count = SEED_POSTS.len(), "seed data inserted");

    Ok(SEED_POSTS.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_slugs_are_unique() {
        let slugs: HashSet<_> = SEED_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), SEED_POSTS.len());
    }

    #[test]
    fn seed_set_contains_the_first_post() {
        assert!(SEED_POSTS.iter().any(|p| p.slug == "my-first-post"));
    }
}
