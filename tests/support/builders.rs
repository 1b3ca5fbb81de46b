// tests/support/builders.rs
use chrono::{DateTime, Utc};
use pressroom::domain::post::{
    AuthorId, NewPost, PostContent, PostSlug, PostStatus, PostTitle,
};

/// Minimal `NewPost` for seeding repositories directly in query tests.
pub fn new_post(
    title: &str,
    slug: &str,
    status: PostStatus,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    created_at: DateTime<Utc>,
) -> NewPost {
    NewPost {
        title: PostTitle::new(title).unwrap(),
        slug: PostSlug::new(slug).unwrap(),
        excerpt: None,
        content: PostContent::new("content").unwrap(),
        featured_image: None,
        status,
        published_at,
        author_id: AuthorId::new(author_id).unwrap(),
        created_at,
        updated_at: created_at,
    }
}
