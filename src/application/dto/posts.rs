use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt.map(|e| e.into_inner()),
            content: post.content.into_inner(),
            featured_image: post.featured_image.map(|i| i.into_inner()),
            status: post.status.as_str().to_string(),
            published_at: post.published_at,
            author_id: post.author_id.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
