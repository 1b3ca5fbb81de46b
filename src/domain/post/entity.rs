// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    AuthorId, FeaturedImage, PostContent, PostExcerpt, PostId, PostSlug, PostStatus, PostTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub excerpt: Option<PostExcerpt>,
    pub content: PostContent,
    pub featured_image: Option<FeaturedImage>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Transition to published. The publish timestamp is stamped on the first
    /// transition only and kept on every later one.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Transition back to draft. `published_at` is left in place so the
    /// original publication date survives a temporary unlisting.
    pub fn revert_to_draft(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Draft;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub excerpt: Option<PostExcerpt>,
    pub content: PostContent,
    pub featured_image: Option<FeaturedImage>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update: only `Some` fields are written. The author reference is
/// deliberately absent, it never changes after creation.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub excerpt: Option<PostExcerpt>,
    pub content: Option<PostContent>,
    pub featured_image: Option<FeaturedImage>,
    pub status: Option<PostStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            featured_image: None,
            status: None,
            published_at: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_excerpt(mut self, excerpt: PostExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_featured_image(mut self, image: FeaturedImage) -> Self {
        self.featured_image = Some(image);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.featured_image.is_none()
            && self.status.is_none()
            && self.published_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("title").unwrap(),
            slug: PostSlug::new("title").unwrap(),
            excerpt: None,
            content: PostContent::new("content").unwrap(),
            featured_image: None,
            status: PostStatus::Draft,
            published_at: None,
            author_id: AuthorId::new(1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn publish_stamps_timestamp_once() {
        let mut post = sample_post();
        let first = Utc::now();
        post.publish(first);
        assert!(post.is_published());
        assert_eq!(post.published_at, Some(first));

        let later = first + chrono::Duration::hours(1);
        post.publish(later);
        assert_eq!(post.published_at, Some(first));
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn revert_to_draft_keeps_publish_timestamp() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        let later = now + chrono::Duration::minutes(5);
        post.revert_to_draft(later);
        assert!(!post.is_published());
        assert_eq!(post.published_at, Some(now));
    }

    #[test]
    fn fresh_update_is_empty() {
        let update = PostUpdate::new(PostId::new(1).unwrap(), Utc::now());
        assert!(update.is_empty());
        assert!(
            !update
                .with_status(PostStatus::Published)
                .is_empty()
        );
    }
}
