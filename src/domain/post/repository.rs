use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{AuthorId, PostId, PostSlug};
use async_trait::async_trait;

/// Data access for the post collection. Single-row operations rely on the
/// store's native consistency; the unique index on `slug` is the final
/// authority for slug uniqueness.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    /// Applies a partial update. Returns `None` when no post has the id.
    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>>;

    /// Hard delete. Returns whether a matching post existed.
    async fn delete(&self, id: PostId) -> DomainResult<bool>;

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;

    /// Every post, newest first.
    async fn list_all(&self) -> DomainResult<Vec<Post>>;

    /// Page of all posts, newest first.
    async fn list(&self, page: PageRequest) -> DomainResult<Page<Post>>;

    /// Published posts, most recently published first.
    async fn list_published(&self, page: PageRequest) -> DomainResult<Page<Post>>;

    /// Draft posts, newest first.
    async fn list_drafts(&self, page: PageRequest) -> DomainResult<Page<Post>>;

    /// Posts owned by the given author, newest first.
    async fn list_by_author(&self, author_id: AuthorId, page: PageRequest)
    -> DomainResult<Page<Post>>;
}
