// tests/support/mocks/post_repo.rs
use async_trait::async_trait;
use pressroom::domain::errors::{DomainError, DomainResult};
use pressroom::domain::pagination::{Page, PageRequest};
use pressroom::domain::post::{
    AuthorId, NewPost, Post, PostId, PostRepository, PostSlug, PostStatus, PostUpdate,
};
use std::sync::Mutex;

struct State {
    posts: Vec<Post>,
    next_id: i64,
}

/// In-memory stand-in for the Postgres repository. Enforces slug uniqueness
/// on insert the way the database unique index does.
pub struct InMemoryPostRepo {
    state: Mutex<State>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    fn page_of(mut posts: Vec<Post>, request: PageRequest) -> Page<Post> {
        let total = posts.len() as u64;
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let posts = if start >= posts.len() {
            Vec::new()
        } else {
            posts
                .split_off(start)
                .into_iter()
                .take(request.per_page() as usize)
                .collect()
        };
        Page::new(posts, request, total)
    }

    fn sorted_newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        posts
    }
}

impl Default for InMemoryPostRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulates losing slug races against concurrent writers: `find_by_slug`
/// always misses, while the first `conflicts` inserts fail the way the
/// database unique index would.
pub struct RacingPostRepo {
    inner: InMemoryPostRepo,
    conflicts: Mutex<u32>,
    insert_calls: Mutex<u32>,
}

impl RacingPostRepo {
    pub fn new(conflicts: u32) -> Self {
        Self {
            inner: InMemoryPostRepo::new(),
            conflicts: Mutex::new(conflicts),
            insert_calls: Mutex::new(0),
        }
    }

    pub fn insert_calls(&self) -> u32 {
        *self.insert_calls.lock().unwrap()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl PostRepository for RacingPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        *self.insert_calls.lock().unwrap() += 1;
        {
            let mut conflicts = self.conflicts.lock().unwrap();
            if *conflicts > 0 {
                *conflicts -= 1;
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        self.inner.insert(post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        self.inner.delete(id).await
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(None)
    }

    async fn list_all(&self) -> DomainResult<Vec<Post>> {
        self.inner.list_all().await
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        self.inner.list(page).await
    }

    async fn list_published(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        self.inner.list_published(page).await
    }

    async fn list_drafts(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        self.inner.list_drafts(page).await
    }

    async fn list_by_author(
        &self,
        author_id: AuthorId,
        page: PageRequest,
    ) -> DomainResult<Page<Post>> {
        self.inner.list_by_author(author_id, page).await
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        if state.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = PostId::new(state.next_id)?;
        state.next_id += 1;

        let post = Post {
            id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            featured_image: post.featured_image,
            status: post.status,
            published_at: post.published_at,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let mut state = self.state.lock().unwrap();
        let Some(post) = state.posts.iter_mut().find(|p| p.id == update.id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(image) = update.featured_image {
            post.featured_image = Some(image);
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        if let Some(published_at) = update.published_at {
            post.published_at = Some(published_at);
        }
        post.updated_at = update.updated_at;

        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        Ok(state.posts.len() < before)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        Ok(Self::sorted_newest_first(state.posts.clone()))
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        let state = self.state.lock().unwrap();
        let posts = Self::sorted_newest_first(state.posts.clone());
        Ok(Self::page_of(posts, page))
    }

    async fn list_published(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(Self::page_of(posts, page))
    }

    async fn list_drafts(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        let state = self.state.lock().unwrap();
        let posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Draft)
            .cloned()
            .collect();
        Ok(Self::page_of(Self::sorted_newest_first(posts), page))
    }

    async fn list_by_author(
        &self,
        author_id: AuthorId,
        page: PageRequest,
    ) -> DomainResult<Page<Post>> {
        let state = self.state.lock().unwrap();
        let posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        Ok(Self::page_of(Self::sorted_newest_first(posts), page))
    }
}
