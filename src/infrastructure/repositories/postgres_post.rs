// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::post::{
    AuthorId, FeaturedImage, NewPost, Post, PostContent, PostExcerpt, PostId, PostRepository,
    PostSlug, PostStatus, PostTitle, PostUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str =
    "id, title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    featured_image: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            excerpt: row.excerpt.map(PostExcerpt::new).transpose()?,
            content: PostContent::new(row.content)?,
            featured_image: row.featured_image.map(FeaturedImage::new).transpose()?,
            status: row.status.parse::<PostStatus>()?,
            published_at: row.published_at,
            author_id: AuthorId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Listing filters, each with the ordering the service contract asks for.
enum ListScope {
    All,
    Published,
    Drafts,
    Author(i64),
}

impl ListScope {
    fn push_conditions(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::All => {}
            Self::Published => {
                builder.push(" WHERE status = 'published'");
            }
            Self::Drafts => {
                builder.push(" WHERE status = 'draft'");
            }
            Self::Author(id) => {
                builder.push(" WHERE author_id = ");
                builder.push_bind(*id);
            }
        }
    }

    fn push_ordering(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            // Published listings sort by publication date, everything else by
            // creation date, newest first in both cases.
            Self::Published => builder.push(" ORDER BY published_at DESC, id DESC"),
            _ => builder.push(" ORDER BY created_at DESC, id DESC"),
        };
    }
}

impl PostgresPostRepository {
    async fn fetch_page(&self, scope: ListScope, page: PageRequest) -> DomainResult<Page<Post>> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");
        scope.push_conditions(&mut count_builder);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        scope.push_conditions(&mut builder);
        scope.push_ordering(&mut builder);
        builder.push(" LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, u64::try_from(total).unwrap_or(0)))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            excerpt,
            content,
            featured_image,
            status,
            published_at,
            author_id,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt.as_ref().map(PostExcerpt::as_str))
        .bind(content.as_str())
        .bind(featured_image.as_ref().map(FeaturedImage::as_str))
        .bind(status.as_str())
        .bind(published_at)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let PostUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            featured_image,
            status,
            published_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(image.into_inner());
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        maybe_row.map(Post::try_from).transpose()
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at
             FROM posts WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at
             FROM posts WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, excerpt, content, featured_image, status, published_at, author_id, created_at, updated_at
             FROM posts ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        self.fetch_page(ListScope::All, page).await
    }

    async fn list_published(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        self.fetch_page(ListScope::Published, page).await
    }

    async fn list_drafts(&self, page: PageRequest) -> DomainResult<Page<Post>> {
        self.fetch_page(ListScope::Drafts, page).await
    }

    async fn list_by_author(
        &self,
        author_id: AuthorId,
        page: PageRequest,
    ) -> DomainResult<Page<Post>> {
        self.fetch_page(ListScope::Author(author_id.into()), page)
            .await
    }
}
