// src/application/commands/posts.rs
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        errors::DomainError,
        post::{
            FeaturedImage, NewPost, PostContent, PostExcerpt, PostId, PostRepository, PostStatus,
            PostTitle, PostUpdate, services::PostSlugService,
        },
    },
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct CreatePostCommand {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

pub struct DeletePostCommand {
    pub id: i64,
}

pub struct PostCommandService {
    repo: Arc<dyn PostRepository>,
    slug_service: Arc<PostSlugService>,
    clock: Arc<dyn Clock>,
}

impl PostCommandService {
    /// Insert attempts per create. The slug pre-check loses races, so a slug
    /// conflict at the store gets one fresh slug before surfacing.
    const MAX_INSERT_ATTEMPTS: u32 = 3;

    pub fn new(
        repo: Arc<dyn PostRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let excerpt = command.excerpt.map(PostExcerpt::new).transpose()?;
        let featured_image = command.featured_image.map(FeaturedImage::new).transpose()?;
        let status = command
            .status
            .as_deref()
            .map(str::parse::<PostStatus>)
            .transpose()?
            .unwrap_or(PostStatus::Draft);

        let now = self.clock.now();
        let published_at = match status {
            PostStatus::Published => command.published_at.or(Some(now)),
            PostStatus::Draft => command.published_at,
        };

        let mut attempts = 0;
        loop {
            attempts += 1;
            let slug = self.slug_service.generate_unique_slug(&title, None).await?;

            let new_post = NewPost {
                title: title.clone(),
                slug,
                excerpt: excerpt.clone(),
                content: content.clone(),
                featured_image: featured_image.clone(),
                status,
                published_at,
                author_id: actor.id,
                created_at: now,
                updated_at: now,
            };

            match self.repo.insert(new_post).await {
                Ok(created) => return Ok(created.into()),
                Err(DomainError::Conflict(reason)) if attempts < Self::MAX_INSERT_ATTEMPTS => {
                    // A concurrent insert won the slug. The committed row is
                    // visible now, so the next candidate will step around it.
                    tracing::warn!(attempts, %reason, "slug conflict on insert, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub async fn update_post(
        &self,
        _actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        if let Some(raw) = command.title {
            let title = PostTitle::new(raw)?;
            if title.as_str() != post.title.as_str() {
                let slug = self
                    .slug_service
                    .generate_unique_slug(&title, Some(id))
                    .await?;
                update = update.with_slug(slug);
            }
            update = update.with_title(title);
        }

        if let Some(raw) = command.excerpt {
            update = update.with_excerpt(PostExcerpt::new(raw)?);
        }

        if let Some(raw) = command.content {
            update = update.with_content(PostContent::new(raw)?);
        }

        if let Some(raw) = command.featured_image {
            update = update.with_featured_image(FeaturedImage::new(raw)?);
        }

        if let Some(ts) = command.published_at {
            update = update.with_published_at(ts);
        }

        if let Some(raw) = command.status {
            let status = raw.parse::<PostStatus>()?;
            // First transition to published stamps the current time, even
            // over a timestamp supplied in the same update. Already-published
            // posts keep their stamp and accept explicit adjustments above.
            if status == PostStatus::Published && post.published_at.is_none() {
                update = update.with_published_at(now);
            }
            update = update.with_status(status);
        }

        let updated = self
            .repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(updated.into())
    }

    pub async fn delete_post(
        &self,
        _actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        if !self.repo.delete(id).await? {
            return Err(ApplicationError::not_found("post not found"));
        }
        Ok(())
    }
}
