// src/application/queries/posts.rs
use crate::{
    application::{
        dto::{PageDto, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        post::{AuthorId, PostId, PostRepository, PostSlug},
    },
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct ListPostsQuery {
    pub page: u32,
    pub per_page: u32,
}

impl ListPostsQuery {
    fn request(self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListPostsByAuthorQuery {
    pub author_id: i64,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct GetPostByIdQuery {
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct GetPostBySlugQuery {
    pub slug: String,
}

pub struct PostQueryService {
    repo: Arc<dyn PostRepository>,
}

impl PostQueryService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.repo.list_all().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PageDto<PostDto>> {
        let page = self.repo.list(query.request()).await?;
        Ok(page.map(PostDto::from).into())
    }

    pub async fn list_published_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<PageDto<PostDto>> {
        let page = self.repo.list_published(query.request()).await?;
        Ok(page.map(PostDto::from).into())
    }

    pub async fn list_draft_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<PageDto<PostDto>> {
        let page = self.repo.list_drafts(query.request()).await?;
        Ok(page.map(PostDto::from).into())
    }

    pub async fn list_posts_by_author(
        &self,
        query: ListPostsByAuthorQuery,
    ) -> ApplicationResult<PageDto<PostDto>> {
        let author_id = AuthorId::new(query.author_id)?;
        let request = PageRequest::new(query.page, query.per_page);
        let page = self.repo.list_by_author(author_id, request).await?;
        Ok(page.map(PostDto::from).into())
    }

    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)?;
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }

    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug)?;
        let post = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }
}
