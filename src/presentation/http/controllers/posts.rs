// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PageDto, PostDto},
    error::ApplicationError,
    queries::posts::{
        GetPostByIdQuery, GetPostBySlugQuery, ListPostsByAuthorQuery, ListPostsQuery,
    },
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PageDto<PostDto>>> {
    let queries = &state.services.post_queries;
    let page = ListPostsQuery {
        page: params.page,
        per_page: params.per_page,
    };

    let result = if let Some(author_id) = params.author_id {
        queries
            .list_posts_by_author(ListPostsByAuthorQuery {
                author_id,
                page: params.page,
                per_page: params.per_page,
            })
            .await
            .into_http()?
    } else {
        match params.status.as_deref() {
            None => queries.list_posts(page).await.into_http()?,
            Some("published") => queries.list_published_posts(page).await.into_http()?,
            Some("draft") => queries.list_draft_posts(page).await.into_http()?,
            Some(other) => {
                return Err(HttpError::from_error(ApplicationError::validation(format!(
                    "unknown status filter '{other}'"
                ))));
            }
        }
    };

    Ok(Json(result))
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        featured_image: payload.featured_image,
        status: payload.status,
        published_at: payload.published_at,
    };

    let created = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        featured_image: payload.featured_image,
        status: payload.status,
        published_at: payload.published_at,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
