//! Post handlers - the RESTful resource routes.
//!
//! Store failures never reach the client. Each handler logs the error and
//! falls back to a safe page: the post list, or the empty form when
//! creation fails.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::StoreError;
use blog_shared::dto::PostForm;

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{EditPage, IndexPage, NewPage, ShowPage, render};

pub(super) const POSTS_PATH: &str = "/posts";

pub(super) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn parse_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}

fn draft_from(form: PostForm) -> PostDraft {
    PostDraft::new(form.title, form.image, &form.body)
}

async fn load(state: &AppState, raw_id: &str) -> Result<Post, StoreError> {
    let id = parse_id(raw_id)?;
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(StoreError::NotFound)
}

/// GET /
pub async fn root() -> HttpResponse {
    redirect(POSTS_PATH)
}

/// GET /posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to list posts");
        Vec::new()
    });

    render(&IndexPage { posts: &posts })
}

/// GET /posts/new
pub async fn new_form() -> AppResult<HttpResponse> {
    render(&NewPage)
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let draft = draft_from(form.into_inner());

    match state.posts.insert(draft).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post created");
            Ok(redirect(POSTS_PATH))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create post");
            render(&NewPage)
        }
    }
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    match load(&state, &raw_id).await {
        Ok(post) => render(&ShowPage { post: &post }),
        Err(e) => {
            tracing::warn!(post_id = %raw_id, error = %e, "Failed to show post");
            Ok(redirect(POSTS_PATH))
        }
    }
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    match load(&state, &raw_id).await {
        Ok(post) => render(&EditPage { post: &post }),
        Err(e) => {
            tracing::warn!(post_id = %raw_id, error = %e, "Failed to load post for editing");
            Ok(redirect(POSTS_PATH))
        }
    }
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> HttpResponse {
    let raw_id = path.into_inner();
    let draft = draft_from(form.into_inner());

    let result = match parse_id(&raw_id) {
        Ok(id) => state.posts.replace(id, draft).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post updated");
            redirect(&format!("{}/{}", POSTS_PATH, post.id))
        }
        Err(e) => {
            tracing::error!(post_id = %raw_id, error = %e, "Failed to update post");
            redirect(POSTS_PATH)
        }
    }
}

/// DELETE /posts/{id}
pub async fn destroy(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let raw_id = path.into_inner();

    let result = match parse_id(&raw_id) {
        Ok(id) => state.posts.delete(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => tracing::info!(post_id = %raw_id, "Post deleted"),
        Err(e) => tracing::error!(post_id = %raw_id, error = %e, "Failed to delete post"),
    }

    redirect(POSTS_PATH)
}
