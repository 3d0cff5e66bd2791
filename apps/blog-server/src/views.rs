//! Server-rendered pages.

use actix_web::{HttpResponse, http::header::ContentType};
use askama::Template;

use blog_core::domain::Post;

use crate::middleware::error::AppResult;

#[derive(Template)]
#[template(path = "posts/index.html")]
pub struct IndexPage<'a> {
    pub posts: &'a [Post],
}

#[derive(Template)]
#[template(path = "posts/new.html")]
pub struct NewPage;

#[derive(Template)]
#[template(path = "posts/show.html")]
pub struct ShowPage<'a> {
    pub post: &'a Post,
}

#[derive(Template)]
#[template(path = "posts/edit.html")]
pub struct EditPage<'a> {
    pub post: &'a Post,
}

/// Render a page as a `200 OK` HTML response.
pub fn render<T: Template>(page: &T) -> AppResult<HttpResponse> {
    let html = page.render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
