//! Error pages for failures the post handlers do not turn into redirects.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use std::fmt;

/// Application-level error type rendered as a small HTML page.
///
/// Store failures never reach this type; handlers log them and redirect.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Render(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(path) => write!(f, "Not found: {}", path),
            AppError::Render(msg) => write!(f, "Template rendering failed: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let title = match self {
            AppError::NotFound(_) => "Page not found",
            AppError::Render(detail) => {
                tracing::error!("Template rendering failed: {}", detail);
                "Something went wrong"
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(format!(
                "<!DOCTYPE html><html><head><title>{title}</title></head>\
                 <body><h1>{title}</h1><p><a href=\"/posts\">Back to all posts</a></p></body></html>"
            ))
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
