//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Largest accepted post form, in bytes.
pub const FORM_LIMIT: usize = 1024 * 1024;

/// Form extractor settings for the post forms.
///
/// A rejected form is logged and the client is sent back to the post list.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(form_error)
}

fn form_error(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected post form");
    InternalError::from_response(err, posts::redirect(posts::POSTS_PATH)).into()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .route("/", web::get().to(posts::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::index))
                .route("", web::post().to(posts::create))
                // Registered before "/{id}" so "new" is not taken for an id
                .route("/new", web::get().to(posts::new_form))
                .route("/{id}", web::get().to(posts::show))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::patch().to(posts::update))
                .route("/{id}", web::delete().to(posts::destroy))
                .route("/{id}/edit", web::get().to(posts::edit_form)),
        );
}

/// Fallback for unmatched routes; install with `App::default_service`.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(req.path().to_string()))
}
