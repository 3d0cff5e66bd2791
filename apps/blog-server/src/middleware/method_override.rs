//! Method override middleware - lets HTML forms issue PUT, PATCH and DELETE.
//!
//! Browsers only submit forms as GET or POST. A POST carrying
//! `?_method=PUT` in its query string, or an `X-HTTP-Method-Override`
//! header, is re-dispatched with that method before routing.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use serde::Deserialize;
use std::future::{Ready, ready};

/// Header carrying the intended method.
pub static METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

#[derive(Deserialize)]
struct MethodQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Method a POST request asks to be treated as, if it is one we allow.
///
/// The query parameter wins over the header.
pub fn requested_method(query: &str, header: Option<&str>) -> Option<Method> {
    let from_query = web::Query::<MethodQuery>::from_query(query)
        .ok()
        .and_then(|q| q.into_inner().method);

    from_query
        .as_deref()
        .or(header)
        .and_then(|name| match name.trim().to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        })
}

/// Middleware that rewrites the method of overridden POST requests.
/// Must wrap the whole `App` so it runs before route matching.
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if req.method() == Method::POST {
            let header = req
                .headers()
                .get(METHOD_OVERRIDE_HEADER)
                .and_then(|v| v.to_str().ok());

            if let Some(method) = requested_method(req.query_string(), header) {
                tracing::debug!(path = %req.path(), %method, "Overriding POST method");
                req.head_mut().method = method;
            }
        }

        self.service.call(req)
    }
}
