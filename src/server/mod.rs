//! HTTP surface: the form page and the JSON generate/refine endpoints.

pub mod handlers;
pub mod page;

use crate::{
    art::Generator,
    error::{ArtError, ErrorKind},
    models::ErrorResponse,
    prompt::StyleCatalog,
};
use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use std::sync::Arc;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StyleCatalog>,
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    pub fn new(catalog: StyleCatalog, generator: Arc<dyn Generator>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            generator,
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(handlers::index))
        .route("/static/script.js", web::get().to(handlers::script))
        .route("/styles", web::get().to(handlers::styles))
        .route("/health", web::get().to(handlers::health))
        .route("/generate", web::post().to(handlers::generate))
        .route("/refine", web::post().to(handlers::refine));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: format!("invalid request body: {}", err),
    });
    InternalError::from_response(err, response).into()
}

impl ResponseError for ArtError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Provider | ErrorKind::Timeout | ErrorKind::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERATION_TIMED_OUT;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ArtError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ArtError::Provider("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ArtError::Timeout(GENERATION_TIMED_OUT.into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ArtError::Unexpected("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
