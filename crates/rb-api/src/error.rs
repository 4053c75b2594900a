//! HTTP mapping for [`AppError`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use rb_core::error::AppError;
use rb_ui::NotFoundTemplate;
use thiserror::Error;

/// Handler error: an [`AppError`] that knows how to become a response.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub AppError);

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        Self(AppError::Internal(format!("template rendering failed: {e}")))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::DuplicateTitle(_) | AppError::InvalidTitle(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let AppError::Internal(msg) = &self.0 {
            log::error!("{msg}");
            return HttpResponse::build(status).body("Internal server error");
        }

        // Fall back to plain text if even the 404 page fails to render.
        match NotFoundTemplate.render() {
            Ok(html) if status == StatusCode::NOT_FOUND => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(html),
            _ => HttpResponse::build(status).body(self.0.to_string()),
        }
    }
}
