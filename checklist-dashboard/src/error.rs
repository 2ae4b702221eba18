use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::render::FAILURE_PAGE;

/// Reasons a dashboard request can fail. Every variant aborts the request;
/// no partial checklist is ever returned.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to render dashboard: {0}")]
    Render(#[from] tera::Error),
}

impl DashboardError {
    fn code(&self) -> &'static str {
        match self {
            DashboardError::Fetch(FetchError::MalformedRecord(_)) => "malformed_record",
            DashboardError::Fetch(_) => "fetch_failed",
            DashboardError::Render(_) => "render_failed",
        }
    }

    fn api_status(&self) -> StatusCode {
        match self {
            DashboardError::Fetch(FetchError::MalformedRecord(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DashboardError::Fetch(_) => StatusCode::BAD_GATEWAY,
            DashboardError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The HTML dashboard hides the cause behind a generic page.
impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_PAGE)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

/// JSON flavour of [`DashboardError`] for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub DashboardError);

impl From<DashboardError> for ApiError {
    fn from(value: DashboardError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.0.code().to_string(),
            message: self.0.to_string(),
        };
        (self.0.api_status(), Json(body)).into_response()
    }
}
