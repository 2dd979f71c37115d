use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pagination::PageError;

/// Errors a handler can answer with. Each variant maps to one status code.
#[derive(Debug)]
pub enum AppError {
    Input(&'static str),
    NotFound(&'static str),
    Unprocessable(&'static str),
    MethodNotAllowed,
    Internal(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to clients. Details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Input(_) => "Bad request - server unable to process.",
            AppError::NotFound(_) => "Request valid but resource not found.",
            AppError::Unprocessable(_) => {
                "Request could not be processed - content and syntax are valid but cannot process instructions."
            }
            AppError::MethodNotAllowed => "Method not allowed.",
            AppError::Internal(_) => "Internal server error - cannot handle request.",
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::InvalidPage(_) => AppError::Input("page must be a positive integer"),
            PageError::OutOfRange { .. } => AppError::Unprocessable("page is out of range"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(reason) => tracing::error!("internal error: {reason}"),
            AppError::Input(reason) | AppError::NotFound(reason) | AppError::Unprocessable(reason) => {
                tracing::debug!(status = status.as_u16(), "request rejected: {reason}")
            }
            AppError::MethodNotAllowed => {}
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Converts storage errors into [`AppError`]s, logging the underlying report.
pub trait ResultExt<T> {
    /// Storage failures while serving a request are reported as unprocessable.
    fn reject(self, reason: &'static str) -> Result<T, AppError>;

    fn reject_input(self, reason: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, reason: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{reason}: {e}");
            AppError::Unprocessable(reason)
        })
    }

    fn reject_input(self, reason: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{reason}: {e}");
            AppError::Input(reason)
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("no route matched")
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Turns a panic inside a handler into the JSON 500 reply.
pub fn handler_panicked(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("handler panicked: {detail}");

    AppError::Internal("handler panicked").into_response()
}
