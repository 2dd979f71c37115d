use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    models::PageQuery,
    pagination,
    rejections::{AppError, ResultExt},
};

/// The 1-based page requested through the `page` query parameter, defaulting
/// to the first page when the parameter is absent.
pub struct Page(pub u32);

impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) =
            Query::<PageQuery>::try_from_uri(&parts.uri).reject_input("failed to parse query string")?;
        let page = pagination::parse_page(query.page.as_deref())?;
        Ok(Page(page))
    }
}

/// Integer id taken from the single path parameter. Anything that is not an
/// integer cannot name a stored record, so it is reported as not found.
pub struct ResourceId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for ResourceId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("failed to read path parameter: {e}");
                AppError::NotFound("missing path parameter")
            })?;

        raw.parse()
            .map(ResourceId)
            .map_err(|_| AppError::NotFound("path parameter is not an integer"))
    }
}

/// JSON request body whose decoding failures are reported as bad input.
pub struct JsonBody<T>(pub T);

impl<S: Send + Sync, T: DeserializeOwned> FromRequest<S> for JsonBody<T> {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .reject_input("failed to decode request body")?;
        Ok(JsonBody(body))
    }
}
