use crate::error::{WebErrorKind, INVALID_TODO_ID};
use crate::extractors::RejectionType;
use crate::Error;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use domain::Id;
use log::*;
use std::collections::HashMap;

/// The `{todo_id}` path segment parsed as a UUID.
pub(crate) struct TodoId(pub Id);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || Error::Web(WebErrorKind::Input(INVALID_TODO_ID.to_string()));

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        let raw = params.get("todo_id").ok_or_else(invalid)?;
        Id::parse_str(raw).map(TodoId).map_err(|e| {
            debug!("Rejecting todo id {raw}: {e}");
            invalid()
        })
    }
}
