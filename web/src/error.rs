use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

pub const INVALID_TODO_ID: &str = "Invalid todoId param";
pub const UNAUTHORIZED: &str = "Unauthorized";

#[derive(Debug)]
pub enum Error {
    Domain(DomainError),
    Web(WebErrorKind),
}

/// Failures detected in the web layer before any domain call is made.
#[derive(Debug, PartialEq)]
pub enum WebErrorKind {
    /// No authenticated principal on the request.
    Auth,
    /// Malformed request input. Holds the message returned to the client.
    Input(String),
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::Domain(err) => write!(fmt, "{err}"),
            Error::Web(kind) => write!(fmt, "Web Error {kind:?}"),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Web(WebErrorKind::Auth) => error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED),
            Error::Web(WebErrorKind::Input(message)) => {
                error_response(StatusCode::BAD_REQUEST, &message)
            }
            Error::Domain(err) => {
                match &err.error_kind {
                    DomainErrorKind::Internal(InternalErrorKind::Invalid(_))
                    | DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
                    | DomainErrorKind::External(ExternalErrorKind::NotFound)
                    | DomainErrorKind::External(ExternalErrorKind::Unauthorized) => {
                        debug!("Request rejected: {err}")
                    }
                    _ => error!("Request failed: {err}"),
                }
                domain_error_into_response(err.error_kind)
            }
        }
    }
}

fn domain_error_into_response(error_kind: DomainErrorKind) -> Response {
    match error_kind {
        DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
            InternalErrorKind::Invalid(message) => error_response(StatusCode::BAD_REQUEST, &message),
            InternalErrorKind::Entity(EntityErrorKind::NotFound) => {
                error_response(StatusCode::NOT_FOUND, "Not found")
            }
            InternalErrorKind::Entity(_) | InternalErrorKind::Config | InternalErrorKind::Other(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        },
        DomainErrorKind::External(external_error_kind) => match external_error_kind {
            ExternalErrorKind::Network => error_response(StatusCode::BAD_GATEWAY, "Bad gateway"),
            ExternalErrorKind::NotFound => error_response(StatusCode::NOT_FOUND, "Not found"),
            ExternalErrorKind::Unauthorized => {
                error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED)
            }
            ExternalErrorKind::Other(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        },
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}
