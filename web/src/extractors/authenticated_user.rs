use crate::error::WebErrorKind;
use crate::extractors::RejectionType;
use crate::middleware::auth::Principal;
use crate::Error;
use axum::{extract::FromRequestParts, http::request::Parts};

/// The owner id (token `sub`) of the caller, as established by
/// [`crate::middleware::auth::require_auth`].
pub(crate) struct AuthenticatedUser(pub String);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    // Handlers mounted without the auth middleware never see a principal and
    // are rejected here.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .map(|principal| AuthenticatedUser(principal.0.clone()))
            .ok_or(Error::Web(WebErrorKind::Auth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn extracts_the_principal_set_by_the_middleware() {
        let (mut parts, _) = Request::builder()
            .extension(Principal("auth0|abc".to_string()))
            .body(())
            .unwrap()
            .into_parts();

        let AuthenticatedUser(user_id) = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(user_id, "auth0|abc");
    }

    #[tokio::test]
    async fn rejects_requests_without_a_principal() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let rejection = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();

        assert!(matches!(rejection, Error::Web(WebErrorKind::Auth)));
    }
}
