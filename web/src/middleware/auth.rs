use crate::error::WebErrorKind;
use crate::{AppState, Error};
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::borrow::Cow;

/// Owner id of an authorized caller, stored in the request extensions.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Principal(pub String);

/// The raw `Authorization` value. Bytes that are not visible ASCII are
/// replaced rather than dropped, so such a header is judged malformed
/// instead of missing.
fn authorization_header(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    headers
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
}

/// Authorization middleware: verifies the bearer token and returns 401
/// Unauthorized with a generic body on any deny decision.
///
/// The reason for a deny is logged by the verifier, never sent to the client.
pub(crate) async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = authorization_header(request.headers()).map(Cow::into_owned);

    let decision = app_state.verifier.authorize(header.as_deref()).await;

    if !decision.is_allowed() {
        return Error::Web(WebErrorKind::Auth).into_response();
    }

    request
        .extensions_mut()
        .insert(Principal(decision.principal_id().to_string()));
    next.run(request).await
}


#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::test_support::{bearer, empty_db, jwks_server, test_app_state};
    use axum::{
        body::{to_bytes, Body},
        extract::Extension,
        http::StatusCode,
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn test_handler(Extension(principal): Extension<Principal>) -> String {
        principal.0
    }

    async fn app(jwks_url: &str) -> Router {
        let app_state = test_app_state(jwks_url, None, empty_db());
        Router::new()
            .route("/test", get(test_handler))
            .route_layer(from_fn_with_state(app_state.clone(), require_auth))
            .with_state(app_state)
    }

    #[tokio::test]
    async fn test_require_auth_returns_401_without_a_header() {
        let (server, mock) = jwks_server(0).await;
        let app = app(&server.url()).await;

        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let response: Response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Unauthorized"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_require_auth_returns_401_for_a_malformed_token() {
        let (server, _mock) = jwks_server(0).await;
        let app = app(&server.url()).await;

        let request = Request::builder()
            .uri("/test")
            .header(AUTHORIZATION, "Bearer aaa.bbb.ccc")
            .body(Body::empty())
            .unwrap();
        let response: Response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_require_auth_passes_the_principal_to_the_handler() {
        let (server, _mock) = jwks_server(1).await;
        let app = app(&server.url()).await;

        let request = Request::builder()
            .uri("/test")
            .header(AUTHORIZATION, bearer("auth0|abc"))
            .body(Body::empty())
            .unwrap();
        let response: Response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"auth0|abc");
    }
}
