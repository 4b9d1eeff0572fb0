//! Shared fixtures for router and middleware tests.

use crate::AppState;
use auth::{Verifier, VerifierConfig};
use clap::Parser;
use domain::gateway::s3::{AttachmentStore, Credentials};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mockito::{Mock, Server, ServerGuard};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use secrecy::Secret;
use serde_json::json;
use service::config::Config;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const SIGNING_KEY: &[u8] = include_bytes!("../../auth/tests/fixtures/signing.key.pem");
const SIGNING_CERT: &str = include_str!("../../auth/tests/fixtures/signing.cert.pem");
const KID: &str = "test-signing-key";
pub(crate) const JWKS_PATH: &str = "/.well-known/jwks.json";
pub(crate) const BUCKET: &str = "todo-attachments";

/// Serves the signing certificate as a key set, expecting `hits` fetches.
pub(crate) async fn jwks_server(hits: usize) -> (ServerGuard, Mock) {
    let x5c: String = SIGNING_CERT
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .collect();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", JWKS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "keys": [{ "kty": "RSA", "kid": KID, "x5c": [x5c] }] }).to_string())
        .expect(hits)
        .create_async()
        .await;

    (server, mock)
}

/// An `Authorization` header value carrying a valid token for `sub`.
pub(crate) fn bearer(sub: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(KID.to_string());

    let token = encode(
        &header,
        &json!({ "sub": sub, "iat": now, "exp": now + 3600 }),
        &EncodingKey::from_rsa_pem(SIGNING_KEY).unwrap(),
    )
    .unwrap();

    format!("Bearer {token}")
}

pub(crate) fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub(crate) fn test_app_state(
    jwks_server_url: &str,
    s3_endpoint: Option<&str>,
    db: DatabaseConnection,
) -> AppState {
    let config = Config::parse_from(["todo_platform_rs"]);
    let service_state = service::AppState::new(config, &Arc::new(db));

    let verifier = Verifier::with_client(
        reqwest_client(),
        VerifierConfig {
            jwks_url: format!("{jwks_server_url}{JWKS_PATH}"),
            ..Default::default()
        },
    );
    let attachments = AttachmentStore::new(
        reqwest_client(),
        BUCKET.to_string(),
        "us-east-1".to_string(),
        s3_endpoint.map(|endpoint| url::Url::parse(endpoint).unwrap()),
        Credentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: Secret::new("secret".to_string()),
            session_token: None,
        },
        300,
    );

    AppState::new(service_state, verifier, attachments)
}

fn reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}
