use auth::Verifier;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use domain::gateway::s3::AttachmentStore;
use log::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::{Error, WebErrorKind};

mod controller;
mod error;
pub(crate) mod extractors;
pub(crate) mod middleware;
pub(crate) mod params;
pub(crate) mod response;
mod router;

#[cfg(test)]
#[cfg(feature = "mock")]
mod test_support;

/// Everything a request handler can reach. Cloned per request; the clients
/// inside are shared.
#[derive(Clone)]
pub struct AppState {
    pub service_state: service::AppState,
    pub verifier: Arc<Verifier>,
    pub attachments: Arc<AttachmentStore>,
}

impl AppState {
    pub fn new(
        service_state: service::AppState,
        verifier: Verifier,
        attachments: AttachmentStore,
    ) -> Self {
        Self {
            service_state,
            verifier: Arc::new(verifier),
            attachments: Arc::new(attachments),
        }
    }

    pub fn db_conn_ref(&self) -> &DatabaseConnection {
        self.service_state.db_conn_ref()
    }

    pub fn config(&self) -> &service::config::Config {
        &self.service_state.config
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let config = app_state.config();
    let server_url = format!(
        "{}:{}",
        config.interface.as_deref().unwrap_or("127.0.0.1"),
        config.port
    );

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {origin}: {e}");
                None
            }
        })
        .collect();
    info!("CORS allowed origins: {:?}", config.allowed_origins);

    let cors_layer = CorsLayer::new()
        .allow_methods([
            Method::DELETE,
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
        ])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    info!("Server starting... listening for connections on http://{server_url}");

    axum::serve(listener, router::define_routes(app_state).layer(cors_layer)).await
}
