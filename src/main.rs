use domain::{authorization, gateway::s3::AttachmentStore};
use log::{error, info};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Starting up todo platform in {} mode...",
        config.runtime_env()
    );

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let verifier = match authorization::verifier(&config) {
        Ok(verifier) => verifier,
        Err(e) => {
            error!("Failed to build the credential verifier: {e}");
            std::process::exit(1);
        }
    };

    let attachments = match AttachmentStore::from_config(&config) {
        Ok(attachments) => attachments,
        Err(e) => {
            error!("Failed to configure the attachment store: {e}");
            std::process::exit(1);
        }
    };

    let service_state = service::AppState::new(config, &db);
    let app_state = web::AppState::new(service_state, verifier, attachments);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
