use log::{error, info};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Seeding database [{}] for user {}...",
        config.database_url(),
        config.seed_user_id
    );

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let service_state = service::AppState::new(config, &db);

    if let Err(e) = entity_api::seed_database(
        service_state.db_conn_ref(),
        &service_state.config.seed_user_id,
    )
    .await
    {
        error!("Failed to seed database: {e}");
        std::process::exit(1);
    }

    info!("Database seeded");
}
