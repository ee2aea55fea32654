use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use user_queue_service::config::CONFIG;
use user_queue_service::repositories::{InMemoryUserRepository, PgUserRepository, UserStore};
use user_queue_service::routes;
use user_queue_service::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let store: Arc<dyn UserStore> = if CONFIG.uses_memory_store() {
        info!("Using in-memory user store");
        Arc::new(InMemoryUserRepository::new())
    } else {
        info!("Connecting to PostgreSQL...");
        let repository =
            PgUserRepository::connect(&CONFIG.database_url, CONFIG.database_max_connections)
                .await
                .map_err(|e| {
                    error!("Failed to connect to PostgreSQL: {}", e);
                    std::io::Error::new(std::io::ErrorKind::Other, e)
                })?;
        repository.migrate().await.map_err(|e| {
            error!("Failed to migrate database: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;
        info!("Connected to PostgreSQL successfully!");
        Arc::new(repository)
    };

    let user_service = web::Data::new(UserService::new(store));

    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
