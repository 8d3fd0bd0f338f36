use actix_web::{middleware::Logger, web, App, HttpServer};
use apex_api::config::EnvConfig;
use apex_api::db::service::DbService;
use apex_api::routes::configure_routes;
use sea_orm::ConnectOptions;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(std::io::Error::other)?;
    let addr = config.bind_addr();

    let mut options = ConnectOptions::new(&config.db_url);
    options.max_connections(config.db_max_connections);

    let db_service = Arc::new(
        DbService::connect(options)
            .await
            .map_err(std::io::Error::other)?
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
