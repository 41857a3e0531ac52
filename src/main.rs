use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use log::info;

use stay_auth::config::EnvConfig;
use stay_auth::db::postgres_service::PostgresService;
use stay_auth::routes::configure_routes;
use stay_auth::state::AppState;
use stay_auth::utils::mail::ResendMailer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );
    let mailer =
        Arc::new(ResendMailer::new(config.mail.api_key.clone()).expect("Failed to build mailer"));

    let state = AppState::new(
        store,
        mailer,
        config.mail.from.clone(),
        config.mail.reset_url.clone(),
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
