use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

mod api;
mod errors;
mod models;
mod repository;
mod utils;

use repository::database::Database;
use repository::store::Store;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let store: Arc<dyn Store> = Arc::new(Database::new());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);
    log::info!("server listening on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .wrap(Logger::default())
            .configure(api::config::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
