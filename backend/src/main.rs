mod catalog;
mod config;
mod diagnosis;
mod errors;
mod inference;
mod recommendation;
mod routes;
mod storage;
#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use config::AppConfig;
use routes::{AppServices, configure_routes};
use std::env;
use storage::retention::spawn_retention_sweeper;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = AppConfig::load().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let services = AppServices::from_config(&config).map_err(|e| {
        log::error!("Failed to create inference client: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    // The static file service needs the directory to exist when it is mounted.
    std::fs::create_dir_all(&config.uploads.dir)?;

    log::info!(
        "Loaded {} disease classes; model service at {} (timeout {:?})",
        services.catalog.len(),
        services.inference.base_url(),
        config.inference_timeout()
    );
    log::info!(
        "Storing uploads in {} (max {} bytes), served at {}",
        config.uploads.dir.display(),
        config.uploads.max_bytes,
        config.uploads.public_path
    );

    match config.retention() {
        Some(max_age) => {
            spawn_retention_sweeper(services.uploads.clone(), max_age, config.sweep_interval())
        }
        None => log::info!("Upload retention disabled, uploads are kept indefinitely"),
    }

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let upload_dir = config.uploads.dir.clone();
    let public_path = config.uploads.public_path.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .wrap(actix_web::middleware::Logger::default())
            .configure(|cfg| {
                configure_routes(cfg, &services, upload_dir.clone(), public_path.clone())
            })
    })
    .bind(&bind_address)?
    .run()
    .await
}
