// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, shared clients and cache, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{start_cleanup_task, BackendClient, ImageCache, ImageResolver, ResponseCache};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            format!("{},actix_web=info", config.log_level)
        } else {
            "info,actix_web=info".to_string()
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting omanvista-gallery service...");
    log::info!("Environment: {}", config.environment);
    log::info!("Backend: {}", config.backend_url);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize memoization caches for backend payloads and resolved images
    let cache: Arc<ResponseCache> = Arc::new(ResponseCache::new(config.cache_ttl_secs));
    let image_cache = Arc::new(ImageCache::new(config.cache_ttl_secs));
    log::info!(
        "Initialized response caches (TTL: {}s)",
        config.cache_ttl_secs
    );

    start_cleanup_task(cache.clone(), config.cache_cleanup_interval_secs);
    start_cleanup_task(image_cache.clone(), config.cache_cleanup_interval_secs);
    log::info!(
        "Started cache cleanup task (interval: {}s)",
        config.cache_cleanup_interval_secs
    );

    // 5. Shared outbound clients (one reqwest pool for both)
    let http = reqwest::Client::new();
    let timeouts = config.timeouts();
    let backend = web::Data::new(BackendClient::with_client(
        http.clone(),
        config.backend_url.clone(),
        timeouts,
        cache.clone(),
    ));
    let resolver = web::Data::new(
        ImageResolver::with_client(http, timeouts.image, image_cache)
            .with_max_bytes(config.max_image_bytes),
    );

    if backend.ping().await {
        log::info!("Backend is connected");
    } else {
        // Sections report "unavailable" on their own; keep serving
        log::warn!("Backend not responding at startup");
    }

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (config, cache, outbound clients)
            .app_data(config_data.clone())
            .app_data(web::Data::new(cache.clone()))
            .app_data(backend.clone())
            .app_data(resolver.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
            .configure(handlers::gallery_config)
            .configure(handlers::posts_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
