// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report service status and whether the backend answers

use crate::services::{BackendClient, ImageResolver, ResponseCache};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

pub async fn health_check(
    client: web::Data<BackendClient>,
    cache: web::Data<Arc<ResponseCache>>,
    resolver: web::Data<ImageResolver>,
) -> impl Responder {
    let backend_connected = client.ping().await;
    let cache_stats = cache.stats().await;
    let image_stats = resolver.cache_stats().await;

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "omanvista-gallery",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": {
            "url": client.base_url(),
            "connected": backend_connected
        },
        "cache": {
            "payloads": cache_stats,
            "images": image_stats
        }
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
