// src/handlers/gallery.rs
// DOCUMENTATION: HTTP handlers for the photo gallery section
// PURPOSE: Parse requests, call services, return responses

use crate::config::{Config, RenderConfig};
use crate::errors::GalleryError;
use crate::models::{
    GalleryQuery, ImageProxyQuery, PlaceGalleryQuery, SectionKind,
    DEFAULT_GALLERY_COUNT,
};
use crate::services::{BackendClient, GalleryService, ImageResolver, PlaceCatalog};
use actix_web::{http::header, web, HttpResponse, Responder};
use validator::Validate;

/// GET /gallery?q=&count=&lang=
/// Show images for a free-text query
pub async fn show_gallery(
    config: web::Data<Config>,
    client: web::Data<BackendClient>,
    resolver: web::Data<ImageResolver>,
    query: web::Query<GalleryQuery>,
) -> Result<impl Responder, GalleryError> {
    if let Err(e) = query.validate() {
        return Err(GalleryError::ValidationError(e.to_string()));
    }

    let search = query.q.trim();
    if search.is_empty() {
        return Err(GalleryError::ValidationError(
            "q must not be blank".to_string(),
        ));
    }

    let count = resolve_count(&config, query.count)?;
    let render = RenderConfig::for_request(&config, query.lang.as_deref());

    let outcome = GalleryService::show_images(&client, &resolver, &render, search, count).await;
    Ok(HttpResponse::Ok().json(outcome.into_response(SectionKind::Gallery, &render)))
}

/// GET /places/{id}/gallery?count=&lang=
/// Show images for a catalog place
pub async fn show_place_gallery(
    config: web::Data<Config>,
    client: web::Data<BackendClient>,
    resolver: web::Data<ImageResolver>,
    path: web::Path<String>,
    query: web::Query<PlaceGalleryQuery>,
) -> Result<impl Responder, GalleryError> {
    if let Err(e) = query.validate() {
        return Err(GalleryError::ValidationError(e.to_string()));
    }

    let id = path.into_inner();
    let place = PlaceCatalog::find(&id).ok_or_else(|| GalleryError::NotFound(id.clone()))?;

    let count = resolve_count(&config, query.count)?;
    let render = RenderConfig::for_request(&config, query.lang.as_deref());

    let outcome =
        GalleryService::show_place_images(&client, &resolver, &render, place, count).await;
    Ok(HttpResponse::Ok().json(outcome.into_response(SectionKind::Gallery, &render)))
}

/// GET /gallery/image?url=
/// Serve the bytes of an image that a recent gallery render downloaded.
/// Only memoized images are served; this is not a general fetch proxy.
pub async fn image_bytes(
    resolver: web::Data<ImageResolver>,
    query: web::Query<ImageProxyQuery>,
) -> Result<impl Responder, GalleryError> {
    if let Err(e) = query.validate() {
        return Err(GalleryError::ValidationError(e.to_string()));
    }

    let resolved = resolver
        .cached(&query.url)
        .await
        .ok_or_else(|| GalleryError::NotFound(query.url.clone()))?;

    match (resolved.bytes(), resolved.content_type()) {
        (Some(bytes), Some(content_type)) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type))
            .insert_header((header::CACHE_CONTROL, "private, max-age=300"))
            .body(bytes.clone())),
        _ => Err(GalleryError::NotFound(query.url.clone())),
    }
}

fn resolve_count(config: &Config, requested: Option<u32>) -> Result<u32, GalleryError> {
    let count = requested.unwrap_or_else(|| DEFAULT_GALLERY_COUNT.min(config.max_gallery_count));

    if count == 0 || count > config.max_gallery_count {
        return Err(GalleryError::ValidationError(format!(
            "count must be between 1 and {}",
            config.max_gallery_count
        )));
    }

    Ok(count)
}

/// Configuration for gallery routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/gallery", web::get().to(show_gallery))
        .route("/gallery/image", web::get().to(image_bytes))
        .route("/places/{id}/gallery", web::get().to(show_place_gallery));
}
