// src/handlers/posts.rs
// DOCUMENTATION: HTTP handler for the community posts section

use crate::config::{Config, RenderConfig};
use crate::errors::GalleryError;
use crate::models::{PostsQuery, SectionKind, DEFAULT_POSTS_LIMIT};
use crate::services::{BackendClient, PostsService};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /posts?topic=&limit=&lang=
pub async fn show_posts(
    config: web::Data<Config>,
    client: web::Data<BackendClient>,
    query: web::Query<PostsQuery>,
) -> Result<impl Responder, GalleryError> {
    if let Err(e) = query.validate() {
        return Err(GalleryError::ValidationError(e.to_string()));
    }

    let topic = query.topic.trim();
    if topic.is_empty() {
        return Err(GalleryError::ValidationError(
            "topic must not be blank".to_string(),
        ));
    }

    let limit = query.limit.unwrap_or(DEFAULT_POSTS_LIMIT);
    let render = RenderConfig::for_request(&config, query.lang.as_deref());

    let outcome = PostsService::fetch_posts(&client, &render, topic, limit).await;
    Ok(HttpResponse::Ok().json(outcome.into_response(SectionKind::Posts, &render)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts", web::get().to(show_posts));
}
