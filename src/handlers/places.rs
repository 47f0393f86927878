// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for the static place catalog
// PURPOSE: Expose localized attraction data to the front end

use crate::config::{Config, RenderConfig};
use crate::errors::GalleryError;
use crate::models::{LangQuery, PlaceResponse};
use crate::services::PlaceCatalog;
use actix_web::{web, HttpResponse, Responder};

/// GET /places
/// List every attraction in the requested language
pub async fn list_places(
    config: web::Data<Config>,
    query: web::Query<LangQuery>,
) -> impl Responder {
    let render = RenderConfig::for_request(&config, query.lang.as_deref());

    let places: Vec<PlaceResponse> = PlaceCatalog::all()
        .iter()
        .map(|p| p.to_response(render.locale))
        .collect();

    HttpResponse::Ok().json(places)
}

/// GET /places/{id}
/// Retrieve one attraction by slug
pub async fn get_place(
    config: web::Data<Config>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
) -> Result<impl Responder, GalleryError> {
    let id = path.into_inner();
    let render = RenderConfig::for_request(&config, query.lang.as_deref());

    let place = PlaceCatalog::find(&id).ok_or(GalleryError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(place.to_response(render.locale)))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/places", web::get().to(list_places))
        .route("/places/{id}", web::get().to(get_place));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_rt::test]
    async fn test_list_and_get_places() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::from_env()))
                .configure(super::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/places?lang=ar").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let places = body.as_array().unwrap();
        assert_eq!(places.len(), 5);
        assert_eq!(places[0]["id"], "wadi_shab");
        assert_eq!(places[0]["name"], "وادي شاب");
        assert_eq!(places[0]["locale"], "ar");

        let req = test::TestRequest::get()
            .uri("/places/mutrah?lang=en")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Mutrah Corniche");
        assert_eq!(body["region"], "Muscat");

        let req = test::TestRequest::get().uri("/places/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
