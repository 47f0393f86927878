// src/services/gallery_service.rs
// DOCUMENTATION: Photo gallery section
// PURPOSE: Backend search -> normalize -> resolve each image -> section outcome

use crate::config::RenderConfig;
use crate::models::{GalleryImage, Place, SectionOutcome};
use crate::services::normalizer::normalize_image_refs;
use crate::services::{BackendClient, ImageResolver};

pub struct GalleryService;

impl GalleryService {
    /// Build the gallery for a free-text query
    /// DOCUMENTATION:
    /// - backend failure (transport, status, bad JSON) -> Unavailable
    /// - nothing normalizable, or nothing resolvable -> Empty
    /// - otherwise Ready with the images that resolved, in backend order
    pub async fn show_images(
        client: &BackendClient,
        resolver: &ImageResolver,
        render: &RenderConfig,
        query: &str,
        count: u32,
    ) -> SectionOutcome<GalleryImage> {
        Self::build(client, resolver, query, query, count, render).await
    }

    /// Build the gallery for a catalog place, searching by its localized name
    pub async fn show_place_images(
        client: &BackendClient,
        resolver: &ImageResolver,
        render: &RenderConfig,
        place: &Place,
        count: u32,
    ) -> SectionOutcome<GalleryImage> {
        let name = place.display_name(render.locale);
        Self::build(client, resolver, name, name, count, render).await
    }

    async fn build(
        client: &BackendClient,
        resolver: &ImageResolver,
        query: &str,
        caption: &str,
        count: u32,
        render: &RenderConfig,
    ) -> SectionOutcome<GalleryImage> {
        let payload = match client.fetch_images(query, count).await {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Gallery for '{}' unavailable: {}", query, e);
                return SectionOutcome::Unavailable;
            }
        };

        let references = normalize_image_refs(&payload, count as usize);
        if references.is_empty() {
            log::info!("Gallery for '{}' returned no images", query);
            return SectionOutcome::Empty;
        }

        let resolved = resolver.resolve_all(&references).await;

        let tiles: Vec<GalleryImage> = references
            .iter()
            .zip(resolved.iter())
            .filter_map(|(reference, image)| GalleryImage::from_resolved(reference, image, caption))
            .collect();

        let failed: Vec<&str> = resolved
            .iter()
            .filter(|r| !r.is_available())
            .map(|r| r.url())
            .collect();
        if !failed.is_empty() {
            log::debug!("Gallery for '{}' skipped: {:?}", query, failed);
        }

        log::info!(
            "Gallery for '{}' ({}): {} of {} images resolved, {} skipped",
            query,
            render.locale,
            tiles.len(),
            references.len(),
            failed.len()
        );

        SectionOutcome::from_items(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timeouts;
    use crate::models::Locale;
    use crate::services::backend_client::test_support::{spawn_failing_backend, spawn_fake_backend};
    use crate::services::{ImageCache, PlaceCatalog, ResponseCache};
    use std::sync::Arc;
    use std::time::Duration;

    fn services(base: &str) -> (BackendClient, ImageResolver) {
        (
            BackendClient::new(base, Timeouts::default(), Arc::new(ResponseCache::new(300))),
            ImageResolver::new(Duration::from_secs(5), Arc::new(ImageCache::new(300))),
        )
    }

    #[actix_rt::test]
    async fn test_gallery_keeps_only_resolved_images() {
        let (base, _hits) = spawn_fake_backend().await;
        let (client, resolver) = services(&base);
        let render = RenderConfig::default();

        let outcome = GalleryService::show_images(&client, &resolver, &render, "Wadi Shab", 6).await;

        let SectionOutcome::Ready(tiles) = outcome else {
            panic!("expected ready gallery");
        };

        // ok.png decodes, junk comes back raw, missing is dropped
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].kind, "decoded");
        assert_eq!(tiles[0].attribution.as_deref(), Some("Salim"));
        assert_eq!(tiles[0].caption, "Wadi Shab");
        assert_eq!(tiles[1].kind, "raw");
    }

    #[actix_rt::test]
    async fn test_gallery_count_limits_candidates() {
        let (base, _hits) = spawn_fake_backend().await;
        let (client, resolver) = services(&base);

        let outcome =
            GalleryService::show_images(&client, &resolver, &RenderConfig::default(), "Nizwa", 1).await;
        assert_eq!(outcome.len(), 1);
    }

    #[actix_rt::test]
    async fn test_empty_payload_is_empty_not_unavailable() {
        let (base, _hits) = spawn_fake_backend().await;
        let (client, resolver) = services(&base);

        let outcome =
            GalleryService::show_images(&client, &resolver, &RenderConfig::default(), "nothing", 6).await;
        assert_eq!(outcome.status(), "empty");
    }

    #[actix_rt::test]
    async fn test_all_images_failing_is_empty() {
        let (base, _hits) = spawn_fake_backend().await;
        let (client, resolver) = services(&base);

        let outcome =
            GalleryService::show_images(&client, &resolver, &RenderConfig::default(), "broken", 6).await;
        assert_eq!(outcome.status(), "empty");
    }

    #[actix_rt::test]
    async fn test_backend_500_is_unavailable() {
        let base = spawn_failing_backend().await;
        let (client, resolver) = services(&base);

        let outcome =
            GalleryService::show_images(&client, &resolver, &RenderConfig::default(), "Mutrah", 6).await;
        assert_eq!(outcome.status(), "unavailable");
    }

    #[actix_rt::test]
    async fn test_rerender_uses_memoized_results() {
        let (base, hits) = spawn_fake_backend().await;
        let (client, resolver) = services(&base);
        let render = RenderConfig::default();

        GalleryService::show_images(&client, &resolver, &render, "Jebel Akhdar", 6).await;
        let api_after_first = hits.api_count();
        let images_after_first = hits.image_count();

        GalleryService::show_images(&client, &resolver, &render, "Jebel Akhdar", 6).await;

        assert_eq!(api_after_first, 1);
        assert_eq!(hits.api_count(), 1);
        // The 404 is retried on re-render; the two successful downloads are not
        assert_eq!(hits.image_count(), images_after_first + 1);
    }

    #[actix_rt::test]
    async fn test_place_gallery_uses_localized_name() {
        let (base, _hits) = spawn_fake_backend().await;
        let (client, resolver) = services(&base);
        let render = RenderConfig::new(Locale::Arabic, Default::default());
        let place = PlaceCatalog::find("nizwa").unwrap();

        let outcome = GalleryService::show_place_images(&client, &resolver, &render, place, 6).await;

        let SectionOutcome::Ready(tiles) = outcome else {
            panic!("expected ready gallery");
        };
        assert!(tiles.iter().all(|t| t.caption == "قلعة نزوى"));
    }
}
