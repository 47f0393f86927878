// src/services/resolver.rs
// DOCUMENTATION: Fetch and decode gallery images
// PURPOSE: Turn image URLs into displayable images, one at a time, without
// letting a single bad URL spoil the rest of the gallery

use crate::models::{ImageReference, ResolvedImage};
use crate::services::{CacheStats, ResponseCache};
use bytes::{Bytes, BytesMut};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const OCTET_STREAM: &str = "application/octet-stream";

/// Largest image body we are willing to buffer and memoize (10 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Memoized images, keyed by URL. Only `Decoded` and `Raw` are ever stored.
pub type ImageCache = ResponseCache<ResolvedImage>;

/// Image resolver
/// DOCUMENTATION: Single attempt per URL, no retries. The classified image
/// (bytes, content type, dimensions) is memoized so a re-render neither hits
/// the image host nor decodes again.
pub struct ImageResolver {
    client: Client,
    timeout: Duration,
    max_bytes: usize,
    cache: Arc<ImageCache>,
}

impl ImageResolver {
    pub fn new(timeout: Duration, cache: Arc<ImageCache>) -> Self {
        Self::with_client(Client::new(), timeout, cache)
    }

    pub fn with_client(client: Client, timeout: Duration, cache: Arc<ImageCache>) -> Self {
        Self {
            client,
            timeout,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
            cache,
        }
    }

    /// Cap on the body size of a single image
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Resolve every reference in order
    /// DOCUMENTATION: Sequential on purpose; each item's failure is isolated
    /// and shows up as `ResolvedImage::Unavailable` at its position.
    pub async fn resolve_all(&self, references: &[ImageReference]) -> Vec<ResolvedImage> {
        let mut resolved = Vec::with_capacity(references.len());

        for reference in references {
            resolved.push(self.resolve(reference).await);
        }

        resolved
    }

    /// Look up an image that an earlier resolve already downloaded
    pub async fn cached(&self, url: &str) -> Option<ResolvedImage> {
        self.cache.get(url).await
    }

    /// Resolve one image
    /// DOCUMENTATION:
    /// - transport error, timeout, non-success status, empty or oversized
    ///   body -> Unavailable
    /// - bytes that decode -> Decoded
    /// - bytes that don't decode -> Raw (caller may still display them)
    pub async fn resolve(&self, reference: &ImageReference) -> ResolvedImage {
        let url = reference.url.as_str();

        if !is_fetchable(url) {
            log::debug!("Skipping image with unsupported URL: {}", url);
            return unavailable(url);
        }

        if let Some(hit) = self.cache.get(url).await {
            return hit;
        }

        let mut response = match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Image fetch failed for {}: {}", url, e);
                return unavailable(url);
            }
        };

        if !response.status().is_success() {
            log::debug!("Image fetch for {} returned {}", url, response.status());
            return unavailable(url);
        }

        if let Some(len) = response.content_length() {
            if len > self.max_bytes as u64 {
                log::debug!(
                    "Image at {} is {} bytes, over the {} byte limit",
                    url,
                    len,
                    self.max_bytes
                );
                return unavailable(url);
            }
        }

        let header_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Content-Length may be missing or wrong, so count while reading
        let mut body = BytesMut::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    if body.len() + chunk.len() > self.max_bytes {
                        log::debug!("Image at {} exceeded {} bytes", url, self.max_bytes);
                        return unavailable(url);
                    }
                    body.extend_from_slice(&chunk);
                }
                Ok(None) => break,
                Err(e) => {
                    log::debug!("Failed to read image body for {}: {}", url, e);
                    return unavailable(url);
                }
            }
        }

        if body.is_empty() {
            log::debug!("Image fetch for {} returned an empty body", url);
            return unavailable(url);
        }

        let resolved = classify(url, body.freeze(), header_type.as_deref());
        self.cache.insert_if_absent(url.to_string(), resolved).await
    }
}

fn unavailable(url: &str) -> ResolvedImage {
    ResolvedImage::Unavailable {
        url: url.to_string(),
    }
}

fn is_fetchable(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Decode if possible, otherwise hand back the raw bytes with the best
/// content type we know of.
fn classify(url: &str, bytes: Bytes, header_type: Option<&str>) -> ResolvedImage {
    let guessed = image::guess_format(&bytes).ok();

    match image::load_from_memory(&bytes) {
        Ok(img) => {
            let (format, content_type) = match guessed {
                Some(fmt) => (
                    format!("{:?}", fmt).to_lowercase(),
                    fmt.to_mime_type().to_string(),
                ),
                None => (
                    "unknown".to_string(),
                    header_type.unwrap_or(OCTET_STREAM).to_string(),
                ),
            };

            ResolvedImage::Decoded {
                url: url.to_string(),
                format,
                content_type,
                width: img.width(),
                height: img.height(),
                bytes,
            }
        }
        Err(e) => {
            log::debug!("Could not decode image from {}: {}", url, e);

            let content_type = header_type
                .map(str::to_string)
                .or_else(|| guessed.map(|fmt| fmt.to_mime_type().to_string()))
                .unwrap_or_else(|| OCTET_STREAM.to_string());

            ResolvedImage::Raw {
                url: url.to_string(),
                content_type,
                bytes,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::backend_client::test_support::{png_bytes, spawn_fake_backend};

    fn resolver() -> ImageResolver {
        ImageResolver::new(Duration::from_secs(5), Arc::new(ImageCache::new(300)))
    }

    #[test]
    fn test_classify_png() {
        let resolved = classify("http://x/1.png", Bytes::from(png_bytes()), None);
        match resolved {
            ResolvedImage::Decoded {
                format,
                content_type,
                width,
                height,
                ..
            } => {
                assert_eq!(format, "png");
                assert_eq!(content_type, "image/png");
                assert_eq!((width, height), (2, 1));
            }
            other => panic!("expected decoded image, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_garbage_is_raw() {
        let resolved = classify(
            "http://x/blob",
            Bytes::from_static(b"not an image"),
            Some("image/heic"),
        );
        assert!(matches!(
            resolved,
            ResolvedImage::Raw { ref content_type, .. } if content_type == "image/heic"
        ));

        let resolved = classify("http://x/blob", Bytes::from_static(b"not an image"), None);
        assert_eq!(resolved.content_type().as_deref(), Some(OCTET_STREAM));
    }

    #[test]
    fn test_is_fetchable() {
        assert!(is_fetchable("https://images.example.com/a.jpg"));
        assert!(is_fetchable("http://127.0.0.1:8080/a.jpg"));
        assert!(!is_fetchable("file:///etc/passwd"));
        assert!(!is_fetchable("not a url"));
        assert!(!is_fetchable(""));
    }

    #[actix_rt::test]
    async fn test_resolve_all_isolates_failures() {
        let (base, _hits) = spawn_fake_backend().await;
        let refs = vec![
            ImageReference::new(format!("{}/img/missing", base)),
            ImageReference::new(format!("{}/img/ok.png", base)),
            ImageReference::new(format!("{}/img/junk", base)),
            ImageReference::new("ftp://nowhere/x.png"),
            ImageReference::new("http://127.0.0.1:9/refused.png"),
        ];

        let resolved = resolver().resolve_all(&refs).await;

        assert_eq!(resolved.len(), 5);
        assert!(matches!(resolved[0], ResolvedImage::Unavailable { .. }));
        assert!(matches!(resolved[1], ResolvedImage::Decoded { .. }));
        assert!(matches!(resolved[2], ResolvedImage::Raw { .. }));
        assert!(!resolved[3].is_available());
        assert!(!resolved[4].is_available());
        assert_eq!(resolved[1].url(), refs[1].url);
    }

    #[actix_rt::test]
    async fn test_resolve_is_memoized() {
        let (base, hits) = spawn_fake_backend().await;
        let resolver = resolver();
        let reference = ImageReference::new(format!("{}/img/ok.png", base));

        let first = resolver.resolve(&reference).await;
        let second = resolver.resolve(&reference).await;

        assert_eq!(hits.image_count(), 1);
        assert_eq!(first.bytes(), second.bytes());
        assert!(matches!(second, ResolvedImage::Decoded { .. }));

        let cached = resolver.cached(&reference.url).await;
        assert!(matches!(cached, Some(ResolvedImage::Decoded { .. })));
        assert!(resolver.cached("http://never/seen.png").await.is_none());
    }

    #[actix_rt::test]
    async fn test_raw_content_type_survives_cache_hits() {
        let (base, hits) = spawn_fake_backend().await;
        let resolver = resolver();
        let reference = ImageReference::new(format!("{}/img/photo.heic", base));

        let first = resolver.resolve(&reference).await;
        let second = resolver.resolve(&reference).await;
        let served = resolver.cached(&reference.url).await;

        assert!(matches!(first, ResolvedImage::Raw { .. }));
        assert_eq!(first.content_type().as_deref(), Some("image/heic"));
        assert_eq!(second.content_type().as_deref(), Some("image/heic"));
        assert_eq!(
            served.and_then(|r| r.content_type()).as_deref(),
            Some("image/heic")
        );
        assert_eq!(hits.image_count(), 1);
    }

    #[actix_rt::test]
    async fn test_oversized_images_are_unavailable() {
        let (base, hits) = spawn_fake_backend().await;
        let resolver = resolver().with_max_bytes(16);
        let reference = ImageReference::new(format!("{}/img/ok.png", base));

        let resolved = resolver.resolve(&reference).await;

        assert!(!resolved.is_available());
        assert!(resolver.cached(&reference.url).await.is_none());
        assert_eq!(hits.image_count(), 1);
        assert_eq!(resolver.cache_stats().await.total_entries, 0);
    }

    #[actix_rt::test]
    async fn test_failures_are_not_memoized() {
        let (base, hits) = spawn_fake_backend().await;
        let resolver = resolver();
        let reference = ImageReference::new(format!("{}/img/missing", base));

        resolver.resolve(&reference).await;
        resolver.resolve(&reference).await;

        assert_eq!(hits.image_count(), 2);
    }
}
