// src/services/backend_client.rs
// DOCUMENTATION: Client for the image search / community posts backend
// PURPOSE: Issue GET /images and GET /reddit, memoize successful bodies

use crate::config::Timeouts;
use crate::errors::GalleryError;
use crate::services::ResponseCache;
use bytes::Bytes;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// Backend API client
/// DOCUMENTATION: Holds one reqwest client plus the shared memoization cache
pub struct BackendClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the backend, without trailing slash
    base_url: String,
    /// Per-call timeouts
    timeouts: Timeouts,
    /// Shared cache of successful response bodies
    cache: Arc<ResponseCache>,
}

impl BackendClient {
    /// Create new backend client
    pub fn new(base_url: impl Into<String>, timeouts: Timeouts, cache: Arc<ResponseCache>) -> Self {
        Self::with_client(Client::new(), base_url, timeouts, cache)
    }

    /// Create a client that reuses an existing reqwest connection pool
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        timeouts: Timeouts,
        cache: Arc<ResponseCache>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeouts,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the backend answers at all
    /// DOCUMENTATION: GET <backend>/ with the short health timeout. Any
    /// transport error or non-success status counts as "not responding".
    pub async fn ping(&self) -> bool {
        let url = format!("{}/", self.base_url);

        match self
            .client
            .get(&url)
            .timeout(self.timeouts.health)
            .send()
            .await
        {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    log::warn!("Backend health probe returned {}", response.status());
                }
                ok
            }
            Err(e) => {
                log::warn!("Backend health probe failed: {}", e);
                false
            }
        }
    }

    /// Search images for a query
    /// DOCUMENTATION: GET <backend>/images?q=<query>&per=<per>
    ///
    /// # Returns
    /// The decoded JSON body, whatever its shape; use the normalizer on it.
    pub async fn fetch_images(&self, query: &str, per: u32) -> Result<Value, GalleryError> {
        let key = ResponseCache::images_key(query, per);
        let per = per.to_string();
        let params = [("q", query), ("per", per.as_str())];

        self.get_json("images", &params, key).await
    }

    /// Fetch community posts for a topic
    /// DOCUMENTATION: GET <backend>/reddit?topic=<topic>&limit=<limit>
    pub async fn fetch_posts(&self, topic: &str, limit: u32) -> Result<Value, GalleryError> {
        let key = ResponseCache::posts_key(topic, limit);
        let limit = limit.to_string();
        let params = [("topic", topic), ("limit", limit.as_str())];

        self.get_json("reddit", &params, key).await
    }

    async fn get_json(
        &self,
        route: &str,
        params: &[(&str, &str)],
        cache_key: String,
    ) -> Result<Value, GalleryError> {
        if let Some(body) = self.cache.get(&cache_key).await {
            return parse_body(&body);
        }

        let url = format!("{}/{}", self.base_url, route);

        log::debug!("Backend request: GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeouts.backend)
            .send()
            .await
            .map_err(|e| {
                log::error!("Backend request to /{} failed: {}", route, e);
                GalleryError::BackendUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Backend /{} returned {}", route, status);
            return Err(GalleryError::BackendStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            log::error!("Failed to read backend /{} body: {}", route, e);
            GalleryError::BackendUnavailable(e.to_string())
        })?;

        // Only bodies that parse are worth remembering
        let value = parse_body(&body)?;
        self.cache.insert_if_absent(cache_key, body).await;

        Ok(value)
    }
}

fn parse_body(body: &Bytes) -> Result<Value, GalleryError> {
    serde_json::from_slice(body).map_err(|e| {
        log::error!("Failed to parse backend response: {}", e);
        GalleryError::InvalidPayload(e.to_string())
    })
}
