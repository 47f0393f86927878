// src/services/posts_service.rs
// DOCUMENTATION: Community posts section
// PURPOSE: Backend /reddit -> normalize -> section outcome

use crate::config::RenderConfig;
use crate::models::{CommunityPost, SectionOutcome};
use crate::services::normalizer::normalize_posts;
use crate::services::BackendClient;

pub struct PostsService;

impl PostsService {
    /// Fetch posts about a topic
    /// DOCUMENTATION: Same failure split as the gallery: backend errors are
    /// Unavailable, an unrecognized or empty payload is Empty.
    pub async fn fetch_posts(
        client: &BackendClient,
        render: &RenderConfig,
        topic: &str,
        limit: u32,
    ) -> SectionOutcome<CommunityPost> {
        match client.fetch_posts(topic, limit).await {
            Ok(payload) => {
                let posts = normalize_posts(&payload, limit as usize);
                log::info!(
                    "Posts for '{}' ({}): {} found",
                    topic,
                    render.locale,
                    posts.len()
                );
                SectionOutcome::from_items(posts)
            }
            Err(e) => {
                log::warn!("Posts for '{}' unavailable: {}", topic, e);
                SectionOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timeouts;
    use crate::services::backend_client::test_support::{spawn_failing_backend, spawn_fake_backend};
    use crate::services::ResponseCache;
    use std::sync::Arc;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(base, Timeouts::default(), Arc::new(ResponseCache::new(300)))
    }

    #[actix_rt::test]
    async fn test_posts_ready() {
        let (base, _hits) = spawn_fake_backend().await;

        let outcome =
            PostsService::fetch_posts(&client(&base), &RenderConfig::default(), "Wadi Shab", 6).await;

        assert_eq!(
            outcome,
            SectionOutcome::Ready(vec![
                CommunityPost::new("Best time to visit Wadi Shab?", "https://reddit.com/r/Oman/1"),
                CommunityPost::new("Loose string post", "#"),
            ])
        );
    }

    #[actix_rt::test]
    async fn test_posts_unavailable_on_500() {
        let base = spawn_failing_backend().await;

        let outcome =
            PostsService::fetch_posts(&client(&base), &RenderConfig::default(), "Oman", 6).await;

        assert_eq!(outcome, SectionOutcome::Unavailable);
    }
}
