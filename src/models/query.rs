// src/models/query.rs
// DOCUMENTATION: Query-string DTOs for section endpoints
// PURPOSE: Deserialize and validate inbound "show ..." actions

use serde::Deserialize;
use validator::Validate;

/// Default number of gallery images when `count` is omitted
pub const DEFAULT_GALLERY_COUNT: u32 = 6;

/// Default number of community posts when `limit` is omitted
pub const DEFAULT_POSTS_LIMIT: u32 = 6;

/// GET /gallery
#[derive(Debug, Deserialize, Validate)]
pub struct GalleryQuery {
    /// Search text sent to the backend
    #[validate(length(min = 1, max = 200))]
    pub q: String,

    /// Number of images to request (>= 1; upper bound comes from config)
    #[validate(range(min = 1))]
    pub count: Option<u32>,

    /// "en" or "ar"
    pub lang: Option<String>,
}

/// GET /places/{id}/gallery
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceGalleryQuery {
    #[validate(range(min = 1))]
    pub count: Option<u32>,

    pub lang: Option<String>,
}

/// GET /posts
#[derive(Debug, Deserialize, Validate)]
pub struct PostsQuery {
    /// Topic sent to the backend
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[validate(range(min = 1, max = 25))]
    pub limit: Option<u32>,

    pub lang: Option<String>,
}

/// GET /gallery/image
#[derive(Debug, Deserialize, Validate)]
pub struct ImageProxyQuery {
    #[validate(url)]
    pub url: String,
}

/// Any route that only cares about the display language
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_query_validation() {
        let ok = GalleryQuery {
            q: "Wadi Shab".to_string(),
            count: Some(6),
            lang: None,
        };
        assert!(ok.validate().is_ok());

        let zero = GalleryQuery {
            q: "Wadi Shab".to_string(),
            count: Some(0),
            lang: None,
        };
        assert!(zero.validate().is_err());

        let blank = GalleryQuery {
            q: String::new(),
            count: None,
            lang: None,
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_posts_query_limit_bounds() {
        let too_many = PostsQuery {
            topic: "Oman".to_string(),
            limit: Some(100),
            lang: None,
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_image_proxy_requires_url() {
        let bad = ImageProxyQuery {
            url: "not a url".to_string(),
        };
        assert!(bad.validate().is_err());

        let good = ImageProxyQuery {
            url: "https://images.example.com/1.jpg".to_string(),
        };
        assert!(good.validate().is_ok());
    }
}
