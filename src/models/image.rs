// src/models/image.rs

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Image URL extracted from a backend payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub url: String,
    /// Photographer / source credit, when the payload carries one
    pub attribution: Option<String>,
}

impl ImageReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            attribution: None,
        }
    }

    #[cfg(test)]
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }
}

/// Outcome of fetching a single image
/// DOCUMENTATION: `Raw` means bytes arrived but could not be decoded; the
/// front end may still hand them to the browser for format sniffing.
#[derive(Debug, Clone)]
pub enum ResolvedImage {
    Decoded {
        url: String,
        /// Short format name, e.g. "png"
        format: String,
        content_type: String,
        width: u32,
        height: u32,
        bytes: Bytes,
    },
    Raw {
        url: String,
        content_type: String,
        bytes: Bytes,
    },
    Unavailable {
        url: String,
    },
}

impl ResolvedImage {
    pub fn url(&self) -> &str {
        match self {
            ResolvedImage::Decoded { url, .. }
            | ResolvedImage::Raw { url, .. }
            | ResolvedImage::Unavailable { url } => url,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, ResolvedImage::Unavailable { .. })
    }

    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            ResolvedImage::Decoded { bytes, .. } | ResolvedImage::Raw { bytes, .. } => Some(bytes),
            ResolvedImage::Unavailable { .. } => None,
        }
    }

    /// MIME type to serve the bytes with
    pub fn content_type(&self) -> Option<String> {
        match self {
            ResolvedImage::Decoded { content_type, .. } | ResolvedImage::Raw { content_type, .. } => {
                Some(content_type.clone())
            }
            ResolvedImage::Unavailable { .. } => None,
        }
    }
}

/// Gallery tile DTO for API responses
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub url: String,
    /// Local route that serves the memoized bytes
    pub proxy_url: String,
    pub caption: String,
    pub attribution: Option<String>,
    /// "decoded" or "raw"
    pub kind: &'static str,
    pub content_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub byte_len: usize,
}

impl GalleryImage {
    /// Build a tile from a resolved image. Unavailable images yield `None`.
    pub fn from_resolved(
        reference: &ImageReference,
        resolved: &ResolvedImage,
        caption: &str,
    ) -> Option<Self> {
        let (kind, width, height) = match resolved {
            ResolvedImage::Decoded { width, height, .. } => ("decoded", Some(*width), Some(*height)),
            ResolvedImage::Raw { .. } => ("raw", None, None),
            ResolvedImage::Unavailable { .. } => return None,
        };

        Some(GalleryImage {
            url: reference.url.clone(),
            proxy_url: format!(
                "/gallery/image?url={}",
                url_encode_component(&reference.url)
            ),
            caption: caption.to_string(),
            attribution: reference.attribution.clone(),
            kind,
            content_type: resolved.content_type(),
            width,
            height,
            byte_len: resolved.bytes().map(|b| b.len()).unwrap_or(0),
        })
    }
}

fn url_encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
