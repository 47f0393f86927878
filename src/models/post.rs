// src/models/post.rs

use serde::{Deserialize, Serialize};

/// Community post (title + link) returned by the backend's /reddit route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub title: String,
    pub link: String,
}

impl CommunityPost {
    /// Link used when the payload carries a title but nowhere to go
    pub const NO_LINK: &'static str = "#";

    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}
