// src/config/render.rs
// DOCUMENTATION: Per-request rendering configuration
// PURPOSE: Carry locale and theme explicitly into section renderers

use crate::config::Config;
use crate::models::Locale;
use serde::Serialize;

/// Visual theme handed to the front end alongside section data
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Theme {
    pub primary_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#006666".to_string(),
        }
    }
}

/// Locale + theme for one rendering pass
/// DOCUMENTATION: Built per request and passed down, never stored globally
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    pub locale: Locale,
    pub theme: Theme,
}

impl RenderConfig {
    #[cfg(test)]
    pub fn new(locale: Locale, theme: Theme) -> Self {
        Self { locale, theme }
    }

    /// Build from the service config and an optional `lang` request parameter.
    /// Unknown languages fall back to the configured default.
    pub fn for_request(config: &Config, lang: Option<&str>) -> Self {
        let locale = lang
            .and_then(|l| l.parse::<Locale>().ok())
            .unwrap_or(config.default_locale);

        Self {
            locale,
            theme: Theme {
                primary_color: config.theme_primary_color.clone(),
            },
        }
    }
}
