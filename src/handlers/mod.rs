// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod gallery;
pub mod health;
pub mod places;
pub mod posts;

pub use gallery::config as gallery_config;
pub use health::config as health_config;
pub use places::config as places_config;
pub use posts::config as posts_config;
