// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod backend_client;
pub mod cache;
pub mod catalog;
pub mod gallery_service;
pub mod normalizer;
pub mod posts_service;
pub mod resolver;

pub use backend_client::*;
pub use cache::*;
pub use catalog::*;
pub use gallery_service::*;
pub use posts_service::*;
pub use resolver::*;
