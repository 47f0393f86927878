// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod env;
pub mod render;

pub use env::{Config, Timeouts};
pub use render::{RenderConfig, Theme};
