// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod image;
pub mod locale;
pub mod place;
pub mod post;
pub mod query;
pub mod section;

pub use image::*;
pub use locale::*;
pub use place::*;
pub use post::*;
pub use query::*;
pub use section::*;
