//! Layout calculation for image pages
//!
//! This module handles all the geometric work of placing images on pages:
//! - Page size and image description types
//! - Fitting images into an available area
//! - Page breaking and per-mode placement

mod engine;
mod fit;
mod types;

pub use engine::*;
pub use fit::*;
pub use types::*;
