//! PDF rendering of laid-out images
//!
//! This module handles all PDF-specific operations:
//! - Encoding rotated images as JPEG XObjects
//! - Drawing borders and images onto output pages
//! - Building the page tree of the output document

mod page;
mod xobject;

pub use page::*;
pub use xobject::{create_image_xobject, encode_jpeg, rotate_image};
