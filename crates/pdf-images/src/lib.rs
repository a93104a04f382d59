pub mod constants;
mod convert;
mod decode;
mod document;
pub mod layout;
mod options;
pub mod render;
mod stats;
mod types;

pub use convert::{convert, convert_document, default_output_path, save_pdf};
pub use decode::{SourceImage, load_image, load_images};
pub use document::{DocumentImage, DocumentState};
pub use layout::{ImageSpec, LayoutConfig, LayoutCursor, PageSize, Placement, layout};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
