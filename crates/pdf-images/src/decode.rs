//! Image loading
//!
//! Every file is read and decoded on its own task; results are gathered in
//! input order before any layout happens.

use crate::layout::ImageSpec;
use crate::types::*;
use image::{DynamicImage, GenericImageView};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A decoded image ready for layout and rendering
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Identifier, the file name for images loaded from disk
    pub id: String,
    pub image: Arc<DynamicImage>,
}

impl SourceImage {
    pub fn new(id: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            id: id.into(),
            image: Arc::new(image),
        }
    }

    /// Natural (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Layout description of this image with the given rotation
    pub fn spec(&self, rotation: Rotation) -> ImageSpec {
        let (width_px, height_px) = self.dimensions();
        ImageSpec {
            id: self.id.clone(),
            width_px,
            height_px,
            rotation,
        }
    }
}

/// Load and decode a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;

    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(
        "Decoded '{}' ({}x{})",
        id,
        image.width(),
        image.height()
    );
    Ok(SourceImage::new(id, image))
}

/// Load several image files concurrently, keeping their order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let handles: Vec<_> = paths
        .iter()
        .map(|path| {
            let path: PathBuf = path.as_ref().to_owned();
            tokio::spawn(async move { load_image(path).await })
        })
        .collect();

    let mut images = Vec::with_capacity(handles.len());
    for handle in handles {
        images.push(handle.await??);
    }

    info!("Loaded {} images", images.len());
    Ok(images)
}
