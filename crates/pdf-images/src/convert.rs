//! Image to PDF conversion
//!
//! The conversion runs as an explicit pipeline:
//! 1. Decode every image (one task per file)
//! 2. Lay out the complete list in a single pass
//! 3. Render placements page by page
//! 4. Save the finished document

use crate::constants::DEFAULT_OUTPUT_FILE_NAME;
use crate::decode::load_images;
use crate::document::DocumentState;
use crate::options::ConversionOptions;
use crate::render::render_document;
use crate::types::*;
use log::info;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Convert image files into a PDF document
pub async fn convert(paths: &[impl AsRef<Path>], options: &ConversionOptions) -> Result<Document> {
    options.validate()?;

    let sources = load_images(paths).await?;
    let mut state = DocumentState::new(options.clone());
    state.extend(sources);

    convert_document(&state).await
}

/// Convert an already loaded document
pub async fn convert_document(state: &DocumentState) -> Result<Document> {
    state.options.validate()?;
    if state.is_empty() {
        return Err(ConvertError::NoImages);
    }

    let placements = state.layout()?;
    info!(
        "Laid out {} images in {:?} mode",
        placements.len(),
        state.options.layout_mode
    );

    let images = state.images().to_vec();
    let options = state.options.clone();

    tokio::task::spawn_blocking(move || render_document(&images, &placements, &options)).await?
}

/// Save the converted document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ConvertError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    info!("Saved {}", path.display());
    Ok(())
}

/// Output path used when none is given: `converted-images.pdf` in `dir`
pub fn default_output_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(DEFAULT_OUTPUT_FILE_NAME)
}
