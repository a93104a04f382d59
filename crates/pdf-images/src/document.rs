//! Caller-owned document state
//!
//! Holds the ordered image list together with the conversion settings. The
//! list can be reordered and individual images rotated before layout.

use crate::decode::SourceImage;
use crate::layout::{ImageSpec, Placement, layout_with_config};
use crate::options::ConversionOptions;
use crate::types::*;

/// One image in a document and its rotation
#[derive(Debug, Clone)]
pub struct DocumentImage {
    pub source: SourceImage,
    pub rotation: Rotation,
}

impl DocumentImage {
    pub fn spec(&self) -> ImageSpec {
        self.source.spec(self.rotation)
    }
}

/// Ordered images plus the settings used to lay them out
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    images: Vec<DocumentImage>,
    pub options: ConversionOptions,
}

impl DocumentState {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            images: Vec::new(),
            options,
        }
    }

    pub fn images(&self) -> &[DocumentImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Append an image with no rotation
    pub fn add(&mut self, source: SourceImage) {
        self.images.push(DocumentImage {
            source,
            rotation: Rotation::None,
        });
    }

    pub fn extend(&mut self, sources: impl IntoIterator<Item = SourceImage>) {
        for source in sources {
            self.add(source);
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<SourceImage> {
        self.check_index(index)?;
        Ok(self.images.remove(index).source)
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Move the image at `from` so that it ends up at `to`
    pub fn move_image(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let image = self.images.remove(from);
        self.images.insert(to, image);
        Ok(())
    }

    /// Swap with the previous image; a no-op for the first one
    pub fn move_up(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index > 0 {
            self.images.swap(index, index - 1);
        }
        Ok(())
    }

    /// Swap with the next image; a no-op for the last one
    pub fn move_down(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index + 1 < self.images.len() {
            self.images.swap(index, index + 1);
        }
        Ok(())
    }

    /// Turn an image a quarter clockwise, returning the new rotation
    pub fn rotate_clockwise(&mut self, index: usize) -> Result<Rotation> {
        self.check_index(index)?;
        let image = &mut self.images[index];
        image.rotation = image.rotation.rotate_clockwise();
        Ok(image.rotation)
    }

    pub fn set_rotation(&mut self, index: usize, rotation: Rotation) -> Result<()> {
        self.check_index(index)?;
        self.images[index].rotation = rotation;
        Ok(())
    }

    /// Layout descriptions of all images, in document order
    pub fn specs(&self) -> Vec<ImageSpec> {
        self.images.iter().map(DocumentImage::spec).collect()
    }

    /// Run the layout engine over the document with its own settings
    pub fn layout(&self) -> Result<Vec<Placement>> {
        let config = self.options.layout_config()?;
        layout_with_config(&config, &self.specs())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.images.len() {
            return Err(ConvertError::InvalidConfig(format!(
                "Image index {} out of range (document has {} images)",
                index,
                self.images.len()
            )));
        }
        Ok(())
    }
}
