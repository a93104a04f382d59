//! Layout data types
//!
//! These types sit between the decoded images and PDF rendering. All
//! lengths are millimeters with the origin at the top-left corner of the
//! page and y growing downwards.

use crate::types::{Orientation, PaperSize, Rotation};

/// Output page dimensions in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Resolve a paper size and orientation into concrete dimensions
    pub fn from_paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (width_mm, height_mm) = paper.dimensions_with_orientation(orientation);
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// Everything the layout engine needs to know about one image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    /// Caller-chosen identifier, usually the file name
    pub id: String,
    /// Natural width in pixels
    pub width_px: u32,
    /// Natural height in pixels
    pub height_px: u32,
    pub rotation: Rotation,
}

impl ImageSpec {
    pub fn new(id: impl Into<String>, width_px: u32, height_px: u32) -> Self {
        Self {
            id: id.into(),
            width_px,
            height_px,
            rotation: Rotation::None,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Width / height of the image as it appears on the page, i.e. after
    /// rotation
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = if self.rotation.swaps_axes() {
            (self.height_px, self.width_px)
        } else {
            (self.width_px, self.height_px)
        };
        w as f32 / h as f32
    }
}

/// A rectangular area in millimeters, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `amount` on every side
    pub fn expand(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }
}

/// Where one image is drawn
///
/// This is the output of the layout engine and contains everything
/// the renderer needs to place the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the image in the input list
    pub image_index: usize,
    /// Output page, 0-based
    pub page_index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    /// The drawable image area
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The border rectangle surrounding the image
    pub fn border_rect(&self, padding_mm: f32) -> Rect {
        self.rect().expand(padding_mm)
    }
}

/// Number of distinct pages referenced by a placement list
pub fn page_count(placements: &[Placement]) -> usize {
    placements.last().map_or(0, |p| p.page_index + 1)
}
