//! Page breaking and image placement
//!
//! The engine walks the images in document order and decides, for each one,
//! which page it lands on and where. Page breaks depend only on the image
//! index and the layout mode, except in [`LayoutMode::Double`] where an image
//! too tall for the slot next to its partner is pushed onto a page of its own.

use crate::types::{ConvertError, LayoutMode, Orientation, Result};

use super::{ImageSpec, PageSize, Placement, fit_width, fit_within};
use log::{debug, warn};

/// Validated page geometry and mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub page: PageSize,
    pub mode: LayoutMode,
    pub padding_mm: f32,
}

impl LayoutConfig {
    /// Build a configuration, rejecting geometry that leaves no room to draw.
    pub fn new(
        page: PageSize,
        orientation: Orientation,
        mode: LayoutMode,
        padding_mm: f32,
    ) -> Result<Self> {
        let page = match orientation {
            Orientation::Portrait => page,
            Orientation::Landscape => PageSize::new(page.height_mm, page.width_mm),
        };
        let config = Self {
            page,
            mode,
            padding_mm,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let PageSize {
            width_mm,
            height_mm,
        } = self.page;

        if !width_mm.is_finite() || !height_mm.is_finite() || width_mm <= 0.0 || height_mm <= 0.0
        {
            return Err(ConvertError::InvalidConfig(format!(
                "Page dimensions must be positive, got {}x{} mm",
                width_mm, height_mm
            )));
        }

        if !self.padding_mm.is_finite() || self.padding_mm < 0.0 {
            return Err(ConvertError::InvalidConfig(format!(
                "Padding must be a non-negative number, got {}",
                self.padding_mm
            )));
        }

        let (cell_width, cell_height) = self.cell_size();
        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(ConvertError::InvalidConfig(format!(
                "Padding of {} mm leaves no drawable area on a {}x{} mm page",
                self.padding_mm, width_mm, height_mm
            )));
        }

        Ok(())
    }

    /// The largest area one image may occupy in this mode
    fn cell_size(&self) -> (f32, f32) {
        let p = self.padding_mm;
        let PageSize {
            width_mm: w,
            height_mm: h,
        } = self.page;
        match self.mode {
            LayoutMode::Full | LayoutMode::Single => (w - 2.0 * p, h - 2.0 * p),
            LayoutMode::Double => ((w - 3.0 * p) / 2.0, h - 2.0 * p),
            LayoutMode::Quad => ((w - 3.0 * p) / 2.0, (h - 3.0 * p) / 2.0),
        }
    }
}

/// Running state for laying out images one at a time.
///
/// Feeding every image of a document through [`LayoutCursor::place`] in
/// order gives the same result as [`layout`] over the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutCursor {
    /// Index of the next image to place
    next_index: usize,
    /// Page the last placement went to
    page_index: usize,
    /// Index of the first image on the current page
    page_start: usize,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next placed image will receive
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Page the most recent image landed on
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Place the next image.
    pub fn place(&mut self, config: &LayoutConfig, image: &ImageSpec) -> Result<Placement> {
        let index = self.next_index;
        validate_image(index, image)?;

        let placement = match config.mode {
            LayoutMode::Full => self.place_fitted(config, image, false),
            LayoutMode::Single => self.place_fitted(config, image, true),
            LayoutMode::Double => self.place_double(config, image),
            LayoutMode::Quad => self.place_quad(config),
        };

        debug!(
            "Placed image {} ('{}') on page {} at ({:.2}, {:.2}) size {:.2}x{:.2} mm",
            index,
            image.id,
            placement.page_index,
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );

        self.next_index += 1;
        Ok(placement)
    }

    fn break_page(&mut self) {
        self.page_index += 1;
        self.page_start = self.next_index;
    }

    /// Full and Single: fit to the page inside the padding, centered
    fn place_fitted(
        &mut self,
        config: &LayoutConfig,
        image: &ImageSpec,
        page_per_image: bool,
    ) -> Placement {
        let index = self.next_index;
        if page_per_image && index > 0 {
            self.break_page();
        }

        let (max_width, max_height) = config.cell_size();
        let (width, height) = fit_within(image.aspect_ratio(), max_width, max_height);

        Placement {
            image_index: index,
            page_index: self.page_index,
            x: (config.page.width_mm - width) / 2.0,
            y: (config.page.height_mm - height) / 2.0,
            width,
            height,
        }
    }

    /// Double: two width-fitted columns per page
    fn place_double(&mut self, config: &LayoutConfig, image: &ImageSpec) -> Placement {
        let index = self.next_index;
        let p = config.padding_mm;
        let page_height = config.page.height_mm;

        if index % 2 == 0 && index > 0 {
            self.break_page();
        }

        let aspect = image.aspect_ratio();
        let (column_width, _) = config.cell_size();
        let (mut width, mut height) = fit_width(aspect, column_width);

        let row = (index - self.page_start) / 2;
        let mut y = p + row as f32 * (height + p);

        if y + height > page_height - p && index > self.page_start {
            self.break_page();
            y = p;
        }

        // Still too tall at the top of an empty page: shrink to the height.
        if y + height > page_height - p {
            warn!(
                "Image {} ('{}') is too tall for its column, letterboxing",
                index, image.id
            );
            height = page_height - p - y;
            width = height * aspect;
        }

        let x = if index % 2 == 0 {
            p
        } else {
            config.page.width_mm - width - p
        };

        Placement {
            image_index: index,
            page_index: self.page_index,
            x,
            y,
            width,
            height,
        }
    }

    /// Quad: fixed 2x2 cells, aspect ratio not preserved
    fn place_quad(&mut self, config: &LayoutConfig) -> Placement {
        let index = self.next_index;
        let p = config.padding_mm;

        if index % 4 == 0 && index > 0 {
            self.break_page();
        }

        let (width, height) = config.cell_size();
        let col = index % 2;
        let row = (index / 2) % 2;

        Placement {
            image_index: index,
            page_index: self.page_index,
            x: p + col as f32 * (width + p),
            y: p + row as f32 * (height + p),
            width,
            height,
        }
    }
}

fn validate_image(index: usize, image: &ImageSpec) -> Result<()> {
    if image.width_px == 0 || image.height_px == 0 {
        return Err(ConvertError::InvalidImage {
            index,
            reason: format!(
                "'{}' has non-positive dimensions {}x{}",
                image.id, image.width_px, image.height_px
            ),
        });
    }
    Ok(())
}

/// Compute placements for every image in document order.
///
/// All inputs are validated before anything is placed, so an error never
/// comes with a partial result. An empty image list yields no placements.
pub fn layout(
    page: PageSize,
    orientation: Orientation,
    mode: LayoutMode,
    padding_mm: f32,
    images: &[ImageSpec],
) -> Result<Vec<Placement>> {
    let config = LayoutConfig::new(page, orientation, mode, padding_mm)?;
    layout_with_config(&config, images)
}

/// [`layout`] with an already validated configuration
pub fn layout_with_config(config: &LayoutConfig, images: &[ImageSpec]) -> Result<Vec<Placement>> {
    for (index, image) in images.iter().enumerate() {
        validate_image(index, image)?;
    }

    let mut cursor = LayoutCursor::new();
    images
        .iter()
        .map(|image| cursor.place(config, image))
        .collect()
}
