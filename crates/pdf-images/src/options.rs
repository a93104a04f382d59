use crate::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_PADDING_MM};
use crate::layout::{LayoutConfig, PageSize};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion settings shared by every image in a document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Arrangement
    pub layout_mode: LayoutMode,
    pub padding_mm: f32,

    // Borders
    pub border_color: Color,
    pub border_style: BorderStyle,

    // JPEG quality of embedded images (1-100)
    pub quality: u8,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            layout_mode: LayoutMode::Single,
            padding_mm: DEFAULT_PADDING_MM,
            border_color: Color::BLACK,
            border_style: BorderStyle::Solid,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ConversionOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ConvertError::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size before orientation is applied
    pub fn page_size(&self) -> PageSize {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        PageSize::new(width_mm, height_mm)
    }

    /// Page size with orientation applied
    pub fn oriented_page_size(&self) -> PageSize {
        PageSize::from_paper(self.paper_size, self.orientation)
    }

    /// Validated layout geometry for these options
    pub fn layout_config(&self) -> Result<LayoutConfig> {
        LayoutConfig::new(
            self.page_size(),
            self.orientation,
            self.layout_mode,
            self.padding_mm,
        )
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConvertError::InvalidConfig(format!(
                "Quality must be between 1 and 100, got {}",
                self.quality
            )));
        }

        self.layout_config()?;
        Ok(())
    }
}
