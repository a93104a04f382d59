//! Shared constants for image conversion

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Defaults
// =============================================================================

/// File name used when the caller does not choose one
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "converted-images.pdf";

/// Default border/gutter width in millimeters
pub const DEFAULT_PADDING_MM: f32 = 5.0;

/// Default JPEG quality for embedded images
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

// =============================================================================
// Borders
// =============================================================================

/// Dash pattern for dashed borders, in multiples of the line width
pub const DASHED_PATTERN: (f32, f32) = (3.0, 2.0);

/// Dash pattern for dotted borders, in multiples of the line width
pub const DOTTED_PATTERN: (f32, f32) = (1.0, 1.0);
