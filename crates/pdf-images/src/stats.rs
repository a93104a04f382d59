use crate::layout::{ImageSpec, layout_with_config, page_count};
use crate::options::ConversionOptions;
use crate::types::*;

/// Calculate statistics for a conversion without rendering anything
pub fn calculate_statistics(
    images: &[ImageSpec],
    options: &ConversionOptions,
) -> Result<ConversionStatistics> {
    if images.is_empty() {
        return Err(ConvertError::NoImages);
    }

    let config = options.layout_config()?;
    let placements = layout_with_config(&config, images)?;

    let pages = page_count(&placements);
    let mut images_per_page = vec![0; pages];
    for placement in &placements {
        images_per_page[placement.page_index] += 1;
    }

    Ok(ConversionStatistics {
        images: images.len(),
        pages,
        images_per_page,
        layout_mode: options.layout_mode,
    })
}
