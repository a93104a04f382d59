//! Image XObject creation
//!
//! Source images are rotated, flattened to RGB and re-encoded as JPEG so they
//! can be embedded with the `DCTDecode` filter.

use crate::decode::SourceImage;
use crate::types::{Result, Rotation};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType};
use lopdf::{Document, ObjectId, Stream, dictionary};

/// Apply a clockwise rotation to the pixels
pub fn rotate_image(image: &DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => image.clone(),
        Rotation::Clockwise90 => image.rotate90(),
        Rotation::Clockwise180 => image.rotate180(),
        Rotation::Clockwise270 => image.rotate270(),
    }
}

/// Encode an image as JPEG with the given quality (1-100)
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<(Vec<u8>, u32, u32)> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode(
        rgb.as_raw(),
        width,
        height,
        ExtendedColorType::Rgb8,
    )?;

    Ok((bytes, width, height))
}

/// Add an image XObject for `source` to the output document.
pub fn create_image_xobject(
    output: &mut Document,
    source: &SourceImage,
    rotation: Rotation,
    quality: u8,
) -> Result<ObjectId> {
    let rotated = rotate_image(&source.image, rotation);
    let (jpeg, width, height) = encode_jpeg(&rotated, quality)?;

    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    )
    // Already compressed
    .with_compression(false);

    Ok(output.add_object(stream))
}
