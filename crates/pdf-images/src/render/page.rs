//! Output page rendering
//!
//! Turns placements into PDF pages: for each placement the border is drawn
//! first and the image on top of it. Placements sharing a page index go on the
//! same page in order, so later images cover earlier ones where they overlap.

use crate::constants::{DASHED_PATTERN, DOTTED_PATTERN, mm_to_pt};
use crate::document::DocumentImage;
use crate::layout::{PageSize, Placement, Rect};
use crate::options::ConversionOptions;
use crate::types::*;
use log::{debug, info};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::create_image_xobject;

// =============================================================================
// Public API
// =============================================================================

/// Render every placement into a new PDF document.
///
/// One output page is created per distinct page index, in order.
pub fn render_document(
    images: &[DocumentImage],
    placements: &[Placement],
    options: &ConversionOptions,
) -> Result<Document> {
    if placements.is_empty() {
        return Err(ConvertError::NoImages);
    }

    let page = options.oriented_page_size();
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for page_placements in placements.chunk_by(|a, b| a.page_index == b.page_index) {
        let page_id = render_page(
            &mut output,
            images,
            page_placements,
            page,
            pages_tree_id,
            options,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    info!(
        "Rendered {} images onto {} pages",
        placements.len(),
        page_refs.len()
    );

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Render the placements of one page and add the page to `output`.
pub fn render_page(
    output: &mut Document,
    images: &[DocumentImage],
    placements: &[Placement],
    page: PageSize,
    parent_pages_id: ObjectId,
    options: &ConversionOptions,
) -> Result<ObjectId> {
    let page_width_pt = mm_to_pt(page.width_mm);
    let page_height_pt = mm_to_pt(page.height_mm);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for placement in placements {
        let image = images.get(placement.image_index).ok_or_else(|| {
            ConvertError::InvalidConfig(format!(
                "Placement refers to image {} but only {} images were given",
                placement.image_index,
                images.len()
            ))
        })?;

        if let Some(ops) = border_command(
            &placement.border_rect(options.padding_mm),
            options.padding_mm,
            options.border_color,
            options.border_style,
            page.height_mm,
        ) {
            content_ops.push(ops);
        }

        let xobject_name = format!("Im{}", placement.image_index);
        let xobject_id =
            create_image_xobject(output, &image.source, image.rotation, options.quality)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(image_command(
            &xobject_name,
            &placement.rect(),
            page.height_mm,
        ));
    }

    debug!(
        "Page {} holds {} images",
        placements.first().map_or(0, |p| p.page_index),
        placements.len()
    );

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert a top-left millimeter rect into PDF user space
/// (x, y, width, height) in points with a bottom-left origin.
fn to_pdf_space(rect: &Rect, page_height_mm: f32) -> (f32, f32, f32, f32) {
    (
        mm_to_pt(rect.x),
        mm_to_pt(page_height_mm - rect.bottom()),
        mm_to_pt(rect.width),
        mm_to_pt(rect.height),
    )
}

/// Content stream command to draw an image XObject into `rect`.
fn image_command(xobject_name: &str, rect: &Rect, page_height_mm: f32) -> String {
    let (x, y, w, h) = to_pdf_space(rect, page_height_mm);
    format!("q {} 0 0 {} {} {} cm /{} Do Q\n", w, h, x, y, xobject_name)
}

/// Content stream command for the border around one image.
///
/// `border` is the outer border rectangle; `None` when nothing is drawn.
fn border_command(
    border: &Rect,
    padding_mm: f32,
    color: Color,
    style: BorderStyle,
    page_height_mm: f32,
) -> Option<String> {
    if padding_mm <= 0.0 {
        return None;
    }

    let (r, g, b) = color.to_unit_rgb();
    match style {
        BorderStyle::None => None,
        BorderStyle::Solid => {
            let (x, y, w, h) = to_pdf_space(border, page_height_mm);
            Some(format!(
                "q {} {} {} rg {} {} {} {} re f Q\n",
                r, g, b, x, y, w, h
            ))
        }
        BorderStyle::Dashed | BorderStyle::Dotted => {
            // Stroke along the middle of the padding band
            let line_width = mm_to_pt(padding_mm);
            let band_center = border.expand(-padding_mm / 2.0);
            let (x, y, w, h) = to_pdf_space(&band_center, page_height_mm);
            let (on, off) = if style == BorderStyle::Dashed {
                DASHED_PATTERN
            } else {
                DOTTED_PATTERN
            };
            Some(format!(
                "q {} {} {} RG {} w [{} {}] 0 d {} {} {} {} re S Q\n",
                r,
                g,
                b,
                line_width,
                on * line_width,
                off * line_width,
                x,
                y,
                w,
                h
            ))
        }
    }
}
