//! PDF assembly: one page per image, scaled to a fixed page width.

use crate::types::{
    AlbumError, AssembledDocument, Assembly, DocumentMetadata, Result, SelectedImage, SkippedImage,
};
use printpdf::*;

/// Fixed page width in points (A4 width). Page height follows the source
/// image's aspect ratio exactly.
pub const PAGE_WIDTH_PT: f32 = 595.28;

/// Assemble the ordered images into a single PDF document.
///
/// Metadata (with defaults applied) is written exactly once, before any
/// page is added. Images whose declared type has no decode path are
/// skipped and reported in the outcome; the run continues. Corrupt bytes
/// in a supported format abort the whole run: the single save action
/// implies an all-or-nothing document, so there is no partial recovery.
pub async fn assemble(images: &[SelectedImage], metadata: &DocumentMetadata) -> Result<Assembly> {
    if images.is_empty() {
        return Err(AlbumError::NoImages);
    }

    let images = images.to_vec();
    let metadata = metadata.clone();

    // Image decode and serialization are CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || assemble_document(&images, &metadata)).await?
}

fn assemble_document(images: &[SelectedImage], metadata: &DocumentMetadata) -> Result<Assembly> {
    let metadata = metadata.resolved();

    let mut doc = PdfDocument::new(&metadata.title);
    doc.metadata.info.author = metadata.author.clone();
    doc.metadata.info.subject = metadata.subject.clone();
    // Keywords are baked as a single-element list holding the raw string.
    doc.metadata.info.keywords = vec![metadata.keywords.clone()];

    let mut skipped = Vec::new();
    let mut page_sizes_pt = Vec::new();

    for image in images {
        if !image.media_type.is_supported() {
            skipped.push(SkippedImage {
                index: image.index,
                name: image.name.clone(),
                media_type: image.media_type.clone(),
            });
            continue;
        }

        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&image.bytes, &mut warnings).map_err(|e| {
            AlbumError::Decode {
                name: image.name.clone(),
                detail: e.to_string(),
            }
        })?;

        if raw.width == 0 || raw.height == 0 {
            return Err(AlbumError::Decode {
                name: image.name.clone(),
                detail: "image has zero width or height".to_string(),
            });
        }

        let page_height_pt = PAGE_WIDTH_PT * raw.height as f32 / raw.width as f32;
        let image_id = doc.add_image(&raw);

        // Draw at the origin, scaled so the image fills the page exactly.
        // dpi 72 makes one source pixel one point before scaling.
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(PAGE_WIDTH_PT / raw.width as f32),
                scale_y: Some(page_height_pt / raw.height as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        }];

        doc.pages.push(PdfPage::new(
            Mm::from(Pt(PAGE_WIDTH_PT)),
            Mm::from(Pt(page_height_pt)),
            ops,
        ));
        page_sizes_pt.push((PAGE_WIDTH_PT, page_height_pt));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(Assembly {
        document: AssembledDocument {
            bytes,
            page_sizes_pt,
            metadata,
        },
        skipped,
    })
}
