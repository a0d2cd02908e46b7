//! End-to-end assembly tests over in-memory image fixtures.

use pdf_album::{
    AlbumError, AlbumSession, DocumentMetadata, MediaType, PAGE_WIDTH_PT, SelectedImage, SlotId,
    assemble,
};
use std::io::Cursor;

const EPSILON: f32 = 0.01;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, image::ImageFormat::Png)
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, image::ImageFormat::Jpeg)
}

fn encode(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([180, 90, 40]),
    ));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

fn selected(index: usize, name: &str, media_type: MediaType, bytes: Vec<u8>) -> SelectedImage {
    SelectedImage {
        index,
        name: name.to_string(),
        media_type,
        bytes,
    }
}

#[tokio::test]
async fn test_pages_scale_to_fixed_width() {
    let images = vec![
        selected(0, "a.png", MediaType::Png, png_bytes(400, 200)),
        selected(1, "b.jpg", MediaType::Jpeg, jpeg_bytes(300, 600)),
    ];

    let assembly = assemble(&images, &DocumentMetadata::default())
        .await
        .unwrap();
    let document = assembly.document;

    assert_eq!(document.page_count(), 2);
    assert!(assembly.skipped.is_empty());

    let (w1, h1) = document.page_sizes_pt[0];
    assert!((w1 - PAGE_WIDTH_PT).abs() < EPSILON);
    assert!((h1 - 297.64).abs() < EPSILON);

    let (w2, h2) = document.page_sizes_pt[1];
    assert!((w2 - PAGE_WIDTH_PT).abs() < EPSILON);
    assert!((h2 - 1190.56).abs() < EPSILON);

    // Aspect ratios survive to floating-point precision.
    assert!((h1 / w1 - 200.0 / 400.0).abs() < f32::EPSILON * 8.0);
    assert!((h2 / w2 - 600.0 / 300.0).abs() < f32::EPSILON * 8.0);
}

#[tokio::test]
async fn test_page_order_follows_slot_order() {
    let mut session = AlbumSession::new();
    session.replace_selection(vec![
        selected(0, "a.png", MediaType::Png, png_bytes(100, 100)),
        selected(1, "b.png", MediaType::Png, png_bytes(100, 200)),
        selected(2, "c.png", MediaType::Png, png_bytes(100, 300)),
    ]);

    // Drag-reorder [a, b, c] -> [c, a, b].
    session
        .sync_order(&vec![SlotId(2), SlotId(0), SlotId(1)])
        .unwrap();

    let assembly = assemble(&session.ordered_images(), &DocumentMetadata::default())
        .await
        .unwrap();

    // Page heights identify the source images: c is 3x as tall as a.
    let heights: Vec<f32> = assembly
        .document
        .page_sizes_pt
        .iter()
        .map(|&(_, h)| h)
        .collect();
    assert_eq!(heights.len(), 3);
    assert!((heights[0] - PAGE_WIDTH_PT * 3.0).abs() < EPSILON);
    assert!((heights[1] - PAGE_WIDTH_PT).abs() < EPSILON);
    assert!((heights[2] - PAGE_WIDTH_PT * 2.0).abs() < EPSILON);
}

#[tokio::test]
async fn test_unsupported_format_is_skipped_not_fatal() {
    let images = vec![
        selected(
            0,
            "anim.gif",
            MediaType::Other("image/gif".to_string()),
            b"GIF89a not really".to_vec(),
        ),
        selected(1, "a.png", MediaType::Png, png_bytes(200, 200)),
    ];

    let assembly = assemble(&images, &DocumentMetadata::default())
        .await
        .unwrap();

    assert_eq!(assembly.document.page_count(), 1);
    assert_eq!(assembly.skipped.len(), 1);
    assert_eq!(assembly.skipped[0].name, "anim.gif");
    assert_eq!(assembly.skipped[0].index, 0);
}

#[tokio::test]
async fn test_gif_only_selection_yields_zero_pages() {
    let images = vec![selected(
        0,
        "anim.gif",
        MediaType::Other("image/gif".to_string()),
        b"GIF89a".to_vec(),
    )];

    let assembly = assemble(&images, &DocumentMetadata::default())
        .await
        .unwrap();

    assert_eq!(assembly.document.page_count(), 0);
    assert_eq!(assembly.skipped.len(), 1);
}

#[tokio::test]
async fn test_corrupt_image_aborts_the_run() {
    let images = vec![
        selected(0, "good.png", MediaType::Png, png_bytes(100, 100)),
        selected(1, "bad.png", MediaType::Png, b"not a png".to_vec()),
    ];

    let err = assemble(&images, &DocumentMetadata::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AlbumError::Decode { ref name, .. } if name == "bad.png"));
}

#[tokio::test]
async fn test_empty_selection_is_rejected() {
    let err = assemble(&[], &DocumentMetadata::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AlbumError::NoImages));
}

#[tokio::test]
async fn test_metadata_defaults_are_baked_in() {
    let images = vec![selected(0, "a.png", MediaType::Png, png_bytes(64, 64))];

    let assembly = assemble(&images, &DocumentMetadata::default())
        .await
        .unwrap();

    let meta = &assembly.document.metadata;
    assert_eq!(meta.title, "Converted PDF");
    assert_eq!(meta.author, "");
    assert_eq!(meta.subject, "");
    assert_eq!(meta.keywords, "");
    assert_eq!(meta.file_name(), "Converted PDF.pdf");
}

#[tokio::test]
async fn test_output_parses_as_pdf_with_matching_page_count() {
    let images = vec![
        selected(0, "a.png", MediaType::Png, png_bytes(400, 200)),
        selected(1, "b.jpg", MediaType::Jpeg, jpeg_bytes(300, 600)),
    ];

    let metadata = DocumentMetadata {
        title: "Scans".to_string(),
        author: "Someone".to_string(),
        subject: "Receipts".to_string(),
        keywords: "scan, receipt".to_string(),
    };

    let assembly = assemble(&images, &metadata).await.unwrap();
    let parsed = lopdf::Document::load_mem(&assembly.document.bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), 2);
}
