use pdf_album::{AssembledDocument, DocumentMetadata, SelectedImage, SlotId};
use pdf_album_runtime::{AlbumUpdate, Thumbnail};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Longest edge of a tile preview, in pixels.
const THUMBNAIL_EDGE: u32 = 160;

pub async fn handle_load_images(
    paths: Vec<PathBuf>,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let kept = pdf_album::filter_images(paths);
    if kept.is_empty() {
        let _ = update_tx.send(AlbumUpdate::Error {
            message: "No image files in the selection".to_string(),
        });
        return;
    }

    let images = match pdf_album::load_images(&kept).await {
        Ok(images) => images,
        Err(e) => {
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Failed to load images: {e}"),
            });
            return;
        }
    };

    // Thumbnail decoding is CPU-bound, spawn blocking
    let progress_tx = update_tx.clone();
    let result = tokio::task::spawn_blocking(move || {
        let total = images.len();
        let thumbnails = images
            .iter()
            .enumerate()
            .map(|(current, image)| {
                let _ = progress_tx.send(AlbumUpdate::Progress {
                    operation: format!("Preparing {}", image.name),
                    current,
                    total,
                });
                decode_thumbnail(image)
            })
            .collect::<Vec<_>>();
        (images, thumbnails)
    })
    .await;

    match result {
        Ok((images, thumbnails)) => {
            log::info!("Loaded {} image(s)", images.len());
            let _ = update_tx.send(AlbumUpdate::ImagesLoaded { images, thumbnails });
        }
        Err(e) => {
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Thumbnail task failed: {e}"),
            });
        }
    }
}

fn decode_thumbnail(image: &SelectedImage) -> Option<Thumbnail> {
    let decoded = image::load_from_memory(&image.bytes).ok()?;
    let thumb = decoded.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).to_rgba8();
    Some(Thumbnail {
        slot: SlotId(image.index),
        width: thumb.width() as usize,
        height: thumb.height() as usize,
        rgba_data: thumb.into_raw(),
    })
}

pub async fn handle_assemble(
    images: Vec<SelectedImage>,
    metadata: DocumentMetadata,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let _ = update_tx.send(AlbumUpdate::Progress {
        operation: format!("Assembling {} page(s)", images.len()),
        current: 0,
        total: images.len(),
    });

    match pdf_album::assemble(&images, &metadata).await {
        Ok(assembly) => {
            for skip in &assembly.skipped {
                log::warn!(
                    "Skipped {} (unsupported format {})",
                    skip.name,
                    skip.media_type.mime()
                );
            }
            let _ = update_tx.send(AlbumUpdate::AssemblyComplete { assembly });
        }
        Err(e) => {
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Failed to assemble PDF: {e}"),
            });
        }
    }
}

pub async fn handle_save(
    document: AssembledDocument,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    match pdf_album::save_document(&document, &path).await {
        Ok(()) => {
            log::info!("Saved PDF → {}", path.display());
            let _ = update_tx.send(AlbumUpdate::Saved { path });
        }
        Err(e) => {
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Failed to save PDF: {e}"),
            });
        }
    }
}
