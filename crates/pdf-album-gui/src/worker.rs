use pdf_album_runtime::{AlbumCommand, AlbumUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes album commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<AlbumCommand>,
    update_tx: mpsc::UnboundedSender<AlbumUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: AlbumCommand,
    command_rx: &mut mpsc::UnboundedReceiver<AlbumCommand>,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    match cmd {
        AlbumCommand::LoadImages { mut paths } => {
            // Each selection replaces the previous one, so queued loads
            // are superseded by the most recent drop.
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let AlbumCommand::LoadImages { paths: newer } = next_cmd {
                    log::debug!("Discarding queued selection, using newer drop");
                    paths = newer;
                } else {
                    // Non-load command found, process it before the load
                    Box::pin(process_command(next_cmd, command_rx, update_tx)).await;
                }
            }

            handlers::album::handle_load_images(paths, update_tx).await;
        }
        AlbumCommand::Assemble { images, metadata } => {
            handlers::album::handle_assemble(images, metadata, update_tx).await;
        }
        AlbumCommand::Save { document, path } => {
            handlers::album::handle_save(document, path, update_tx).await;
        }
    }
}
