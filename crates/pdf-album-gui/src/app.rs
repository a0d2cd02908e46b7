use eframe::egui;
use pdf_album::{MediaType, SelectedImage, SlotId};
use pdf_album_runtime::{AlbumCommand, AlbumUpdate, Thumbnail};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{AlbumState, ImageTile, show_album};

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct AlbumApp {
    state: AlbumState,
    status: String,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<AlbumCommand>,
    update_rx: mpsc::UnboundedReceiver<AlbumUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    logger: AppLogger,

    // Runtime handle
    _tokio_handle: tokio::runtime::Handle,
}

impl AlbumApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            state: AlbumState::default(),
            status: String::new(),
            command_tx,
            update_rx,
            progress: None,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    /// Install a fresh selection: tiles get their slot id from the
    /// selection index, and the order is re-derived from the tile
    /// sequence right away.
    fn install_selection(
        &mut self,
        ctx: &egui::Context,
        images: Vec<SelectedImage>,
        thumbnails: Vec<Option<Thumbnail>>,
    ) {
        let tiles: Vec<ImageTile> = images
            .iter()
            .zip(&thumbnails)
            .map(|(image, thumbnail)| {
                let texture = thumbnail.as_ref().map(|thumb| {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [thumb.width, thumb.height],
                        &thumb.rgba_data,
                    );
                    ctx.load_texture(
                        format!("thumb_{}", image.index),
                        color_image,
                        egui::TextureOptions::default(),
                    )
                });
                ImageTile {
                    slot: SlotId(image.index),
                    name: image.name.clone(),
                    texture,
                }
            })
            .collect();

        self.state.session.replace_selection(images);
        self.state.tiles = tiles;
        self.state.assembly = None;

        if let Err(e) = self
            .state
            .session
            .sync_order(&crate::views::album::tile_order(&self.state.tiles))
        {
            self.status = format!("Error: {e}");
        }
    }
}

impl eframe::App for AlbumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle drag-and-drop: any drop replaces the whole selection.
        // Files carrying a non-image declared type are rejected here;
        // the worker's intake step re-filters the rest by extension.
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                let paths: Vec<_> = i
                    .raw
                    .dropped_files
                    .iter()
                    .filter(|file| {
                        file.mime.is_empty() || MediaType::from_mime(&file.mime).is_some()
                    })
                    .filter_map(|file| file.path.clone())
                    .collect();
                if !paths.is_empty() {
                    let _ = self.command_tx.send(AlbumCommand::LoadImages { paths });
                    self.status = "Loading images...".to_string();
                }
            }
        });

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                AlbumUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint(); // Request another frame
                }
                AlbumUpdate::ImagesLoaded { images, thumbnails } => {
                    self.status = format!("Loaded {} image(s)", images.len());
                    self.progress = None;
                    self.install_selection(ctx, images, thumbnails);
                }
                AlbumUpdate::AssemblyComplete { assembly } => {
                    self.status = if assembly.skipped.is_empty() {
                        format!("Assembled {} page(s)", assembly.document.page_count())
                    } else {
                        format!(
                            "Assembled {} page(s), skipped {} unsupported file(s)",
                            assembly.document.page_count(),
                            assembly.skipped.len()
                        )
                    };
                    self.progress = None;
                    self.state.converting = false;
                    self.state.assembly = Some(assembly);
                }
                AlbumUpdate::Saved { path } => {
                    self.status = format!("Saved → {}", path.display());
                    self.progress = None;
                }
                AlbumUpdate::Error { message } => {
                    log::error!("{message}");
                    self.status = format!("Error: {message}");
                    self.progress = None;
                    self.state.converting = false;
                }
            }
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🖼 Image to PDF");
            });
        });

        egui::TopBottomPanel::bottom("log").show(ctx, |ui| {
            egui::CollapsingHeader::new("Log").show(ui, |ui| {
                egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                    for entry in self.logger.get_entries() {
                        ui.label(format!(
                            "{} [{}] {}: {}",
                            entry.timestamp.format("%H:%M:%S"),
                            entry.level,
                            entry.target,
                            entry.message
                        ));
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_album(ui, &mut self.state, &self.command_tx, &mut self.status);

            // Show progress bar
            if let Some(ref progress) = self.progress {
                ui.separator();
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
                ctx.request_repaint(); // Keep updating during operations
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });
    }
}
