use eframe::egui;
use pdf_album::{AlbumSession, DocumentMetadata, SlotId};
use pdf_album_runtime::{AlbumCommand, Assembly};
use tokio::sync::mpsc;

/// One visual slot. The slot id is assigned at selection time and
/// travels with the tile through reorders; the logical order is always
/// re-derived from the tile sequence, never from drag events.
pub struct ImageTile {
    pub slot: SlotId,
    pub name: String,
    pub texture: Option<egui::TextureHandle>,
}

// The orphan rule forbids `impl Reorderable for Vec<ImageTile>` here
// (both the trait and `Vec` are foreign), so the visual order is
// materialized as a `Vec<SlotId>`, which implements `Reorderable`.
pub(crate) fn tile_order(tiles: &[ImageTile]) -> Vec<SlotId> {
    tiles.iter().map(|tile| tile.slot).collect()
}

#[derive(Default)]
pub struct AlbumState {
    pub session: AlbumSession,
    pub tiles: Vec<ImageTile>,
    pub metadata: DocumentMetadata,
    pub assembly: Option<Assembly>,
    pub converting: bool,
}

pub fn show_album(
    ui: &mut egui::Ui,
    state: &mut AlbumState,
    command_tx: &mpsc::UnboundedSender<AlbumCommand>,
    status: &mut String,
) {
    ui.horizontal(|ui| {
        if ui.button("➕ Add Images").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter(
                    "Images",
                    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
                )
                .pick_files()
            {
                let _ = command_tx.send(AlbumCommand::LoadImages { paths });
                *status = "Loading images...".to_string();
            }
        }
        ui.label("or drop image files anywhere in the window");
    });

    ui.add_space(5.0);

    egui::CollapsingHeader::new("📋 Document Metadata")
        .default_open(true)
        .show(ui, |ui| {
            show_metadata_fields(ui, &mut state.metadata);
        });

    ui.add_space(5.0);
    show_tiles(ui, state, status);
    ui.add_space(5.0);
    show_actions(ui, state, command_tx, status);
}

fn show_metadata_fields(ui: &mut egui::Ui, metadata: &mut DocumentMetadata) {
    egui::Grid::new("metadata_fields")
        .num_columns(2)
        .spacing([10.0, 4.0])
        .show(ui, |ui| {
            ui.label("Title:");
            ui.add(
                egui::TextEdit::singleline(&mut metadata.title).hint_text(pdf_album::DEFAULT_TITLE),
            );
            ui.end_row();

            ui.label("Author:");
            ui.text_edit_singleline(&mut metadata.author);
            ui.end_row();

            ui.label("Subject:");
            ui.text_edit_singleline(&mut metadata.subject);
            ui.end_row();

            ui.label("Keywords:");
            ui.text_edit_singleline(&mut metadata.keywords);
            ui.end_row();
        });
}

fn show_tiles(ui: &mut egui::Ui, state: &mut AlbumState, status: &mut String) {
    if state.tiles.is_empty() {
        ui.group(|ui| {
            ui.set_min_height(120.0);
            ui.centered_and_justified(|ui| {
                ui.label("No images selected yet");
            });
        });
        return;
    }

    ui.label("Drag tiles to reorder; pages follow the tile order.");

    let mut removed: Option<usize> = None;
    let mut dropped: Option<(SlotId, usize)> = None;

    let frame = egui::Frame::default().inner_margin(6.0);
    let (_, zone_payload) = ui.dnd_drop_zone::<SlotId, ()>(frame, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (position, tile) in state.tiles.iter().enumerate() {
                let id = egui::Id::new("album_tile").with(tile.slot.0);
                let mut remove_clicked = false;
                let response = ui
                    .dnd_drag_source(id, tile.slot, |ui| {
                        remove_clicked = show_tile_contents(ui, tile);
                    })
                    .response;
                if remove_clicked {
                    removed = Some(position);
                }

                if let (Some(pointer), Some(hovered)) = (
                    ui.input(|i| i.pointer.interact_pos()),
                    response.dnd_hover_payload::<SlotId>(),
                ) {
                    let rect = response.rect;
                    let stroke = egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE);
                    let insert_at = if *hovered == tile.slot {
                        position
                    } else if pointer.x < rect.center().x {
                        ui.painter().vline(rect.left(), rect.y_range(), stroke);
                        position
                    } else {
                        ui.painter().vline(rect.right(), rect.y_range(), stroke);
                        position + 1
                    };

                    if let Some(released) = response.dnd_release_payload::<SlotId>() {
                        dropped = Some((*released, insert_at));
                    }
                }
            }
        });
    });

    // A release over the zone background lands the tile at the end.
    if dropped.is_none() {
        if let Some(released) = zone_payload {
            dropped = Some((*released, state.tiles.len()));
        }
    }

    let mut order_changed = false;
    if let Some(position) = removed {
        state.tiles.remove(position);
        order_changed = true;
    } else if let Some((slot, insert_at)) = dropped {
        move_tile(&mut state.tiles, slot, insert_at);
        order_changed = true;
    }

    if order_changed {
        if let Err(e) = state.session.sync_order(&tile_order(&state.tiles)) {
            log::error!("Order out of sync: {e}");
            *status = format!("Error: {e}");
        }
    }
}

fn show_tile_contents(ui: &mut egui::Ui, tile: &ImageTile) -> bool {
    let mut remove_clicked = false;
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.set_width(130.0);
            match &tile.texture {
                Some(texture) => {
                    let size = texture.size_vec2();
                    let scale = (120.0 / size.x.max(size.y)).min(1.0);
                    ui.image((texture.id(), size * scale));
                }
                None => {
                    ui.label("🖼 (no preview)");
                }
            }
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&tile.name).small());
                if ui.small_button("✖").clicked() {
                    remove_clicked = true;
                }
            });
        });
    });
    remove_clicked
}

fn move_tile(tiles: &mut Vec<ImageTile>, slot: SlotId, insert_at: usize) {
    let Some(from) = tiles.iter().position(|tile| tile.slot == slot) else {
        return;
    };
    let tile = tiles.remove(from);
    let mut to = insert_at;
    if from < to {
        // after removal, positions past `from` shift left
        to -= 1;
    }
    let to = to.min(tiles.len());
    tiles.insert(to, tile);
}

fn show_actions(
    ui: &mut egui::Ui,
    state: &mut AlbumState,
    command_tx: &mpsc::UnboundedSender<AlbumCommand>,
    status: &mut String,
) {
    // At most one assembly run in flight: the trigger is disabled while
    // a run is active.
    let button = egui::Button::new("📄 Convert to PDF");
    if ui.add_enabled(!state.converting, button).clicked() {
        if state.session.order().is_empty() {
            *status = "No images selected. Add images first.".to_string();
        } else {
            state.converting = true;
            state.assembly = None;
            let _ = command_tx.send(AlbumCommand::Assemble {
                images: state.session.ordered_images(),
                metadata: state.metadata.clone(),
            });
            *status = "Converting...".to_string();
        }
    }

    let mut start_over = false;
    if let Some(assembly) = &state.assembly {
        ui.separator();
        ui.label(format!(
            "✅ {} page(s) ready for download",
            assembly.document.page_count()
        ));
        for skip in &assembly.skipped {
            ui.label(format!(
                "⚠ Skipped {} (unsupported format {})",
                skip.name,
                skip.media_type.mime()
            ));
        }

        ui.horizontal(|ui| {
            if ui.button("💾 Download").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PDF", &["pdf"])
                    .set_file_name(assembly.document.metadata.file_name())
                    .save_file()
                {
                    let _ = command_tx.send(AlbumCommand::Save {
                        document: assembly.document.clone(),
                        path,
                    });
                }
            }
            if ui.button("🔄 Start over").clicked() {
                start_over = true;
            }
        });
    }

    if start_over {
        state.session.reset();
        state.tiles.clear();
        state.metadata = DocumentMetadata::default();
        state.assembly = None;
        state.converting = false;
        status.clear();
    }
}
