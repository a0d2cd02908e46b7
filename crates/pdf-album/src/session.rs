//! One conversion session: the selected images and their slot order.
//!
//! Owned by a single controller (GUI app or CLI run); the assembler only
//! ever reads from it.

use crate::order::{self, Reorderable, SlotOrder};
use crate::types::{Result, SelectedImage};

#[derive(Debug, Default)]
pub struct AlbumSession {
    images: Vec<SelectedImage>,
    order: SlotOrder,
}

impl AlbumSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new selection. This fully replaces the previous one:
    /// separate selection actions never append. The order starts as
    /// the identity.
    pub fn replace_selection(&mut self, images: Vec<SelectedImage>) {
        self.order = SlotOrder::identity(images.len());
        self.images = images;
    }

    pub fn images(&self) -> &[SelectedImage] {
        &self.images
    }

    pub fn order(&self) -> &SlotOrder {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Re-derive the slot order from a reorderable surface. Must be
    /// called after the initial render and after every reorder or
    /// removal event.
    pub fn sync_order(&mut self, surface: &(impl Reorderable + ?Sized)) -> Result<()> {
        self.order = order::recompute(&surface.current_order(), self.images.len())?;
        Ok(())
    }

    /// The selection in current slot order, cloned for handing to the
    /// assembler.
    pub fn ordered_images(&self) -> Vec<SelectedImage> {
        self.order
            .indices()
            .iter()
            .map(|&index| self.images[index].clone())
            .collect()
    }

    /// Discard all state, returning to the initial empty configuration.
    pub fn reset(&mut self) {
        self.images.clear();
        self.order = SlotOrder::default();
    }
}
