//! Slot-order tracking.
//!
//! Each visual tile carries a stable [`SlotId`] equal to the original
//! selection index of its image. The logical order is never patched
//! incrementally: after any reorder the whole order is re-derived from
//! the current visual sequence, so it always matches what the user sees.

use crate::types::{AlbumError, Result};

/// Stable tag of a visual slot, assigned at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

/// A reorderable presentation surface. The core only ever asks for the
/// current visual sequence of slot ids; it never inspects presentation
/// internals.
pub trait Reorderable {
    fn current_order(&self) -> Vec<SlotId>;
}

impl Reorderable for Vec<SlotId> {
    fn current_order(&self) -> Vec<SlotId> {
        self.clone()
    }
}

/// Ordered selection indices matching the current slot arrangement.
///
/// Invariant: every index is in range and unique. The length equals the
/// number of filled slots, which may be less than the selection size
/// after tiles are removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotOrder(Vec<usize>);

impl SlotOrder {
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Re-derive the slot order from the current visual sequence.
///
/// Any out-of-range or duplicate slot id is a hard validation error:
/// a stale identifier means the presentation and the selection have
/// diverged, and silently dropping the entry would hide the bug.
pub fn recompute(visual_order: &[SlotId], selection_len: usize) -> Result<SlotOrder> {
    let mut seen = vec![false; selection_len];
    let mut indices = Vec::with_capacity(visual_order.len());

    for slot in visual_order {
        let index = slot.0;
        if index >= selection_len {
            return Err(AlbumError::InvalidSlot {
                slot: index,
                count: selection_len,
            });
        }
        if seen[index] {
            return Err(AlbumError::DuplicateSlot { slot: index });
        }
        seen[index] = true;
        indices.push(index);
    }

    Ok(SlotOrder(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(ids: &[usize]) -> Vec<SlotId> {
        ids.iter().copied().map(SlotId).collect()
    }

    #[test]
    fn test_identity_order() {
        let order = recompute(&slots(&[0, 1, 2]), 3).unwrap();
        assert_eq!(order, SlotOrder::identity(3));
        assert_eq!(order.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let visual = slots(&[2, 0, 1]);
        let first = recompute(&visual, 3).unwrap();
        let second = recompute(&visual, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_permutation_maps_order() {
        // Visual sequence [c, a, b] over a selection of three images.
        let order = recompute(&slots(&[2, 0, 1]), 3).unwrap();
        assert_eq!(order.indices(), &[2, 0, 1]);
    }

    #[test]
    fn test_fewer_slots_than_images_is_valid() {
        // A removed tile shrinks the order without renumbering slots.
        let order = recompute(&slots(&[3, 1]), 4).unwrap();
        assert_eq!(order.indices(), &[3, 1]);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_out_of_range_slot_is_rejected() {
        let err = recompute(&slots(&[0, 5]), 3).unwrap_err();
        assert!(matches!(err, AlbumError::InvalidSlot { slot: 5, count: 3 }));
    }

    #[test]
    fn test_duplicate_slot_is_rejected() {
        let err = recompute(&slots(&[1, 0, 1]), 3).unwrap_err();
        assert!(matches!(err, AlbumError::DuplicateSlot { slot: 1 }));
    }

    #[test]
    fn test_empty_visual_order() {
        let order = recompute(&[], 0).unwrap();
        assert!(order.is_empty());
    }
}
