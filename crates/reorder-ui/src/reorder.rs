//! Neighbour-swap reordering.
//!
//! The dragged item trades places with whichever item's frame holds the
//! pointer. This is a swap, not an insert: dragging the first of five items
//! onto the fourth leaves the second and third where they were.

use reorder_core::Vec2;

use crate::item::{Item, ItemId, index_of};

/// Positions exchanged by one swap, as indices before the swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swap {
    pub dragged: ItemId,
    pub displaced: ItemId,
    pub from: usize,
    pub to: usize,
}

/// Indices `(dragged, target)` of the swap a pointer at `location` would
/// cause, if any. Ties resolve to the first containing frame in list order.
pub fn swap_target<T>(
    items: &[Item<T>],
    dragged: ItemId,
    location: Vec2,
) -> Option<(usize, usize)> {
    let current = index_of(items, dragged)?;
    let falling = items.iter().position(|it| it.frame.contains(location))?;
    (current != falling).then_some((current, falling))
}

/// Swap the dragged item with the item under `location`.
///
/// Frames belong to slots, not items: after the exchange each index keeps
/// the rectangle it had, so the dragged item immediately reports its new
/// slot's frame and a pointer that has not moved resolves to the dragged
/// item itself until the layout says otherwise.
pub fn check_and_swap<T>(items: &mut [Item<T>], dragged: ItemId, location: Vec2) -> Option<Swap> {
    let (from, to) = swap_target(items, dragged, location)?;
    let from_frame = items[from].frame;
    let to_frame = items[to].frame;
    items.swap(from, to);
    items[from].frame = from_frame;
    items[to].frame = to_frame;

    let swap = Swap {
        dragged,
        displaced: items[from].id,
        from,
        to,
    };
    log::trace!("swap {} <-> {} ({} -> {})", swap.dragged, swap.displaced, from, to);
    Some(swap)
}
