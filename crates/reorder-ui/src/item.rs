use std::collections::HashSet;
use std::fmt;

use reorder_core::{Error, Rect, Result};

/// Stable identity of an item across reorders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entry of the ordered sequence. `payload` is opaque to the engine;
/// `frame` is written by the layout side and read by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<T> {
    pub id: ItemId,
    pub payload: T,
    pub frame: Rect,
}

impl<T> Item<T> {
    pub fn new(id: u64, payload: T) -> Self {
        Self {
            id: ItemId(id),
            payload,
            frame: Rect::ZERO,
        }
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }
}

pub(crate) fn ensure_unique<T>(items: &[Item<T>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(Error::DuplicateItem(item.id.0));
        }
    }
    Ok(())
}

pub(crate) fn index_of<T>(items: &[Item<T>], id: ItemId) -> Option<usize> {
    items.iter().position(|it| it.id == id)
}
