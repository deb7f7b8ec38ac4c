//! Geometry bookkeeping: item frames and the two auto-scroll hot regions.
//!
//! The tracker only overwrites rectangles; it never reorders the sequence.
//! Everything starts as `Rect::ZERO`, which contains no point, so lookups
//! before the first layout pass fail closed.

use reorder_core::{EdgeInsets, Rect, Vec2};

use crate::item::{Item, ItemId, index_of};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HotRegions {
    pub top: Rect,
    pub bottom: Rect,
}

impl HotRegions {
    /// Strips hugging the viewport edges, extended outward over the
    /// safe-area insets.
    pub fn for_viewport(viewport: Rect, insets: EdgeInsets, strip: f32) -> Self {
        Self {
            top: Rect {
                x: viewport.x,
                y: viewport.y - insets.top,
                w: viewport.w,
                h: strip + insets.top,
            },
            bottom: Rect {
                x: viewport.x,
                y: viewport.max_y() - strip,
                w: viewport.w,
                h: strip + insets.bottom,
            },
        }
    }

    pub fn get(&self, edge: Edge) -> Rect {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Top wins if a degenerate layout makes the strips overlap.
    pub fn edge_at(&self, p: Vec2) -> Option<Edge> {
        if self.top.contains(p) {
            Some(Edge::Top)
        } else if self.bottom.contains(p) {
            Some(Edge::Bottom)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GeometryTracker {
    regions: HotRegions,
}

impl GeometryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> HotRegions {
        self.regions
    }

    pub fn set_region(&mut self, edge: Edge, frame: Rect) {
        match edge {
            Edge::Top => self.regions.top = frame,
            Edge::Bottom => self.regions.bottom = frame,
        }
    }

    pub fn set_regions(&mut self, regions: HotRegions) {
        self.regions = regions;
    }

    pub fn hot_edge_at(&self, p: Vec2) -> Option<Edge> {
        self.regions.edge_at(p)
    }

    /// Overwrite one item's frame. Returns `false` for unknown ids.
    pub fn set_item_frame<T>(&self, items: &mut [Item<T>], id: ItemId, frame: Rect) -> bool {
        match index_of(items, id) {
            Some(i) => {
                items[i].frame = frame;
                true
            }
            None => {
                log::warn!("frame update for unknown item {id}");
                false
            }
        }
    }

    pub fn frame_of<T>(&self, items: &[Item<T>], id: ItemId) -> Option<Rect> {
        index_of(items, id).map(|i| items[i].frame)
    }

    /// First item, in list order, whose frame contains `p`.
    pub fn item_at<T>(&self, items: &[Item<T>], p: Vec2) -> Option<usize> {
        items.iter().position(|it| it.frame.contains(p))
    }
}
