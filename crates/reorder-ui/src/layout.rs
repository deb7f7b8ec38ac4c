//! Slot layout for the list/grid toggle.
//!
//! Layout depends only on slot index, never on which item sits in a slot,
//! so the slots are computed once per (mode, width, count) and reused across
//! swaps and scrolls. Frames are in content coordinates; the list harness
//! shifts them into screen space.

use reorder_core::{Error, Rect, Result};
use taffy::prelude::{auto, length};
use taffy::style::{AvailableSpace, Display, FlexDirection, FlexWrap, Style};
use taffy::TaffyTree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    #[default]
    List,
    Grid { columns: usize },
}

impl LayoutMode {
    pub fn columns(&self) -> usize {
        match self {
            LayoutMode::List => 1,
            LayoutMode::Grid { columns } => *columns,
        }
    }

    /// List ⇄ four-column grid.
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::List => LayoutMode::Grid { columns: 4 },
            LayoutMode::Grid { .. } => LayoutMode::List,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub padding: f32,
    pub spacing: f32,
    pub row_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 25.0,
            spacing: 20.0,
            row_height: 60.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotLayout {
    pub mode: LayoutMode,
    pub width: f32,
    pub slots: Vec<Rect>,
    pub content_height: f32,
}

impl SlotLayout {
    pub fn compute(
        config: &LayoutConfig,
        mode: LayoutMode,
        width: f32,
        count: usize,
    ) -> Result<Self> {
        let columns = mode.columns();
        if columns == 0 {
            return Err(Error::invalid_config("grid needs at least one column"));
        }

        let inner = (width - 2.0 * config.padding).max(0.0);
        let gaps = config.spacing * (columns - 1) as f32;
        // Whole pixels so a full row never wraps on rounding error.
        let cell_w = ((inner - gaps) / columns as f32).floor().max(0.0);

        let mut t: TaffyTree<()> = TaffyTree::new();
        t.disable_rounding();

        let cell = Style {
            size: taffy::geometry::Size {
                width: length(cell_w),
                height: length(config.row_height),
            },
            flex_shrink: 0.0,
            ..Default::default()
        };
        let leaves = (0..count)
            .map(|_| t.new_leaf(cell.clone()))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(layout_err)?;

        let root = t
            .new_with_children(
                Style {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    gap: taffy::geometry::Size {
                        width: length(config.spacing),
                        height: length(config.spacing),
                    },
                    padding: taffy::geometry::Rect {
                        left: length(config.padding),
                        right: length(config.padding),
                        top: length(config.padding),
                        bottom: length(config.padding),
                    },
                    size: taffy::geometry::Size {
                        width: length(width),
                        height: auto(),
                    },
                    ..Default::default()
                },
                &leaves,
            )
            .map_err(layout_err)?;

        t.compute_layout(
            root,
            taffy::geometry::Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::MaxContent,
            },
        )
        .map_err(layout_err)?;

        let mut slots = Vec::with_capacity(count);
        for leaf in leaves {
            let l = t.layout(leaf).map_err(layout_err)?;
            slots.push(Rect {
                x: l.location.x,
                y: l.location.y,
                w: l.size.width,
                h: l.size.height,
            });
        }
        let content_height = t.layout(root).map_err(layout_err)?.size.height;

        log::debug!(
            "laid out {count} slots ({mode:?}, width {width}) -> content height {content_height}"
        );
        Ok(Self {
            mode,
            width,
            slots,
            content_height,
        })
    }

    /// Slot frame shifted into screen space.
    pub fn screen_frame(&self, index: usize, viewport: Rect, scroll_offset: f32) -> Option<Rect> {
        self.slots
            .get(index)
            .map(|r| r.translate(reorder_core::Vec2::new(viewport.x, viewport.y - scroll_offset)))
    }
}

fn layout_err(e: taffy::TaffyError) -> Error {
    Error::Layout(e.to_string())
}
