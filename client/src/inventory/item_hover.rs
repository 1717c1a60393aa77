//! Pointer hit-testing over carried items and tooltip anchoring.
//!
//! Items are tested in the grid's list order and the first box that strictly
//! contains the pointer wins. Boxes are not sorted by depth, so if two item
//! boxes ever overlap, the one earlier in the list is reported.

use inventory_core::geometry::{ScreenPos, ScreenRect};
use inventory_core::types::InventoryItem;

use crate::grid::ItemGrid;

/// The item under the pointer during one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverHit {
    /// Index into the grid's item list.
    pub index: usize,
    /// Screen position of the item's grid slot.
    pub item_screen: ScreenPos,
}

/// Screen box covered by the item at `index`, or `None` when the grid has no
/// sprite for its code.
pub fn item_bounds<G: ItemGrid>(grid: &G, index: usize) -> Option<ScreenRect> {
    let item = grid.items().get(index)?;
    let size = grid.sprite_size(item.item_code())?;
    let pos = grid.slot_to_screen(item.grid_slot());
    Some(ScreenRect::from_pos_size(pos, size))
}

/// Returns the first carried item whose box strictly contains `pointer`.
pub fn find_hovered_item<G: ItemGrid>(grid: &G, pointer: ScreenPos) -> Option<HoverHit> {
    for (index, item) in grid.items().iter().enumerate() {
        let Some(bounds) = item_bounds(grid, index) else {
            log::trace!("No sprite for item '{}', skipping hover test", item.item_code());
            continue;
        };

        if bounds.contains_exclusive(pointer) {
            return Some(HoverHit {
                index,
                item_screen: ScreenPos::new(bounds.x, bounds.y),
            });
        }
    }

    None
}

/// Where an item tooltip goes: the pointer column from when the hover began,
/// on the row of the item's slot.
pub fn tooltip_position(anchor: ScreenPos, item_screen: ScreenPos) -> ScreenPos {
    ScreenPos::new(anchor.x, item_screen.y)
}

/// Remembers whether the previous scan hit an item and where that hover began.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    anchor: ScreenPos,
    hovering: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in the result of one scan.
    ///
    /// The anchor is only captured on a transition from not hovering to
    /// hovering; moving between items without an empty scan in between keeps
    /// the old anchor.
    ///
    /// # Returns
    /// * `Some(anchor)` when the scan hit an item, `None` otherwise.
    pub fn record(&mut self, hit: bool, pointer: ScreenPos) -> Option<ScreenPos> {
        if hit && !self.hovering {
            log::trace!("Hover started at ({}, {})", pointer.x, pointer.y);
            self.anchor = pointer;
        } else if !hit && self.hovering {
            log::trace!("Hover ended");
        }

        self.hovering = hit;
        hit.then_some(self.anchor)
    }

    pub fn anchor(&self) -> ScreenPos {
        self.anchor
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::geometry::FrameSize;
    use inventory_core::types::{GridSlot, InventoryRecord, ItemRequest};

    use crate::grid::ItemFactory;
    use crate::headless::{SimpleItemGrid, StubItemFactory};

    /// Two 1x1 rings at (0,0) and (2,0) of the classic grid (cells of 29px at 417,315).
    fn two_ring_grid() -> SimpleItemGrid {
        let factory = StubItemFactory::new();
        let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());
        for x in [0, 2] {
            let ring = factory.new_item(&ItemRequest::parse("rin")).unwrap();
            grid.insert_at(ring, GridSlot::new(x, 0)).unwrap();
        }
        grid
    }

    #[test]
    fn pointer_inside_second_item_reports_its_index() {
        let grid = two_ring_grid();
        let hit = find_hovered_item(&grid, ScreenPos::new(417 + 58 + 10, 315 + 10)).unwrap();

        assert_eq!(hit.index, 1);
        assert_eq!(hit.item_screen, ScreenPos::new(475, 315));
    }

    #[test]
    fn pointer_on_item_edge_is_not_a_hit() {
        let grid = two_ring_grid();

        assert_eq!(find_hovered_item(&grid, ScreenPos::new(417, 320)), None);
        assert_eq!(find_hovered_item(&grid, ScreenPos::new(446, 320)), None);
        assert_eq!(find_hovered_item(&grid, ScreenPos::new(430, 315)), None);
        assert_eq!(find_hovered_item(&grid, ScreenPos::new(430, 344)), None);
        assert!(find_hovered_item(&grid, ScreenPos::new(418, 316)).is_some());
    }

    #[test]
    fn pointer_between_items_hits_nothing() {
        let grid = two_ring_grid();
        assert_eq!(find_hovered_item(&grid, ScreenPos::new(460, 330)), None);
    }

    #[test]
    fn overlapping_boxes_resolve_to_list_order() {
        let mut grid = two_ring_grid();
        // Stretch ring sprites so the two boxes overlap around x=480.
        grid.register_sprite("rin", FrameSize::new(80, 29));

        let hit = find_hovered_item(&grid, ScreenPos::new(480, 330)).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn items_without_sprites_are_skipped() {
        let mut grid = two_ring_grid();
        grid.unregister_sprite("rin");
        assert_eq!(find_hovered_item(&grid, ScreenPos::new(430, 330)), None);
    }

    #[test]
    fn tracker_captures_anchor_only_when_hover_starts() {
        let mut tracker = HoverTracker::new();

        assert_eq!(tracker.record(true, ScreenPos::new(50, 60)), Some(ScreenPos::new(50, 60)));
        assert_eq!(tracker.record(true, ScreenPos::new(55, 62)), Some(ScreenPos::new(50, 60)));
        assert!(tracker.is_hovering());

        assert_eq!(tracker.record(false, ScreenPos::new(10, 10)), None);
        assert!(!tracker.is_hovering());
        // The stale anchor is kept until the next hover starts.
        assert_eq!(tracker.anchor(), ScreenPos::new(50, 60));

        assert_eq!(tracker.record(true, ScreenPos::new(70, 80)), Some(ScreenPos::new(70, 80)));
    }

    #[test]
    fn tooltip_takes_anchor_column_and_item_row() {
        let pos = tooltip_position(ScreenPos::new(50, 60), ScreenPos::new(40, 315));
        assert_eq!(pos, ScreenPos::new(50, 315));
    }
}
