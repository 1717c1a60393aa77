//! First-fit item grid used by the demo and tests.

use std::collections::{BTreeMap, HashMap};

use inventory_core::geometry::{FrameSize, ScreenPos, ScreenRect};
use inventory_core::types::{
    EquippedSlot, GridLayout, GridSlot, InventoryItem, InventoryRecord, LayoutBox,
};

use crate::error::{PanelError, Result};
use crate::grid::ItemGrid;
use crate::headless::items::StubItem;
use crate::ui::Surface;

pub struct SimpleItemGrid<I: InventoryItem = StubItem> {
    layout: GridLayout,
    slot_boxes: BTreeMap<EquippedSlot, LayoutBox>,
    items: Vec<I>,
    equipped: BTreeMap<EquippedSlot, I>,
    sprite_sizes: HashMap<String, FrameSize>,
}

impl<I: InventoryItem> SimpleItemGrid<I> {
    pub fn new(record: &InventoryRecord) -> Self {
        Self {
            layout: record.grid,
            slot_boxes: record.slots.clone(),
            items: Vec::new(),
            equipped: BTreeMap::new(),
            sprite_sizes: HashMap::new(),
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Overrides the sprite size used for `item_code`.
    pub fn register_sprite(&mut self, item_code: &str, size: FrameSize) {
        self.sprite_sizes.insert(item_code.to_string(), size);
    }

    pub fn unregister_sprite(&mut self, item_code: &str) {
        self.sprite_sizes.remove(item_code);
    }

    /// Places `item` at `slot`, refusing cells that are taken or off the grid.
    pub fn insert_at(&mut self, mut item: I, slot: GridSlot) -> Result<()> {
        if !self.fits_at(item.footprint(), slot) {
            return Err(PanelError::CellUnavailable {
                x: slot.x,
                y: slot.y,
            });
        }
        item.set_grid_slot(slot);
        self.remember_sprite(&item);
        self.items.push(item);
        Ok(())
    }

    fn remember_sprite(&mut self, item: &I) {
        let (w, h) = item.footprint();
        let size = FrameSize::new(w * self.layout.cell_width, h * self.layout.cell_height);
        self.sprite_sizes
            .entry(item.item_code().to_string())
            .or_insert(size);
    }

    /// Cell-space rectangle an item of `footprint` would cover at `slot`.
    fn cells(footprint: (u32, u32), slot: GridSlot) -> ScreenRect {
        ScreenRect::new(slot.x as i32, slot.y as i32, footprint.0, footprint.1)
    }

    fn fits_at(&self, footprint: (u32, u32), slot: GridSlot) -> bool {
        if slot.x + footprint.0 > self.layout.columns || slot.y + footprint.1 > self.layout.rows {
            return false;
        }
        let wanted = Self::cells(footprint, slot);
        !self
            .items
            .iter()
            .any(|item| Self::cells(item.footprint(), item.grid_slot()).overlaps(&wanted))
    }

    /// First free slot scanning columns left to right, each column top to bottom.
    fn find_free_slot(&self, footprint: (u32, u32)) -> Option<GridSlot> {
        (0..self.layout.columns)
            .flat_map(|x| (0..self.layout.rows).map(move |y| GridSlot::new(x, y)))
            .find(|&slot| self.fits_at(footprint, slot))
    }
}

impl<I: InventoryItem> ItemGrid for SimpleItemGrid<I> {
    type Item = I;

    fn add(&mut self, items: Vec<I>) -> Result<usize> {
        let requested = items.len();
        let mut placed = 0;

        for mut item in items {
            let Some(slot) = self.find_free_slot(item.footprint()) else {
                log::warn!("No room in inventory grid for item '{}'", item.item_code());
                continue;
            };
            item.set_grid_slot(slot);
            self.remember_sprite(&item);
            self.items.push(item);
            placed += 1;
        }

        if placed < requested {
            return Err(PanelError::GridFull { placed, requested });
        }
        Ok(placed)
    }

    fn change_equipped_slot(&mut self, slot: EquippedSlot, item: I) -> Option<I> {
        if !item.placement().contains(slot.mask()) {
            log::warn!(
                "Item '{}' is not meant for the {} slot",
                item.item_code(),
                slot.name()
            );
        }
        self.remember_sprite(&item);
        self.equipped.insert(slot, item)
    }

    fn equipped(&self, slot: EquippedSlot) -> Option<&I> {
        self.equipped.get(&slot)
    }

    fn slot_to_screen(&self, slot: GridSlot) -> ScreenPos {
        self.layout.origin().offset(
            (slot.x * self.layout.cell_width) as i32,
            (slot.y * self.layout.cell_height) as i32,
        )
    }

    fn items(&self) -> &[I] {
        &self.items
    }

    fn sprite_size(&self, item_code: &str) -> Option<FrameSize> {
        self.sprite_sizes.get(item_code).copied()
    }

    fn render(&mut self, target: &mut dyn Surface) -> std::result::Result<(), String> {
        for (slot, item) in &self.equipped {
            let Some(slot_box) = self.slot_boxes.get(slot) else {
                continue;
            };
            let Some(size) = self.sprite_size(item.item_code()) else {
                continue;
            };
            let pos = ScreenPos::new(slot_box.left, slot_box.top);
            target.draw_image(item.item_code(), 0, pos, size)?;
        }

        for item in &self.items {
            let Some(size) = self.sprite_size(item.item_code()) else {
                continue;
            };
            let pos = self.slot_to_screen(item.grid_slot());
            target.draw_image(item.item_code(), 0, pos, size)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ItemFactory;
    use crate::headless::{RecordingSurface, StubItemFactory};
    use inventory_core::types::ItemRequest;

    fn item(code: &str) -> StubItem {
        StubItemFactory::new()
            .new_item(&ItemRequest::parse(code))
            .unwrap()
    }

    #[test]
    fn add_fills_columns_top_to_bottom() {
        let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());
        let placed = grid.add(vec![item("jav"), item("rin"), item("buc")]).unwrap();

        assert_eq!(placed, 3);
        let slots: Vec<_> = grid.items().iter().map(|i| i.grid_slot()).collect();
        assert_eq!(
            slots,
            [GridSlot::new(0, 0), GridSlot::new(0, 3), GridSlot::new(1, 0)]
        );
    }

    #[test]
    fn sprite_size_follows_footprint_and_cell_size() {
        let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());
        grid.add(vec![item("kit")]).unwrap();

        assert_eq!(grid.sprite_size("kit"), Some(FrameSize::new(58, 87)));
        assert_eq!(grid.sprite_size("amu"), None);
    }

    #[test]
    fn slot_to_screen_uses_grid_origin_and_cells() {
        let grid: SimpleItemGrid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());
        assert_eq!(grid.slot_to_screen(GridSlot::new(0, 0)), ScreenPos::new(417, 315));
        assert_eq!(grid.slot_to_screen(GridSlot::new(3, 2)), ScreenPos::new(504, 373));
    }

    #[test]
    fn add_reports_partial_placement_when_grid_fills_up() {
        let mut record = InventoryRecord::default_right_panel();
        record.grid.columns = 2;
        record.grid.rows = 3;
        let mut grid = SimpleItemGrid::new(&record);

        let result = grid.add(vec![item("kit"), item("rin"), item("jav")]);

        assert_eq!(
            result,
            Err(PanelError::GridFull {
                placed: 1,
                requested: 3
            })
        );
        assert_eq!(grid.items().len(), 1);
    }

    #[test]
    fn insert_at_refuses_occupied_and_out_of_bounds_cells() {
        let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());
        grid.insert_at(item("buc"), GridSlot::new(0, 0)).unwrap();

        assert_eq!(
            grid.insert_at(item("rin"), GridSlot::new(1, 1)),
            Err(PanelError::CellUnavailable { x: 1, y: 1 })
        );
        assert_eq!(
            grid.insert_at(item("jav"), GridSlot::new(9, 2)),
            Err(PanelError::CellUnavailable { x: 9, y: 2 })
        );
        assert!(grid.insert_at(item("rin"), GridSlot::new(2, 0)).is_ok());
    }

    #[test]
    fn equipping_returns_the_previous_item() {
        let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());

        assert!(grid
            .change_equipped_slot(EquippedSlot::LeftHand, item("rin"))
            .is_none());
        let previous = grid.change_equipped_slot(EquippedSlot::LeftHand, item("amu"));

        assert_eq!(previous.map(|i| i.name()), Some("Ring"));
        assert_eq!(
            grid.equipped(EquippedSlot::LeftHand).map(|i| i.name()),
            Some("Amulet")
        );
    }

    #[test]
    fn render_draws_equipped_then_carried_items() {
        let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());
        grid.change_equipped_slot(EquippedSlot::Head, item("crn"));
        grid.add(vec![item("rin")]).unwrap();

        let mut surface = RecordingSurface::new();
        grid.render(&mut surface).unwrap();

        let keys: Vec<_> = surface
            .calls()
            .iter()
            .map(|call| match call {
                crate::headless::DrawCall::Image { key, pos, .. } => (key.clone(), *pos),
                other => panic!("unexpected draw call {other:?}"),
            })
            .collect();
        assert_eq!(
            keys,
            [
                ("crn".to_string(), ScreenPos::new(533, 64)),
                ("rin".to_string(), ScreenPos::new(417, 315)),
            ]
        );
    }
}
