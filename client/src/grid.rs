//! Contracts for the item grid and the item factory.
//!
//! The grid owns placement, the equip-slot table and item sprites; the panel
//! reads its item list during a render pass and never mutates it there.

use inventory_core::geometry::{FrameSize, ScreenPos};
use inventory_core::types::{EquippedSlot, GridSlot, InventoryItem, ItemRequest};

use crate::error::Result;
use crate::ui::Surface;

pub trait ItemGrid {
    type Item: InventoryItem;

    /// Places `items` in the carried-item grid.
    ///
    /// Items that fit stay placed even when a later one does not.
    ///
    /// # Returns
    /// * `Ok(count)` of placed items, or `PanelError::GridFull` describing how many fit.
    fn add(&mut self, items: Vec<Self::Item>) -> Result<usize>;

    /// Puts `item` into `slot`, returning whatever was equipped there before.
    fn change_equipped_slot(&mut self, slot: EquippedSlot, item: Self::Item) -> Option<Self::Item>;

    fn equipped(&self, slot: EquippedSlot) -> Option<&Self::Item>;

    /// Top-left screen pixel of a grid cell.
    fn slot_to_screen(&self, slot: GridSlot) -> ScreenPos;

    /// Carried items in placement order.
    fn items(&self) -> &[Self::Item];

    /// Sprite size for an item code, if the grid has a sprite for it.
    fn sprite_size(&self, item_code: &str) -> Option<FrameSize>;

    fn render(&mut self, target: &mut dyn Surface) -> std::result::Result<(), String>;
}

/// Builds items from code sequences.
pub trait ItemFactory {
    type Item: InventoryItem;

    fn new_item(&self, request: &ItemRequest) -> Result<Self::Item>;
}
