//! Data types module - item-facing types shared by the panel and its collaborators

mod equipped_slot;
mod inventory_record;
mod item;

// Re-export all types
pub use equipped_slot::{EquippedSlot, SlotMask};
pub use inventory_record::{GridLayout, InventoryRecord, LayoutBox};
pub use item::{GridSlot, InventoryItem, ItemRequest};
