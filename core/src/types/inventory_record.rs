//! Inventory layout record (where the panel, grid and equip slots sit on screen)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    INVENTORY_CELL_SIZE, INVENTORY_GRID_COLUMNS, INVENTORY_GRID_LEFT, INVENTORY_GRID_ROWS,
    INVENTORY_GRID_TOP, INVENTORY_PANEL_BOTTOM, INVENTORY_PANEL_LEFT, INVENTORY_PANEL_RIGHT,
    INVENTORY_PANEL_TOP,
};
use crate::geometry::{ScreenPos, ScreenRect};
use crate::types::equipped_slot::EquippedSlot;

/// Edges of a layout box in screen pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl LayoutBox {
    pub fn to_rect(&self) -> ScreenRect {
        ScreenRect::new(
            self.left,
            self.top,
            (self.right - self.left).max(0) as u32,
            (self.bottom - self.top).max(0) as u32,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub left: i32,
    pub top: i32,
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridLayout {
    pub fn origin(&self) -> ScreenPos {
        ScreenPos::new(self.left, self.top)
    }

    pub fn capacity(&self) -> u32 {
        self.columns * self.rows
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub panel: LayoutBox,
    pub grid: GridLayout,
    #[serde(default)]
    pub slots: BTreeMap<EquippedSlot, LayoutBox>,
}

impl InventoryRecord {
    /// Screen anchor for the panel border.
    ///
    /// Only the left edge of the panel box is used: expansion-era records shift
    /// every panel down by 60 pixels, and the border's vertical offset already
    /// places it below the top chrome, so the anchor row is always 0.
    pub fn origin(&self) -> ScreenPos {
        ScreenPos::new(self.panel.left, 0)
    }

    /// The classic right-hand inventory of an 800x600 screen.
    pub fn default_right_panel() -> Self {
        let slot = |left: i32, top: i32, width: i32, height: i32| LayoutBox {
            left,
            top,
            right: left + width,
            bottom: top + height,
        };

        let slots = BTreeMap::from([
            (EquippedSlot::Head, slot(533, 64, 58, 58)),
            (EquippedSlot::Neck, slot(605, 84, 29, 29)),
            (EquippedSlot::Torso, slot(533, 146, 58, 87)),
            (EquippedSlot::RightArm, slot(417, 108, 58, 116)),
            (EquippedSlot::LeftArm, slot(649, 108, 58, 116)),
            (EquippedSlot::RightHand, slot(490, 242, 29, 29)),
            (EquippedSlot::Belt, slot(533, 242, 58, 29)),
            (EquippedSlot::LeftHand, slot(605, 242, 29, 29)),
            (EquippedSlot::Gloves, slot(417, 242, 58, 58)),
            (EquippedSlot::Legs, slot(649, 242, 58, 58)),
        ]);

        Self {
            panel: LayoutBox {
                left: INVENTORY_PANEL_LEFT,
                top: INVENTORY_PANEL_TOP,
                right: INVENTORY_PANEL_RIGHT,
                bottom: INVENTORY_PANEL_BOTTOM,
            },
            grid: GridLayout {
                left: INVENTORY_GRID_LEFT,
                top: INVENTORY_GRID_TOP,
                columns: INVENTORY_GRID_COLUMNS,
                rows: INVENTORY_GRID_ROWS,
                cell_width: INVENTORY_CELL_SIZE,
                cell_height: INVENTORY_CELL_SIZE,
            },
            slots,
        }
    }
}
