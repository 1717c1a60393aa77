//! Item contract consumed by the inventory panel and its grid

use serde::{Deserialize, Serialize};

use crate::types::equipped_slot::SlotMask;

/// A cell in the carried-item grid, counted from the top-left cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridSlot {
    pub x: u32,
    pub y: u32,
}

impl GridSlot {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// What the panel and grid need to know about an item.
///
/// Item definitions and identification rules live elsewhere; this is only the
/// surface the inventory consumes.
pub trait InventoryItem {
    /// Top-left grid cell the item occupies.
    fn grid_slot(&self) -> GridSlot;

    fn set_grid_slot(&mut self, slot: GridSlot);

    /// Key into the grid's sprite-size table.
    fn item_code(&self) -> &str;

    /// Width and height in grid cells.
    fn footprint(&self) -> (u32, u32);

    /// Equipment slots the item may be worn in.
    fn placement(&self) -> SlotMask;

    /// Tooltip text, built on every call from the item's current state.
    fn description(&self) -> Vec<String>;

    /// Reveals the item's true properties.
    fn identify(&mut self);

    fn is_identified(&self) -> bool;
}

/// A request to build one item: a base item code followed by affix names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    codes: Vec<String>,
}

impl ItemRequest {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated request such as `"rin, Steel, of Shock"`.
    ///
    /// Empty entries are dropped, so `""` yields an empty request.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty()),
        )
    }

    pub fn base_code(&self) -> Option<&str> {
        self.codes.first().map(String::as_str)
    }

    pub fn affixes(&self) -> &[String] {
        self.codes.get(1..).unwrap_or(&[])
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
