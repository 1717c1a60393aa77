//! Constants module - layout values and resource names for the inventory panel

// =============================================================================
// Panel border frames (frame indices inside the inventory panel sprite)
// =============================================================================

pub const FRAME_INVENTORY_TOP_LEFT: u32 = 4;
pub const FRAME_INVENTORY_TOP_RIGHT: u32 = 5;
pub const FRAME_INVENTORY_BOTTOM_LEFT: u32 = 6;
pub const FRAME_INVENTORY_BOTTOM_RIGHT: u32 = 7;

/// Gap between the top of the screen chrome and the first border row.
pub const FRAME_VERTICAL_OFFSET: i32 = 64;

/// Horizontal nudge applied to the panel origin before the border is tiled.
pub const FRAME_ORIGIN_X_NUDGE: i32 = 1;

// =============================================================================
// Close button
// =============================================================================

pub const INV_CLOSE_BUTTON_X: i32 = 419;
pub const INV_CLOSE_BUTTON_Y: i32 = 449;

// =============================================================================
// Resources
// =============================================================================

pub const INVENTORY_CHARACTER_PANEL: &str = "/data/global/ui/PANEL/invchar6.DC6";
pub const PALETTE_SKY: &str = "sky";
pub const PALETTE_STATIC: &str = "static";
pub const FONT_FORMAL_11: &str = "/data/local/FONT/LATIN/font16";

// =============================================================================
// Classic right-hand inventory layout (800x600)
// =============================================================================

pub const INVENTORY_PANEL_LEFT: i32 = 400;
pub const INVENTORY_PANEL_TOP: i32 = 0;
pub const INVENTORY_PANEL_RIGHT: i32 = 800;
pub const INVENTORY_PANEL_BOTTOM: i32 = 600;

pub const INVENTORY_GRID_LEFT: i32 = 417;
pub const INVENTORY_GRID_TOP: i32 = 315;
pub const INVENTORY_GRID_COLUMNS: u32 = 10;
pub const INVENTORY_GRID_ROWS: u32 = 4;

/// Width and height of one grid cell in pixels.
pub const INVENTORY_CELL_SIZE: u32 = 29;
