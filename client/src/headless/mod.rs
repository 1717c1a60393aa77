//! In-memory stand-ins for the UI toolkit, the item grid and the item factory.
//!
//! The demo binary and the tests drive the panel through these; a real game
//! build plugs its own toolkit in behind the same traits.

mod grid;
mod items;
mod surface;
mod widgets;

pub use grid::SimpleItemGrid;
pub use items::{
    Affix, AffixKind, ItemTemplate, StubItem, StubItemFactory, AFFIX_TABLE, ITEM_TABLE,
};
pub use surface::{DrawCall, RecordingSurface};
pub use widgets::{
    inventory_panel_frames, ButtonHandle, HeadlessButton, HeadlessFrame, HeadlessSprite,
    HeadlessTooltip, HeadlessWidgets, FRAME_LEFT_KEY, FRAME_RIGHT_KEY,
};
