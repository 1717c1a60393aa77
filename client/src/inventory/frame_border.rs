//! Inventory border tiling.
//!
//! The border is four corner frames of the panel sprite laid out clockwise
//! from the top-left. Every corner is measured before anything is drawn, and
//! each move to the next corner uses the size of the corner just placed, so
//! corners of different sizes still meet edge to edge.

use inventory_core::constants::{
    FRAME_INVENTORY_BOTTOM_LEFT, FRAME_INVENTORY_BOTTOM_RIGHT, FRAME_INVENTORY_TOP_LEFT,
    FRAME_INVENTORY_TOP_RIGHT, FRAME_ORIGIN_X_NUDGE,
};
use inventory_core::geometry::{FrameSize, ScreenPos, ScreenRect};

use crate::error::{PanelError, Result};
use crate::ui::{Sprite, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl BorderCorner {
    /// Frame index of this corner inside the inventory panel sprite.
    pub fn frame(&self) -> u32 {
        match self {
            BorderCorner::TopLeft => FRAME_INVENTORY_TOP_LEFT,
            BorderCorner::TopRight => FRAME_INVENTORY_TOP_RIGHT,
            BorderCorner::BottomRight => FRAME_INVENTORY_BOTTOM_RIGHT,
            BorderCorner::BottomLeft => FRAME_INVENTORY_BOTTOM_LEFT,
        }
    }
}

/// How the cursor moves after a corner has been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerAdvance {
    /// Step right by the placed corner's width.
    Right,
    /// Step down by the placed corner's height.
    Down,
    /// Jump back to the starting column.
    ResetColumn,
    Stay,
}

pub type BorderStep = (BorderCorner, CornerAdvance);

pub const INVENTORY_BORDER: [BorderStep; 4] = [
    (BorderCorner::TopLeft, CornerAdvance::Right),
    (BorderCorner::TopRight, CornerAdvance::Down),
    (BorderCorner::BottomRight, CornerAdvance::ResetColumn),
    (BorderCorner::BottomLeft, CornerAdvance::Stay),
];

/// Where one corner lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerPlacement {
    pub corner: BorderCorner,
    pub top_left: ScreenPos,
    pub size: FrameSize,
}

impl CornerPlacement {
    /// Position handed to the sprite, which is anchored at its bottom-left pixel.
    pub fn anchor(&self) -> ScreenPos {
        self.top_left.offset(0, self.size.height_i32())
    }

    pub fn rect(&self) -> ScreenRect {
        ScreenRect::from_pos_size(self.top_left, self.size)
    }
}

/// Top-left pixel of the first corner for a panel anchored at `origin`.
pub fn border_start(origin: ScreenPos, vertical_offset: i32) -> ScreenPos {
    origin.offset(FRAME_ORIGIN_X_NUDGE, vertical_offset)
}

/// Computes where each corner of `steps` goes, starting at `start`.
///
/// `measure` is asked for every corner in order; the first error stops the
/// layout and is returned as is.
pub fn layout_border<E>(
    steps: &[BorderStep],
    start: ScreenPos,
    mut measure: impl FnMut(BorderCorner) -> std::result::Result<FrameSize, E>,
) -> std::result::Result<Vec<CornerPlacement>, E> {
    let mut placements = Vec::with_capacity(steps.len());
    let mut cursor = start;

    for &(corner, advance) in steps {
        let size = measure(corner)?;
        placements.push(CornerPlacement {
            corner,
            top_left: cursor,
            size,
        });

        match advance {
            CornerAdvance::Right => cursor.x += size.width_i32(),
            CornerAdvance::Down => cursor.y += size.height_i32(),
            CornerAdvance::ResetColumn => cursor.x = start.x,
            CornerAdvance::Stay => {}
        }
    }

    Ok(placements)
}

fn measure_corner(sprite: &mut dyn Sprite, corner: BorderCorner) -> Result<FrameSize> {
    let frame = corner.frame();
    sprite
        .set_current_frame(frame)
        .map_err(|reason| PanelError::FrameSelect { frame, reason })?;
    sprite
        .current_frame_size()
        .map_err(|reason| PanelError::FrameSize { frame, reason })
}

/// Measures and draws the inventory border around `origin`.
///
/// Nothing is drawn unless all corners could be measured. A draw call that
/// fails after that stops the loop, so corners drawn before it stay on the
/// surface and the rest of the border is skipped.
pub fn compose_border(
    sprite: &mut dyn Sprite,
    target: &mut dyn Surface,
    origin: ScreenPos,
    vertical_offset: i32,
) -> Result<Vec<CornerPlacement>> {
    let start = border_start(origin, vertical_offset);
    let placements = layout_border(&INVENTORY_BORDER, start, |corner| {
        measure_corner(&mut *sprite, corner)
    })?;

    for placement in &placements {
        let frame = placement.corner.frame();
        sprite
            .set_current_frame(frame)
            .map_err(|reason| PanelError::FrameSelect { frame, reason })?;

        let anchor = placement.anchor();
        sprite.set_position(anchor.x, anchor.y);
        sprite
            .render(target)
            .map_err(|reason| PanelError::Render {
                what: "inventory border",
                reason,
            })?;
    }

    Ok(placements)
}
