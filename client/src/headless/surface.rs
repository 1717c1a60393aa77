use inventory_core::geometry::{FrameSize, ScreenPos};

use crate::ui::Surface;

/// One draw request captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Image {
        key: String,
        frame: u32,
        pos: ScreenPos,
        size: FrameSize,
    },
    Text {
        lines: Vec<String>,
        pos: ScreenPos,
    },
}

/// Surface that keeps every draw call of a frame instead of rasterizing it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Image draws whose key matches `key`, in draw order.
    pub fn images_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DrawCall> + 'a {
        self.calls
            .iter()
            .filter(move |call| matches!(call, DrawCall::Image { key: k, .. } if k == key))
    }

    /// All text draws as `(lines, position)` pairs.
    pub fn texts(&self) -> Vec<(&[String], ScreenPos)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { lines, pos } => Some((lines.as_slice(), *pos)),
                DrawCall::Image { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_image(
        &mut self,
        key: &str,
        frame: u32,
        pos: ScreenPos,
        size: FrameSize,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::Image {
            key: key.to_string(),
            frame,
            pos,
            size,
        });
        Ok(())
    }

    fn draw_text(&mut self, lines: &[String], pos: ScreenPos) -> Result<(), String> {
        self.calls.push(DrawCall::Text {
            lines: lines.to_vec(),
            pos,
        });
        Ok(())
    }
}
