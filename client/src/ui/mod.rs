//! Widget primitives the inventory panel draws with.
//!
//! Asset loading and the actual pixel pushing belong to the UI toolkit; the
//! panel only talks to these traits. Primitive failures are reported as
//! plain strings, the same way the SDL canvas reports them.

use inventory_core::geometry::{FrameSize, ScreenPos};

/// Render target handed down the draw chain once per frame.
pub trait Surface {
    fn draw_image(
        &mut self,
        key: &str,
        frame: u32,
        pos: ScreenPos,
        size: FrameSize,
    ) -> Result<(), String>;

    fn draw_text(&mut self, lines: &[String], pos: ScreenPos) -> Result<(), String>;
}

/// A multi-frame image positioned by its bottom-left pixel.
pub trait Sprite {
    fn set_current_frame(&mut self, frame: u32) -> Result<(), String>;

    fn current_frame(&self) -> u32;

    fn current_frame_size(&self) -> Result<FrameSize, String>;

    fn set_position(&mut self, x: i32, y: i32);

    fn render(&self, target: &mut dyn Surface) -> Result<(), String>;
}

/// Screen side a [`UiFrame`] hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSide {
    Left,
    Right,
}

/// Generic panel chrome drawn underneath the inventory border.
pub trait UiFrame {
    fn render(&self, target: &mut dyn Surface) -> Result<(), String>;
}

pub trait Tooltip {
    fn set_text_lines(&mut self, lines: Vec<String>);

    fn set_position(&mut self, x: i32, y: i32);

    fn render(&self, target: &mut dyn Surface) -> Result<(), String>;
}

/// Button-like affordance. Activation is reported through the registered callback.
pub trait Button {
    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_position(&mut self, x: i32, y: i32);

    fn on_activated(&mut self, callback: Box<dyn FnMut()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipXAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipYAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipStyle {
    pub font: &'static str,
    pub palette: &'static str,
    pub x_align: TooltipXAlign,
    pub y_align: TooltipYAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    SquareClose,
}

/// Creates the widgets a panel owns.
pub trait WidgetFactory {
    fn new_frame(&mut self, side: FrameSide) -> Result<Box<dyn UiFrame>, String>;

    fn new_sprite(&mut self, path: &str, palette: &str) -> Result<Box<dyn Sprite>, String>;

    fn new_button(&mut self, kind: ButtonKind, label: &str) -> Result<Box<dyn Button>, String>;

    fn new_tooltip(&mut self, style: TooltipStyle) -> Result<Box<dyn Tooltip>, String>;
}
