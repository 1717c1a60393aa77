//! In-memory widgets that draw onto any [`Surface`].

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use inventory_core::constants::{
    FRAME_INVENTORY_BOTTOM_LEFT, FRAME_INVENTORY_BOTTOM_RIGHT, FRAME_INVENTORY_TOP_LEFT,
    FRAME_INVENTORY_TOP_RIGHT,
};
use inventory_core::geometry::{FrameSize, ScreenPos};

use crate::ui::{
    Button, ButtonKind, FrameSide, Sprite, Surface, Tooltip, TooltipStyle, UiFrame, WidgetFactory,
};

pub const FRAME_RIGHT_KEY: &str = "frame_right";
pub const FRAME_LEFT_KEY: &str = "frame_left";

/// Corner sizes of the classic inventory panel sprite.
pub fn inventory_panel_frames() -> BTreeMap<u32, FrameSize> {
    BTreeMap::from([
        (FRAME_INVENTORY_TOP_LEFT, FrameSize::new(256, 256)),
        (FRAME_INVENTORY_TOP_RIGHT, FrameSize::new(144, 256)),
        (FRAME_INVENTORY_BOTTOM_LEFT, FrameSize::new(256, 176)),
        (FRAME_INVENTORY_BOTTOM_RIGHT, FrameSize::new(144, 176)),
    ])
}

pub struct HeadlessSprite {
    key: String,
    frames: BTreeMap<u32, FrameSize>,
    /// Frames that select fine but cannot report a size.
    unmeasurable: BTreeSet<u32>,
    current: u32,
    position: ScreenPos,
}

impl HeadlessSprite {
    pub fn new(key: impl Into<String>, frames: BTreeMap<u32, FrameSize>) -> Self {
        let current = frames.keys().next().copied().unwrap_or(0);
        Self {
            key: key.into(),
            frames,
            unmeasurable: BTreeSet::new(),
            current,
            position: ScreenPos::default(),
        }
    }

    pub fn with_unmeasurable_frame(mut self, frame: u32) -> Self {
        self.unmeasurable.insert(frame);
        self
    }
}

impl Sprite for HeadlessSprite {
    fn set_current_frame(&mut self, frame: u32) -> Result<(), String> {
        if !self.frames.contains_key(&frame) {
            return Err(format!(
                "frame {frame} out of range for sprite {} ({} frames)",
                self.key,
                self.frames.len()
            ));
        }
        self.current = frame;
        Ok(())
    }

    fn current_frame(&self) -> u32 {
        self.current
    }

    fn current_frame_size(&self) -> Result<FrameSize, String> {
        if self.unmeasurable.contains(&self.current) {
            return Err(format!("frame {} of {} has no size", self.current, self.key));
        }
        self.frames
            .get(&self.current)
            .copied()
            .ok_or_else(|| format!("sprite {} has no frame {}", self.key, self.current))
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = ScreenPos::new(x, y);
    }

    fn render(&self, target: &mut dyn Surface) -> Result<(), String> {
        let size = self.current_frame_size()?;
        target.draw_image(&self.key, self.current, self.position, size)
    }
}

pub struct HeadlessFrame {
    side: FrameSide,
}

impl HeadlessFrame {
    pub fn new(side: FrameSide) -> Self {
        Self { side }
    }
}

impl UiFrame for HeadlessFrame {
    fn render(&self, target: &mut dyn Surface) -> Result<(), String> {
        let (key, x) = match self.side {
            FrameSide::Left => (FRAME_LEFT_KEY, 0),
            FrameSide::Right => (FRAME_RIGHT_KEY, 400),
        };
        target.draw_image(key, 0, ScreenPos::new(x, 0), FrameSize::new(400, 600))
    }
}

pub struct HeadlessTooltip {
    style: TooltipStyle,
    lines: Vec<String>,
    position: ScreenPos,
}

impl HeadlessTooltip {
    pub fn new(style: TooltipStyle) -> Self {
        Self {
            style,
            lines: Vec::new(),
            position: ScreenPos::default(),
        }
    }

    pub fn style(&self) -> TooltipStyle {
        self.style
    }
}

impl Tooltip for HeadlessTooltip {
    fn set_text_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = ScreenPos::new(x, y);
    }

    fn render(&self, target: &mut dyn Surface) -> Result<(), String> {
        target.draw_text(&self.lines, self.position)
    }
}

struct ButtonState {
    kind: ButtonKind,
    visible: bool,
    position: ScreenPos,
    callbacks: Vec<Box<dyn FnMut()>>,
}

/// Shared view of a [`HeadlessButton`], kept by whoever needs to click it.
#[derive(Clone)]
pub struct ButtonHandle {
    state: Rc<RefCell<ButtonState>>,
}

impl ButtonHandle {
    /// Fires the activation callbacks if the button is visible.
    ///
    /// # Returns
    /// * `true` if the click landed on a visible button.
    pub fn click(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.visible {
            return false;
        }
        for callback in state.callbacks.iter_mut() {
            callback();
        }
        true
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn position(&self) -> ScreenPos {
        self.state.borrow().position
    }

    pub fn kind(&self) -> ButtonKind {
        self.state.borrow().kind
    }
}

pub struct HeadlessButton {
    state: Rc<RefCell<ButtonState>>,
}

impl HeadlessButton {
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            state: Rc::new(RefCell::new(ButtonState {
                kind,
                visible: true,
                position: ScreenPos::default(),
                callbacks: Vec::new(),
            })),
        }
    }

    pub fn handle(&self) -> ButtonHandle {
        ButtonHandle {
            state: Rc::clone(&self.state),
        }
    }
}

impl Button for HeadlessButton {
    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.state.borrow_mut().position = ScreenPos::new(x, y);
    }

    fn on_activated(&mut self, callback: Box<dyn FnMut()>) {
        self.state.borrow_mut().callbacks.push(callback);
    }
}

/// Widget factory backed by the headless widgets above.
pub struct HeadlessWidgets {
    sprite_frames: BTreeMap<u32, FrameSize>,
    unmeasurable_frame: Option<u32>,
    failing_widget: Option<&'static str>,
    buttons: Vec<ButtonHandle>,
    tooltip_styles: Vec<TooltipStyle>,
}

impl Default for HeadlessWidgets {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessWidgets {
    pub fn new() -> Self {
        Self {
            sprite_frames: inventory_panel_frames(),
            unmeasurable_frame: None,
            failing_widget: None,
            buttons: Vec::new(),
            tooltip_styles: Vec::new(),
        }
    }

    /// Makes `frame` of every new sprite fail its size query.
    pub fn with_unmeasurable_frame(mut self, frame: u32) -> Self {
        self.unmeasurable_frame = Some(frame);
        self
    }

    /// Makes creation of the named widget kind (`"frame"`, `"sprite"`,
    /// `"button"` or `"tooltip"`) fail.
    pub fn failing(mut self, widget: &'static str) -> Self {
        self.failing_widget = Some(widget);
        self
    }

    /// Handle to the most recently created button.
    pub fn last_button(&self) -> Option<ButtonHandle> {
        self.buttons.last().cloned()
    }

    /// Style of the most recently created tooltip.
    pub fn last_tooltip_style(&self) -> Option<TooltipStyle> {
        self.tooltip_styles.last().copied()
    }

    fn check(&self, widget: &'static str) -> Result<(), String> {
        if self.failing_widget == Some(widget) {
            return Err(format!("{widget} resources unavailable"));
        }
        Ok(())
    }
}

impl WidgetFactory for HeadlessWidgets {
    fn new_frame(&mut self, side: FrameSide) -> Result<Box<dyn UiFrame>, String> {
        self.check("frame")?;
        Ok(Box::new(HeadlessFrame::new(side)))
    }

    fn new_sprite(&mut self, path: &str, palette: &str) -> Result<Box<dyn Sprite>, String> {
        self.check("sprite")?;
        log::debug!("Creating headless sprite {path} with palette {palette}");

        let mut sprite = HeadlessSprite::new(path, self.sprite_frames.clone());
        if let Some(frame) = self.unmeasurable_frame {
            sprite = sprite.with_unmeasurable_frame(frame);
        }
        Ok(Box::new(sprite))
    }

    fn new_button(&mut self, kind: ButtonKind, label: &str) -> Result<Box<dyn Button>, String> {
        self.check("button")?;
        log::debug!("Creating headless {kind:?} button '{label}'");

        let button = HeadlessButton::new(kind);
        self.buttons.push(button.handle());
        Ok(Box::new(button))
    }

    fn new_tooltip(&mut self, style: TooltipStyle) -> Result<Box<dyn Tooltip>, String> {
        self.check("tooltip")?;
        let tooltip = HeadlessTooltip::new(style);
        self.tooltip_styles.push(tooltip.style());
        Ok(Box::new(tooltip))
    }
}
