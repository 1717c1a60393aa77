//! The inventory panel: open/close state, border, item grid and item tooltips.

use std::cell::Cell;
use std::rc::Rc;

use inventory_core::constants::{
    FONT_FORMAL_11, INVENTORY_CHARACTER_PANEL, PALETTE_SKY, PALETTE_STATIC,
};
use inventory_core::geometry::ScreenPos;
use inventory_core::types::{InventoryItem, InventoryRecord};

use crate::error::{PanelError, Result};
use crate::grid::{ItemFactory, ItemGrid};
use crate::settings::PanelSettings;
use crate::ui::{
    Button, ButtonKind, FrameSide, Sprite, Surface, Tooltip, TooltipStyle, TooltipXAlign,
    TooltipYAlign, UiFrame, WidgetFactory,
};

pub mod frame_border;
pub mod item_hover;
pub mod provisioning;

use frame_border::CornerPlacement;
use item_hover::{HoverHit, HoverTracker};
use provisioning::{ProvisionReport, TestLoadout};

pub const ITEM_TOOLTIP_STYLE: TooltipStyle = TooltipStyle {
    font: FONT_FORMAL_11,
    palette: PALETTE_STATIC,
    x_align: TooltipXAlign::Center,
    y_align: TooltipYAlign::Bottom,
};

fn widget_error(what: &'static str) -> impl FnOnce(String) -> PanelError {
    move |reason| PanelError::Widget { what, reason }
}

pub struct InventoryPanel<G: ItemGrid> {
    grid: G,
    frame: Box<dyn UiFrame>,
    panel: Box<dyn Sprite>,
    item_tooltip: Box<dyn Tooltip>,
    close_button: Box<dyn Button>,
    /// Set by the close button's activation callback, drained by `update`.
    close_requested: Rc<Cell<bool>>,
    on_close: Option<Box<dyn FnMut()>>,
    origin: ScreenPos,
    frame_vertical_offset: i32,
    /// Latest pointer position; written by input handling at any time, read by `render`.
    last_pointer: ScreenPos,
    hover: HoverTracker,
    is_open: bool,
}

impl<G: ItemGrid> InventoryPanel<G> {
    /// Creates a closed panel anchored at the record's panel origin.
    ///
    /// All widgets are created here; the close button starts hidden at its
    /// configured position.
    ///
    /// # Returns
    /// * The panel, or `PanelError::Widget` if a widget could not be created.
    pub fn new(
        record: &InventoryRecord,
        grid: G,
        widgets: &mut dyn WidgetFactory,
        settings: &PanelSettings,
    ) -> Result<Self> {
        let item_tooltip = widgets
            .new_tooltip(ITEM_TOOLTIP_STYLE)
            .map_err(widget_error("item tooltip"))?;
        let frame = widgets
            .new_frame(FrameSide::Right)
            .map_err(widget_error("inventory frame"))?;
        let panel = widgets
            .new_sprite(INVENTORY_CHARACTER_PANEL, PALETTE_SKY)
            .map_err(widget_error("inventory panel sprite"))?;
        let mut close_button = widgets
            .new_button(ButtonKind::SquareClose, "")
            .map_err(widget_error("close button"))?;

        let close_requested = Rc::new(Cell::new(false));
        close_button.set_visible(false);
        close_button.set_position(settings.close_button_x, settings.close_button_y);
        let request = Rc::clone(&close_requested);
        close_button.on_activated(Box::new(move || request.set(true)));

        let origin = record.origin();
        log::debug!("Inventory panel anchored at ({}, {})", origin.x, origin.y);

        Ok(Self {
            grid,
            frame,
            panel,
            item_tooltip,
            close_button,
            close_requested,
            on_close: None,
            origin,
            frame_vertical_offset: settings.frame_vertical_offset,
            last_pointer: ScreenPos::default(),
            hover: HoverTracker::new(),
            is_open: false,
        })
    }

    /// Fills the grid from `loadout`. Failures are logged and skipped.
    pub fn load<F>(&mut self, factory: &F, loadout: &TestLoadout) -> ProvisionReport
    where
        F: ItemFactory<Item = G::Item>,
    {
        provisioning::provision(&mut self.grid, factory, loadout)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.close_button.set_visible(true);
    }

    /// Hides the panel and notifies the close handler.
    ///
    /// The handler runs on every call, including when the panel is already
    /// closed.
    pub fn close(&mut self) {
        self.is_open = false;
        self.close_button.set_visible(false);

        match self.on_close.as_mut() {
            Some(callback) => callback(),
            None => log::debug!("Inventory closed with no close handler registered"),
        }
    }

    /// Registers the handler run on every close, replacing any previous one.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Applies input collected since the last frame. Call once per frame before `render`.
    pub fn update(&mut self) {
        if self.close_requested.replace(false) {
            log::debug!("Inventory close button activated");
            self.close();
        }
    }

    pub fn on_mouse_moved(&mut self, x: i32, y: i32) {
        self.last_pointer = ScreenPos::new(x, y);
    }

    /// Draws the panel. Does nothing while the panel is closed.
    pub fn render(&mut self, target: &mut dyn Surface) {
        if !self.is_open {
            return;
        }

        if let Err(err) = self.render_frame(target) {
            log::error!("Error rendering inventory frame: {err}");
        }

        if let Err(err) = self.grid.render(target) {
            log::error!("Error rendering inventory grid: {err}");
        }

        self.render_item_hover(target);
    }

    fn render_frame(&mut self, target: &mut dyn Surface) -> Result<Vec<CornerPlacement>> {
        self.frame
            .render(target)
            .map_err(|reason| PanelError::Render {
                what: "inventory frame",
                reason,
            })?;

        frame_border::compose_border(
            self.panel.as_mut(),
            target,
            self.origin,
            self.frame_vertical_offset,
        )
    }

    fn render_item_hover(&mut self, target: &mut dyn Surface) {
        let pointer = self.last_pointer;
        let hit = item_hover::find_hovered_item(&self.grid, pointer);

        if let Some(anchor) = self.hover.record(hit.is_some(), pointer) {
            if let Some(hit) = hit {
                self.render_item_description(target, hit, anchor);
            }
        }
    }

    fn render_item_description(&mut self, target: &mut dyn Surface, hit: HoverHit, anchor: ScreenPos) {
        let Some(item) = self.grid.items().get(hit.index) else {
            return;
        };

        self.item_tooltip.set_text_lines(item.description());
        let pos = item_hover::tooltip_position(anchor, hit.item_screen);
        self.item_tooltip.set_position(pos.x, pos.y);

        if let Err(reason) = self.item_tooltip.render(target) {
            log::error!("Error rendering item tooltip: {reason}");
        }
    }

    pub fn origin(&self) -> ScreenPos {
        self.origin
    }

    pub fn last_pointer(&self) -> ScreenPos {
        self.last_pointer
    }

    pub fn hover_anchor(&self) -> ScreenPos {
        self.hover.anchor()
    }

    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }

    pub fn is_close_button_visible(&self) -> bool {
        self.close_button.is_visible()
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }
}
