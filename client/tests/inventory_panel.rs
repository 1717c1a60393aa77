//! End-to-end tests: drive a panel over headless widgets and inspect what it draws.

use std::cell::Cell;
use std::rc::Rc;

use inventory_client::grid::{ItemFactory, ItemGrid};
use inventory_client::headless::{
    HeadlessWidgets, RecordingSurface, SimpleItemGrid, StubItemFactory,
};
use inventory_client::{InventoryPanel, PanelError, PanelSettings, TestLoadout};
use inventory_core::geometry::ScreenPos;
use inventory_core::types::{EquippedSlot, GridSlot, InventoryItem, InventoryRecord, ItemRequest};
use proptest::prelude::*;

/// A magic ring at cell (0,0) and an amulet at cell (2,0): boxes
/// (417,315)-(446,344) and (475,315)-(504,344).
fn two_item_grid() -> SimpleItemGrid {
    let factory = StubItemFactory::new();
    let mut grid = SimpleItemGrid::new(&InventoryRecord::default_right_panel());

    let mut ring = factory
        .new_item(&ItemRequest::parse("rin, Steel, of Shock"))
        .expect("ring");
    ring.identify();
    grid.insert_at(ring, GridSlot::new(0, 0)).expect("place ring");

    let amulet = factory.new_item(&ItemRequest::parse("amu")).expect("amulet");
    grid.insert_at(amulet, GridSlot::new(2, 0)).expect("place amulet");
    grid
}

fn open_panel() -> InventoryPanel<SimpleItemGrid> {
    let record = InventoryRecord::default_right_panel();
    let mut widgets = HeadlessWidgets::new();
    let mut panel = InventoryPanel::new(
        &record,
        two_item_grid(),
        &mut widgets,
        &PanelSettings::default(),
    )
    .expect("panel");
    panel.open();
    panel
}

/// Moves the pointer, renders one frame and returns the tooltip draws.
fn frame_at(panel: &mut InventoryPanel<SimpleItemGrid>, x: i32, y: i32) -> Vec<(Vec<String>, ScreenPos)> {
    let mut surface = RecordingSurface::new();
    panel.on_mouse_moved(x, y);
    panel.update();
    panel.render(&mut surface);
    surface
        .texts()
        .into_iter()
        .map(|(lines, pos)| (lines.to_vec(), pos))
        .collect()
}

// ── Hover and tooltip ───────────────────────────────────────────────

#[test]
fn tooltip_follows_pointer_from_item_to_item() {
    let mut panel = open_panel();

    assert!(frame_at(&mut panel, 300, 300).is_empty());
    assert!(!panel.is_hovering());

    let over_ring = frame_at(&mut panel, 430, 330);
    assert_eq!(over_ring.len(), 1);
    assert_eq!(
        over_ring[0].0,
        ["Steel Ring of Shock", "+20% Enhanced Damage", "Adds 1-6 Lightning Damage"]
    );
    assert_eq!(panel.hover_anchor(), ScreenPos::new(430, 330));

    assert!(frame_at(&mut panel, 460, 330).is_empty());
    assert!(!panel.is_hovering());

    let over_amulet = frame_at(&mut panel, 490, 320);
    assert_eq!(over_amulet.len(), 1);
    assert_eq!(over_amulet[0].0, ["Amulet"]);
    assert_eq!(over_amulet[0].1, ScreenPos::new(490, 315));
    assert_eq!(panel.hover_anchor(), ScreenPos::new(490, 320));
}

#[test]
fn tooltip_column_stays_at_hover_start() {
    let mut panel = open_panel();

    let first = frame_at(&mut panel, 420, 330);
    let second = frame_at(&mut panel, 425, 332);

    assert_eq!(first[0].1, ScreenPos::new(420, 315));
    assert_eq!(second[0].1, ScreenPos::new(420, 315));
}

#[test]
fn moving_between_items_without_an_empty_frame_keeps_the_anchor() {
    let mut panel = open_panel();

    frame_at(&mut panel, 430, 330);
    let over_amulet = frame_at(&mut panel, 490, 320);

    assert_eq!(over_amulet.len(), 1);
    assert_eq!(over_amulet[0].0, ["Amulet"]);
    assert_eq!(over_amulet[0].1, ScreenPos::new(430, 315));
    assert_eq!(panel.hover_anchor(), ScreenPos::new(430, 330));
}

#[test]
fn pointer_move_without_render_is_last_write_wins() {
    let mut panel = open_panel();
    let mut surface = RecordingSurface::new();

    panel.on_mouse_moved(430, 330);
    panel.on_mouse_moved(300, 300);
    panel.render(&mut surface);

    assert_eq!(panel.last_pointer(), ScreenPos::new(300, 300));
    assert!(surface.texts().is_empty());
}

// ── Lifecycle ───────────────────────────────────────────────────────

#[test]
fn close_button_closes_panel_and_stops_drawing() {
    let record = InventoryRecord::default_right_panel();
    let mut widgets = HeadlessWidgets::new();
    let mut panel = InventoryPanel::new(
        &record,
        two_item_grid(),
        &mut widgets,
        &PanelSettings::default(),
    )
    .expect("panel");
    let closed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closed);
    panel.set_on_close(move || counter.set(counter.get() + 1));

    panel.toggle();
    assert!(!frame_at(&mut panel, 430, 330).is_empty());

    let button = widgets.last_button().expect("close button");
    assert!(button.click());
    let mut surface = RecordingSurface::new();
    panel.update();
    panel.render(&mut surface);

    assert!(!panel.is_open());
    assert!(!button.is_visible());
    assert!(surface.is_empty());
    assert_eq!(closed.get(), 1);
}

#[test]
fn widget_creation_failure_is_reported() {
    let record = InventoryRecord::default_right_panel();
    for widget in ["frame", "sprite", "button", "tooltip"] {
        let mut widgets = HeadlessWidgets::new().failing(widget);
        let result = InventoryPanel::new(
            &record,
            two_item_grid(),
            &mut widgets,
            &PanelSettings::default(),
        );
        assert!(
            matches!(result, Err(PanelError::Widget { .. })),
            "{widget} failure not reported"
        );
    }
}

// ── Provisioning ────────────────────────────────────────────────────

#[test]
fn classic_loadout_is_hoverable() {
    let record = InventoryRecord::default_right_panel();
    let mut widgets = HeadlessWidgets::new();
    let mut panel = InventoryPanel::new(
        &record,
        SimpleItemGrid::new(&record),
        &mut widgets,
        &PanelSettings::default(),
    )
    .expect("panel");

    let report = panel.load(&StubItemFactory::new(), &TestLoadout::classic());
    assert_eq!(report.skipped, 0);
    assert!(panel.grid().equipped(EquippedSlot::Neck).is_some());

    panel.open();
    let kit_slot = panel.grid().items()[0].grid_slot();
    let kit_pos = panel.grid().slot_to_screen(kit_slot);
    let tooltips = frame_at(&mut panel, kit_pos.x + 5, kit_pos.y + 5);

    assert_eq!(tooltips.len(), 1);
    assert_eq!(tooltips[0].0[0], "Crimson Kite Shield of the Bat of Frost");
    assert_eq!(tooltips[0].1.y, kit_pos.y);
}

// ── Properties ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Command {
    Open,
    Close,
    Toggle,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![Just(Command::Open), Just(Command::Close), Just(Command::Toggle)]
}

proptest! {
    #[test]
    fn open_state_and_close_count_follow_commands(commands in prop::collection::vec(command(), 0..40)) {
        let mut panel = open_panel();
        panel.close();
        let closes = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&closes);
        panel.set_on_close(move || counter.set(counter.get() + 1));

        let mut expected_open = false;
        let mut expected_closes = 0;
        for command in commands {
            match command {
                Command::Open => {
                    panel.open();
                    expected_open = true;
                }
                Command::Close => {
                    panel.close();
                    expected_open = false;
                    expected_closes += 1;
                }
                Command::Toggle => {
                    panel.toggle();
                    if expected_open {
                        expected_closes += 1;
                    }
                    expected_open = !expected_open;
                }
            }
            prop_assert_eq!(panel.is_open(), expected_open);
        }
        prop_assert_eq!(closes.get(), expected_closes);
    }

    #[test]
    fn tooltip_row_is_always_the_slot_row(dx in 1i32..29, dy in 1i32..29) {
        let mut panel = open_panel();
        let tooltips = frame_at(&mut panel, 417 + dx, 315 + dy);

        prop_assert_eq!(tooltips.len(), 1);
        prop_assert_eq!(tooltips[0].1, ScreenPos::new(417 + dx, 315));
    }
}
