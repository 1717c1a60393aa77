use std::process;

use inventory_client::headless::{
    DrawCall, HeadlessWidgets, RecordingSurface, SimpleItemGrid, StubItemFactory,
};
use inventory_client::grid::ItemGrid;
use inventory_client::settings::{load_settings, settings_file_path};
use inventory_client::{InventoryPanel, TestLoadout};
use inventory_core::geometry::ScreenPos;
use inventory_core::types::{InventoryItem, InventoryRecord};

fn log_frame(frame: usize, surface: &RecordingSurface) {
    log::info!("Frame {frame}: {} draw calls", surface.calls().len());
    for call in surface.calls() {
        match call {
            DrawCall::Image {
                key,
                frame,
                pos,
                size,
            } => log::debug!(
                "  image {key}#{frame} at ({}, {}) {}x{}",
                pos.x,
                pos.y,
                size.width,
                size.height
            ),
            DrawCall::Text { lines, pos } => {
                log::info!("  tooltip at ({}, {}): {}", pos.x, pos.y, lines.join(" | "))
            }
        }
    }
}

fn main() -> Result<(), String> {
    let settings_path = settings_file_path();
    let settings = load_settings(&settings_path);

    inventory_core::initialize_logger(settings.log_level_filter(), settings.log_file.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("Failed to initialize logger: {}. Exiting.", e);
            process::exit(1);
        });
    log::info!("Loaded settings from {}", settings_path.display());

    let record = InventoryRecord::default_right_panel();
    let grid = SimpleItemGrid::new(&record);
    let mut widgets = HeadlessWidgets::new();
    let mut panel =
        InventoryPanel::new(&record, grid, &mut widgets, &settings).map_err(|e| e.to_string())?;

    if settings.provision_test_items {
        let report = panel.load(&StubItemFactory::new(), &TestLoadout::classic());
        log::info!(
            "Provisioned {} items ({} skipped, {} equipped, {} carried)",
            report.built,
            report.skipped,
            report.equipped,
            report.added
        );
    }

    panel.set_on_close(|| log::info!("Inventory panel closed"));
    panel.toggle();

    // Sweep the pointer across the first carried item and back out.
    let target = panel.grid().items().first().map(|item| {
        let (w, h) = item.footprint();
        let layout = panel.grid().layout();
        panel.grid().slot_to_screen(item.grid_slot()).offset(
            (w * layout.cell_width / 2) as i32,
            (h * layout.cell_height / 2) as i32,
        )
    });
    let outside = ScreenPos::new(10, 10);
    let path = match target {
        Some(pos) => vec![outside, pos, pos.offset(3, 2), outside],
        None => vec![outside],
    };

    let mut surface = RecordingSurface::new();
    for (frame, pointer) in path.into_iter().enumerate() {
        panel.on_mouse_moved(pointer.x, pointer.y);
        panel.update();
        surface.clear();
        panel.render(&mut surface);
        log_frame(frame, &surface);
    }

    match widgets.last_button() {
        Some(button) => {
            button.click();
            panel.update();
        }
        None => panel.close(),
    }

    surface.clear();
    panel.render(&mut surface);
    log::info!(
        "Panel open after close click: {} ({} draw calls)",
        panel.is_open(),
        surface.calls().len()
    );

    Ok(())
}
