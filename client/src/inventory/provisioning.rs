//! Demo inventory contents.

use inventory_core::types::{EquippedSlot, InventoryItem, ItemRequest};

use crate::error::PanelError;
use crate::grid::{ItemFactory, ItemGrid};

/// Items to build when the inventory loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestLoadout {
    /// Items for the carried-item grid, added in one batch.
    pub carried: Vec<ItemRequest>,
    /// Items put straight into equipment slots.
    pub equipped: Vec<(EquippedSlot, ItemRequest)>,
}

impl TestLoadout {
    pub fn classic() -> Self {
        let carried = [
            "kit, Crimson, of the Bat, of Frost",
            "rin, Steel, of Shock",
            "jav",
            "buc",
        ]
        .into_iter()
        .map(ItemRequest::parse)
        .collect();

        let equipped = [
            (EquippedSlot::LeftArm, "wnd"),
            (EquippedSlot::RightArm, "buc"),
            (EquippedSlot::Head, "crn"),
            (EquippedSlot::Torso, "plt"),
            (EquippedSlot::Legs, "vbt"),
            (EquippedSlot::Belt, "vbl"),
            (EquippedSlot::Gloves, "lgl"),
            (EquippedSlot::LeftHand, "rin"),
            (EquippedSlot::RightHand, "rin"),
            (EquippedSlot::Neck, "amu"),
        ]
        .into_iter()
        .map(|(slot, code)| (slot, ItemRequest::parse(code)))
        .collect();

        Self { carried, equipped }
    }
}

/// What a provisioning run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub built: usize,
    pub skipped: usize,
    pub equipped: usize,
    pub added: usize,
}

/// Builds every request in `loadout`, identifies the results and commits them
/// to `grid`.
///
/// Requests the factory rejects are skipped. A grid that cannot take every
/// carried item is logged; whatever fit stays in place.
pub fn provision<G, F>(grid: &mut G, factory: &F, loadout: &TestLoadout) -> ProvisionReport
where
    G: ItemGrid,
    F: ItemFactory<Item = G::Item>,
{
    let mut report = ProvisionReport::default();
    let mut build = |request: &ItemRequest| match factory.new_item(request) {
        Ok(mut item) => {
            item.identify();
            report.built += 1;
            Some(item)
        }
        Err(err) => {
            log::warn!("Skipping inventory item {:?}: {err}", request.codes());
            report.skipped += 1;
            None
        }
    };

    let carried: Vec<G::Item> = loadout.carried.iter().filter_map(&mut build).collect();

    let mut equipped = 0;
    for (slot, request) in &loadout.equipped {
        if let Some(item) = build(request) {
            grid.change_equipped_slot(*slot, item);
            equipped += 1;
        }
    }

    let added = match grid.add(carried) {
        Ok(added) => added,
        Err(err) => {
            log::error!("Could not add items to the inventory: {err}");
            match err {
                PanelError::GridFull { placed, .. } => placed,
                _ => 0,
            }
        }
    };

    ProvisionReport {
        equipped,
        added,
        ..report
    }
}
