//! A small item table standing in for the real item definitions.

use inventory_core::types::{GridSlot, InventoryItem, ItemRequest, SlotMask};

use crate::error::{PanelError, Result};
use crate::grid::ItemFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTemplate {
    pub code: &'static str,
    pub name: &'static str,
    pub footprint: (u32, u32),
    pub placement: SlotMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub name: &'static str,
    pub kind: AffixKind,
    pub stat: &'static str,
}

const fn template(
    code: &'static str,
    name: &'static str,
    footprint: (u32, u32),
    placement: SlotMask,
) -> ItemTemplate {
    ItemTemplate {
        code,
        name,
        footprint,
        placement,
    }
}

const fn affix(name: &'static str, kind: AffixKind, stat: &'static str) -> Affix {
    Affix { name, kind, stat }
}

pub const ITEM_TABLE: &[ItemTemplate] = &[
    template("kit", "Kite Shield", (2, 3), SlotMask::ARMS),
    template("buc", "Buckler", (2, 2), SlotMask::ARMS),
    template("jav", "Javelin", (1, 3), SlotMask::ARMS),
    template("wnd", "Wand", (1, 2), SlotMask::ARMS),
    template("rin", "Ring", (1, 1), SlotMask::HANDS),
    template("amu", "Amulet", (1, 1), SlotMask::NECK),
    template("crn", "Crown", (2, 2), SlotMask::HEAD),
    template("plt", "Plate Mail", (2, 3), SlotMask::TORSO),
    template("vbt", "Heavy Boots", (2, 2), SlotMask::LEGS),
    template("vbl", "Belt", (2, 1), SlotMask::BELT),
    template("lgl", "Leather Gloves", (2, 2), SlotMask::GLOVES),
];

pub const AFFIX_TABLE: &[Affix] = &[
    affix("Crimson", AffixKind::Prefix, "Fire Resist +11%"),
    affix("Steel", AffixKind::Prefix, "+20% Enhanced Damage"),
    affix("of the Bat", AffixKind::Suffix, "4% Mana Stolen per Hit"),
    affix("of Frost", AffixKind::Suffix, "Adds 1-2 Cold Damage"),
    affix("of Shock", AffixKind::Suffix, "Adds 1-6 Lightning Damage"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubItem {
    template: ItemTemplate,
    affixes: Vec<Affix>,
    slot: GridSlot,
    identified: bool,
}

impl StubItem {
    pub fn new(template: ItemTemplate, affixes: Vec<Affix>) -> Self {
        Self {
            template,
            affixes,
            slot: GridSlot::default(),
            identified: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.template.name
    }

    /// Base name wrapped in prefix and suffix names.
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = self
            .affixes
            .iter()
            .filter(|affix| affix.kind == AffixKind::Prefix)
            .map(|affix| affix.name)
            .collect();
        parts.push(self.template.name);
        parts.extend(
            self.affixes
                .iter()
                .filter(|affix| affix.kind == AffixKind::Suffix)
                .map(|affix| affix.name),
        );
        parts.join(" ")
    }

    pub fn is_magic(&self) -> bool {
        !self.affixes.is_empty()
    }
}

impl InventoryItem for StubItem {
    fn grid_slot(&self) -> GridSlot {
        self.slot
    }

    fn set_grid_slot(&mut self, slot: GridSlot) {
        self.slot = slot;
    }

    fn item_code(&self) -> &str {
        self.template.code
    }

    fn footprint(&self) -> (u32, u32) {
        self.template.footprint
    }

    fn placement(&self) -> SlotMask {
        self.template.placement
    }

    fn description(&self) -> Vec<String> {
        if !self.identified && self.is_magic() {
            return vec![self.template.name.to_string(), "Unidentified".to_string()];
        }

        let mut lines = vec![self.full_name()];
        lines.extend(self.affixes.iter().map(|affix| affix.stat.to_string()));
        lines
    }

    fn identify(&mut self) {
        self.identified = true;
    }

    fn is_identified(&self) -> bool {
        self.identified
    }
}

/// Builds [`StubItem`]s from the static item and affix tables.
#[derive(Debug, Clone)]
pub struct StubItemFactory {
    items: &'static [ItemTemplate],
    affixes: &'static [Affix],
}

impl Default for StubItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StubItemFactory {
    pub fn new() -> Self {
        Self {
            items: ITEM_TABLE,
            affixes: AFFIX_TABLE,
        }
    }

    pub fn template(&self, code: &str) -> Option<&ItemTemplate> {
        self.items.iter().find(|template| template.code == code)
    }
}

impl ItemFactory for StubItemFactory {
    type Item = StubItem;

    fn new_item(&self, request: &ItemRequest) -> Result<StubItem> {
        let code = request.base_code().ok_or(PanelError::EmptyItemRequest)?;
        let template = self
            .template(code)
            .ok_or_else(|| PanelError::UnknownItemCode(code.to_string()))?;

        let affixes = request
            .affixes()
            .iter()
            .map(|name| {
                self.affixes
                    .iter()
                    .find(|affix| affix.name == name.as_str())
                    .copied()
                    .ok_or_else(|| PanelError::UnknownAffix(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(StubItem::new(*template, affixes))
    }
}
