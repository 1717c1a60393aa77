//! Equipment slots (body locations that hold at most one item each)

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of equipment slots an item may be placed in.
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SlotMask: u16 {
        const HEAD = 1 << 0;
        const TORSO = 1 << 1;
        const LEFT_HAND = 1 << 2;
        const RIGHT_HAND = 1 << 3;
        const NECK = 1 << 4;
        const BELT = 1 << 5;
        const GLOVES = 1 << 6;
        const LEGS = 1 << 7;
        const LEFT_ARM = 1 << 8;
        const RIGHT_ARM = 1 << 9;

        /// Either ring finger.
        const HANDS = Self::LEFT_HAND.bits() | Self::RIGHT_HAND.bits();
        /// Weapon or shield hand.
        const ARMS = Self::LEFT_ARM.bits() | Self::RIGHT_ARM.bits();
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub enum EquippedSlot {
    Head,
    Torso,
    LeftHand,
    RightHand,
    Neck,
    Belt,
    Gloves,
    Legs,
    LeftArm,
    RightArm,
}

impl EquippedSlot {
    pub const ALL: [EquippedSlot; 10] = [
        EquippedSlot::Head,
        EquippedSlot::Torso,
        EquippedSlot::LeftHand,
        EquippedSlot::RightHand,
        EquippedSlot::Neck,
        EquippedSlot::Belt,
        EquippedSlot::Gloves,
        EquippedSlot::Legs,
        EquippedSlot::LeftArm,
        EquippedSlot::RightArm,
    ];

    /// Returns the single-bit mask for this slot.
    pub fn mask(&self) -> SlotMask {
        match self {
            EquippedSlot::Head => SlotMask::HEAD,
            EquippedSlot::Torso => SlotMask::TORSO,
            EquippedSlot::LeftHand => SlotMask::LEFT_HAND,
            EquippedSlot::RightHand => SlotMask::RIGHT_HAND,
            EquippedSlot::Neck => SlotMask::NECK,
            EquippedSlot::Belt => SlotMask::BELT,
            EquippedSlot::Gloves => SlotMask::GLOVES,
            EquippedSlot::Legs => SlotMask::LEGS,
            EquippedSlot::LeftArm => SlotMask::LEFT_ARM,
            EquippedSlot::RightArm => SlotMask::RIGHT_ARM,
        }
    }

    /// Returns the identifier used for this slot in layout records and loadouts.
    ///
    /// # Returns
    /// * `&'static str` such as `"head"` or `"left_arm"`.
    pub fn name(&self) -> &'static str {
        match self {
            EquippedSlot::Head => "head",
            EquippedSlot::Torso => "torso",
            EquippedSlot::LeftHand => "left_hand",
            EquippedSlot::RightHand => "right_hand",
            EquippedSlot::Neck => "neck",
            EquippedSlot::Belt => "belt",
            EquippedSlot::Gloves => "gloves",
            EquippedSlot::Legs => "legs",
            EquippedSlot::LeftArm => "left_arm",
            EquippedSlot::RightArm => "right_arm",
        }
    }

    /// Parses a slot identifier produced by [`EquippedSlot::name`].
    ///
    /// # Returns
    /// * `Some(EquippedSlot)` for a known identifier, `None` otherwise.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}
