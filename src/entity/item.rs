//! Inventory items
//!
//! Items form a closed set: body armor, which can carry a shield, and
//! everything else. "Is this armor?" is a variant check via
//! [`Item::as_body_armor`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::types::ItemSerial;

/// Body armor variants. Shield configuration is keyed by these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    /// Light vest
    Light,
    /// Standard issue combat armor
    Combat,
    /// Heavy plated armor
    Heavy,
}

impl ArmorType {
    pub const ALL: [ArmorType; 3] = [ArmorType::Light, ArmorType::Combat, ArmorType::Heavy];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArmorType::Light => "light",
            ArmorType::Combat => "combat",
            ArmorType::Heavy => "heavy",
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArmorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "armor_light" => Ok(ArmorType::Light),
            "combat" | "armor_combat" => Ok(ArmorType::Combat),
            "heavy" | "armor_heavy" => Ok(ArmorType::Heavy),
            other => Err(format!("unknown armor type '{}'", other)),
        }
    }
}

/// Non-armor item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Keycard,
    Medkit,
    Painkillers,
    Adrenaline,
    Firearm,
    Grenade,
    Radio,
    Flashlight,
    Coin,
}

/// What an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    BodyArmor(ArmorType),
    Other(ItemType),
}

/// One item instance in a player's inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub serial: ItemSerial,
    pub kind: ItemKind,
}

/// Armor view of an item, produced by [`Item::as_body_armor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyArmor {
    pub serial: ItemSerial,
    pub armor_type: ArmorType,
}

impl Item {
    pub fn new(serial: ItemSerial, kind: ItemKind) -> Self {
        Self { serial, kind }
    }

    pub fn armor(serial: ItemSerial, armor_type: ArmorType) -> Self {
        Self::new(serial, ItemKind::BodyArmor(armor_type))
    }

    pub fn other(serial: ItemSerial, item_type: ItemType) -> Self {
        Self::new(serial, ItemKind::Other(item_type))
    }

    /// Downcast to body armor, `None` for every other item
    pub fn as_body_armor(&self) -> Option<BodyArmor> {
        match self.kind {
            ItemKind::BodyArmor(armor_type) => Some(BodyArmor {
                serial: self.serial,
                armor_type,
            }),
            ItemKind::Other(_) => None,
        }
    }
}

/// First body armor in inventory order, skipping `exclude`
///
/// A player is only expected to carry one armor piece; if there are several
/// the first one wins.
pub fn find_body_armor(items: &[Item], exclude: Option<ItemSerial>) -> Option<BodyArmor> {
    items
        .iter()
        .filter(|item| Some(item.serial) != exclude)
        .find_map(Item::as_body_armor)
}
