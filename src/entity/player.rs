//! Player state held by the reference host

use crate::core::types::{HubHandle, ItemSerial, PlayerId};
use crate::entity::item::Item;
use crate::stats::AhpStat;

pub const DEFAULT_MAX_HEALTH: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub hub: HubHandle,
    pub name: String,
    pub health: f32,
    pub max_health: f32,
    /// Carried items in pickup order
    pub inventory: Vec<Item>,
    pub ahp: AhpStat,
}

impl Player {
    pub fn new(id: PlayerId, hub: HubHandle, name: impl Into<String>) -> Self {
        Self {
            id,
            hub,
            name: name.into(),
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            inventory: Vec::new(),
            ahp: AhpStat::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn item(&self, serial: ItemSerial) -> Option<&Item> {
        self.inventory.iter().find(|item| item.serial == serial)
    }

    /// Apply damage, AHP first. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 || !self.is_alive() {
            return 0.0;
        }
        let through = self.ahp.absorb(amount);
        let lost = through.min(self.health);
        self.health -= lost;
        lost
    }
}
