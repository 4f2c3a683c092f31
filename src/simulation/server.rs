//! Event dispatch for the in-memory host
//!
//! Mirrors the order the game server raises its events:
//! - item-added after the item is in the inventory
//! - item-removed while the item is still in the inventory
//! - damage-applied after health and AHP have been reduced

use serde::Serialize;
use tracing::info;

use crate::core::config::ShieldSettings;
use crate::core::error::{Result, ShieldError};
use crate::core::types::{HubHandle, ItemSerial, PlayerId};
use crate::entity::{find_body_armor, DamageContext, Item, ItemKind};
use crate::host::PlayerDirectory;
use crate::shield::ShieldCoordinator;
use crate::simulation::host::SimHost;

pub struct Server {
    coordinator: ShieldCoordinator<SimHost>,
    /// Seconds since round start
    elapsed: f32,
}

/// Per-player status line for reporting
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub id: PlayerId,
    pub name: String,
    pub health: f32,
    pub ahp: f32,
    pub armor: Option<ItemSerial>,
    pub shielded: bool,
    pub sustain: Option<f32>,
}

impl Server {
    pub fn new(settings: ShieldSettings) -> Self {
        Self {
            coordinator: ShieldCoordinator::new(SimHost::new(settings)),
            elapsed: 0.0,
        }
    }

    pub fn coordinator(&self) -> &ShieldCoordinator<SimHost> {
        &self.coordinator
    }

    pub fn host(&self) -> &SimHost {
        self.coordinator.host()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn spawn_player(&mut self, name: impl Into<String>) -> PlayerId {
        let name = name.into();
        let id = self.coordinator.host_mut().spawn_player(name.clone());
        info!(%id, %name, "player joined");
        id
    }

    /// Put a new item into a player's inventory
    pub fn give_item(&mut self, player: PlayerId, kind: ItemKind) -> Result<Item> {
        let host = self.coordinator.host_mut();
        let serial = host.next_serial()?;
        let item = Item::new(serial, kind);
        host.player_mut(player)
            .ok_or(ShieldError::PlayerNotFound(player))?
            .inventory
            .push(item);

        self.coordinator.on_item_added(player, &item);
        Ok(item)
    }

    /// Take an item out of a player's inventory
    pub fn remove_item(&mut self, player: PlayerId, serial: ItemSerial) -> Result<Item> {
        let item = *self
            .host()
            .player(player)
            .ok_or(ShieldError::PlayerNotFound(player))?
            .item(serial)
            .ok_or(ShieldError::ItemNotFound { player, serial })?;

        self.coordinator.on_item_removed(player, Some(&item));

        if let Some(p) = self.coordinator.host_mut().player_mut(player) {
            p.inventory.retain(|i| i.serial != serial);
        }
        Ok(item)
    }

    /// Damage a player. Returns the health actually lost.
    pub fn damage(&mut self, player: PlayerId, damage: DamageContext) -> Result<f32> {
        let target = self
            .coordinator
            .host_mut()
            .player_mut(player)
            .ok_or(ShieldError::PlayerNotFound(player))?;
        let lost = target.take_damage(damage.amount);
        let hub = target.hub;

        self.coordinator.on_damage(hub, &damage);
        Ok(lost)
    }

    /// Damage something by raw handle. Non-player targets only raise the event.
    pub fn damage_hub(&mut self, hub: HubHandle, damage: DamageContext) -> f32 {
        let host = self.coordinator.host_mut();
        let lost = match host.resolve(hub).and_then(|id| host.player_mut(id)) {
            Some(target) => target.take_damage(damage.amount),
            None => 0.0,
        };
        self.coordinator.on_damage(hub, &damage);
        lost
    }

    /// Advance AHP processes by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        for player in self.coordinator.host_mut().players_mut() {
            player.ahp.tick(dt);
        }
    }

    /// Swap in new settings. Running shields pick them up on the next hit.
    pub fn reload_config(&mut self, settings: ShieldSettings) -> Result<()> {
        settings.validate()?;
        self.coordinator.host_mut().set_settings(settings);
        info!("armor shield config reloaded");
        Ok(())
    }

    /// Wipe inventories and stats, and forget recorded shields
    pub fn restart_round(&mut self) {
        for player in self.coordinator.host_mut().players_mut() {
            player.inventory.clear();
            player.ahp.clear();
            player.health = player.max_health;
        }
        self.coordinator.reset();
        self.elapsed = 0.0;
        info!("round restarted");
    }

    /// Disable the shield handlers, terminating every running shield
    pub fn shutdown(&mut self) {
        self.coordinator.shutdown();
    }

    pub fn report(&self) -> Vec<PlayerReport> {
        self.host()
            .players()
            .into_iter()
            .map(|p| {
                let armor = find_body_armor(&p.inventory, None).map(|a| a.serial);
                let process = armor.and_then(|serial| self.coordinator.shield_for(serial));
                PlayerReport {
                    id: p.id,
                    name: p.name.clone(),
                    health: p.health,
                    ahp: p.ahp.current_value(),
                    armor,
                    shielded: process.is_some(),
                    sustain: process
                        .and_then(|handle| p.ahp.process(handle.kill_code))
                        .map(|running| running.sustain_time),
                }
            })
            .collect()
    }
}
