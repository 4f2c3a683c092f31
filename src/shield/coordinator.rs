//! Shield coordinator
//!
//! Keeps each player's worn body armor paired with at most one AHP process.
//! The host calls the `on_*` methods from its event dispatch, one
//! notification at a time. Every unmet precondition (no armor, no config
//! entry, no recorded process, unknown player) is a silent no-op.

use ahash::AHashMap;
use tracing::{debug, info, trace};

use crate::core::types::{HubHandle, ItemSerial, PlayerId};
use crate::entity::{find_body_armor, BodyArmor, DamageContext, Item};
use crate::host::ShieldHost;
use crate::shield::process::{ActiveShield, ShieldProcess};

pub struct ShieldCoordinator<H: ShieldHost> {
    host: H,
    /// Item serial -> shield bound to that item. One entry per serial at most.
    active: AHashMap<ItemSerial, ActiveShield>,
}

impl<H: ShieldHost> ShieldCoordinator<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            active: AHashMap::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// An item entered `player`'s inventory
    ///
    /// Shields whatever armor the player now wears, if it is configured and
    /// not already shielded.
    pub fn on_item_added(&mut self, player: PlayerId, item: &Item) {
        if !self.host.is_enabled() {
            return;
        }
        trace!(%player, serial = %item.serial, "item added");

        if let Some(armor) = find_body_armor(self.host.inventory(player), None) {
            self.update_shield(player, armor);
        }
    }

    /// An item is leaving `player`'s inventory
    ///
    /// Called while the item is still present, so the re-scan skips it
    /// explicitly. If another armor piece remains, it gets shielded.
    pub fn on_item_removed(&mut self, player: PlayerId, removed: Option<&Item>) {
        if !self.host.is_enabled() {
            return;
        }
        let Some(removed) = removed else {
            return;
        };

        if let Some(active) = self.active.remove(&removed.serial) {
            let killed = self.host.kill_shield(active.player, active.process.kill_code);
            debug!(
                player = %active.player,
                serial = %removed.serial,
                killed,
                "shield terminated"
            );
        }

        if let Some(armor) = find_body_armor(self.host.inventory(player), Some(removed.serial)) {
            self.update_shield(player, armor);
        }
    }

    /// Damage was applied to `target`
    ///
    /// Re-applies the configured sustain time to the worn armor's running
    /// shield. Never creates or removes shields.
    pub fn on_damage(&mut self, target: HubHandle, damage: &DamageContext) {
        if !self.host.is_enabled() {
            return;
        }
        let Some(player) = self.host.resolve(target) else {
            trace!(%target, "damage target is not a player");
            return;
        };
        let Some(armor) = find_body_armor(self.host.inventory(player), None) else {
            return;
        };
        let Some(active) = self.active.get_mut(&armor.serial) else {
            return;
        };
        let Some(sustain) = self.host.shield_for(armor.armor_type).map(|s| s.sustain) else {
            return;
        };

        active.process.sustain_time = sustain;
        self.host.set_sustain(active.player, active.process.kill_code, sustain);
        trace!(
            %player,
            serial = %armor.serial,
            sustain,
            damage = damage.amount,
            "shield sustain refreshed"
        );
    }

    /// Terminate every recorded shield and forget them
    pub fn shutdown(&mut self) {
        let count = self.active.len();
        for (_, active) in self.active.drain() {
            self.host.kill_shield(active.player, active.process.kill_code);
        }
        info!(count, "all armor shields terminated");
    }

    /// Forget every recorded shield without touching the stat module
    ///
    /// For round restarts, where the host has already wiped player stats.
    pub fn reset(&mut self) {
        self.active.clear();
    }

    pub fn is_shielded(&self, serial: ItemSerial) -> bool {
        self.active.contains_key(&serial)
    }

    pub fn shield_for(&self, serial: ItemSerial) -> Option<&ShieldProcess> {
        self.active.get(&serial).map(|active| &active.process)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_shields(&self) -> impl Iterator<Item = (&ItemSerial, &ActiveShield)> {
        self.active.iter()
    }

    fn update_shield(&mut self, player: PlayerId, armor: BodyArmor) {
        if self.active.contains_key(&armor.serial) {
            return;
        }
        let Some(shield) = self.host.shield_for(armor.armor_type).copied() else {
            return;
        };
        let Some(kill_code) = self.host.add_shield(player, &shield) else {
            return;
        };

        debug!(
            %player,
            serial = %armor.serial,
            armor = %armor.armor_type,
            amount = shield.amount,
            sustain = shield.sustain,
            "shield created"
        );
        self.active.insert(
            armor.serial,
            ActiveShield {
                player,
                process: ShieldProcess {
                    serial: armor.serial,
                    kill_code,
                    sustain_time: shield.sustain,
                },
            },
        );
    }
}
