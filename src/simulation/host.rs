//! In-memory host: players, inventories, AHP stats and live settings

use ahash::{AHashMap, AHashSet};

use crate::core::config::{ConfiguredShield, ShieldSettings};
use crate::core::error::{Result, ShieldError};
use crate::core::types::{HubHandle, ItemSerial, KillCode, PlayerId};
use crate::entity::{ArmorType, Item, Player};
use crate::host::{PlayerDirectory, ShieldConfigSource, StatModule};

pub struct SimHost {
    players: AHashMap<PlayerId, Player>,
    hubs: AHashMap<HubHandle, PlayerId>,
    settings: ShieldSettings,
    next_player: u32,
    next_serial: u16,
}

impl SimHost {
    pub fn new(settings: ShieldSettings) -> Self {
        Self {
            players: AHashMap::new(),
            hubs: AHashMap::new(),
            settings,
            next_player: 0,
            next_serial: 0,
        }
    }

    pub fn spawn_player(&mut self, name: impl Into<String>) -> PlayerId {
        self.next_player += 1;
        let id = PlayerId(self.next_player);
        // Hub handles live in their own number space
        let hub = HubHandle(1000 + self.next_player);
        self.players.insert(id, Player::new(id, hub, name));
        self.hubs.insert(hub, id);
        id
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Players sorted by id
    pub fn players(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.values().collect();
        players.sort_by_key(|p| p.id.0);
        players
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.values_mut()
    }

    pub fn settings(&self) -> &ShieldSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ShieldSettings) {
        self.settings = settings;
    }

    /// Fresh item serial
    ///
    /// The counter wraps, skipping 0 and any serial still held in an
    /// inventory, so no two live items ever share a serial.
    pub fn next_serial(&mut self) -> Result<ItemSerial> {
        let live: AHashSet<ItemSerial> = self
            .players
            .values()
            .flat_map(|p| p.inventory.iter().map(|item| item.serial))
            .collect();

        for _ in 0..=u16::MAX {
            self.next_serial = self.next_serial.wrapping_add(1);
            let serial = ItemSerial(self.next_serial);
            if self.next_serial != 0 && !live.contains(&serial) {
                return Ok(serial);
            }
        }
        Err(ShieldError::SerialsExhausted)
    }
}

impl PlayerDirectory for SimHost {
    fn resolve(&self, hub: HubHandle) -> Option<PlayerId> {
        self.hubs.get(&hub).copied()
    }

    fn inventory(&self, player: PlayerId) -> &[Item] {
        self.players
            .get(&player)
            .map(|p| p.inventory.as_slice())
            .unwrap_or(&[])
    }
}

impl StatModule for SimHost {
    fn add_shield(&mut self, player: PlayerId, shield: &ConfiguredShield) -> Option<KillCode> {
        let player = self.players.get_mut(&player)?;
        Some(player.ahp.server_add_process(shield))
    }

    fn kill_shield(&mut self, player: PlayerId, kill_code: KillCode) -> bool {
        self.players
            .get_mut(&player)
            .map(|p| p.ahp.server_kill_process(kill_code))
            .unwrap_or(false)
    }

    fn set_sustain(&mut self, player: PlayerId, kill_code: KillCode, sustain: f32) -> bool {
        self.players
            .get_mut(&player)
            .map(|p| p.ahp.set_sustain(kill_code, sustain))
            .unwrap_or(false)
    }
}

impl ShieldConfigSource for SimHost {
    fn shield_for(&self, armor: ArmorType) -> Option<&ConfiguredShield> {
        self.settings.shield_for(armor)
    }

    fn is_enabled(&self) -> bool {
        self.settings.is_enabled
    }
}
