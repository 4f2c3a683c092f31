//! Host collaborator interfaces
//!
//! The shield coordinator never touches players, stats or configuration
//! directly. Everything goes through these traits, bundled as [`ShieldHost`]
//! and handed to the coordinator when it is built.

use crate::core::config::{ConfiguredShield, ShieldSettings};
use crate::core::types::{HubHandle, KillCode, PlayerId};
use crate::entity::{ArmorType, Item};

/// Player lookup and inventory access
pub trait PlayerDirectory {
    /// Resolve the raw handle carried by damage notifications
    fn resolve(&self, hub: HubHandle) -> Option<PlayerId>;

    /// Items the player carries, in inventory order. Empty for unknown players.
    fn inventory(&self, player: PlayerId) -> &[Item];
}

/// The host's AHP stat subsystem
pub trait StatModule {
    /// Start a shield process on `player`. `None` if the player is gone.
    fn add_shield(&mut self, player: PlayerId, shield: &ConfiguredShield) -> Option<KillCode>;

    /// Terminate a process. Returns false if it no longer exists.
    fn kill_shield(&mut self, player: PlayerId, kill_code: KillCode) -> bool;

    /// Overwrite the sustain time of a running process
    fn set_sustain(&mut self, player: PlayerId, kill_code: KillCode, sustain: f32) -> bool;
}

/// Live shield configuration
pub trait ShieldConfigSource {
    fn shield_for(&self, armor: ArmorType) -> Option<&ConfiguredShield>;

    fn is_enabled(&self) -> bool {
        true
    }
}

impl ShieldConfigSource for ShieldSettings {
    fn shield_for(&self, armor: ArmorType) -> Option<&ConfiguredShield> {
        ShieldSettings::shield_for(self, armor)
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }
}

/// Everything the coordinator needs from its host
pub trait ShieldHost: PlayerDirectory + StatModule + ShieldConfigSource {}

impl<T: PlayerDirectory + StatModule + ShieldConfigSource> ShieldHost for T {}
