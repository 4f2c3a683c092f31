//! Damage notifications

use serde::{Deserialize, Serialize};

use crate::core::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCause {
    Firearm,
    Explosion,
    Falldown,
    Scp,
    Unknown,
}

/// What hit the player, passed along with damage-applied notifications
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageContext {
    pub amount: f32,
    pub cause: DamageCause,
    pub attacker: Option<PlayerId>,
}

impl DamageContext {
    pub fn new(amount: f32, cause: DamageCause) -> Self {
        Self {
            amount,
            cause,
            attacker: None,
        }
    }

    pub fn from_attacker(amount: f32, cause: DamageCause, attacker: PlayerId) -> Self {
        Self {
            amount,
            cause,
            attacker: Some(attacker),
        }
    }
}
