//! Handles to shield processes running in the host's stat module

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemSerial, KillCode, PlayerId};

/// Coordinator-side view of one AHP process bound to an armor item
///
/// The process itself is owned by the host's stat module. This handle is
/// enough to find it again and terminate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShieldProcess {
    /// Armor item the shield belongs to
    pub serial: ItemSerial,
    pub kill_code: KillCode,
    /// Last sustain time written to the process
    pub sustain_time: f32,
}

/// A recorded shield and the player whose stat module runs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveShield {
    pub player: PlayerId,
    pub process: ShieldProcess,
}
