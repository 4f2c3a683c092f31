//! Core type definitions used throughout the codebase

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Host-assigned identifier of one physical item instance
///
/// Stable for the lifetime of the item and never reused while it exists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[display(fmt = "#{}", _0)]
pub struct ItemSerial(pub u16);

/// Identifier of a connected player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[display(fmt = "player {}", _0)]
pub struct PlayerId(pub u32);

/// Raw handle the host passes with damage notifications
///
/// It must be resolved to a [`PlayerId`] through the player directory before
/// anything else can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[display(fmt = "hub {}", _0)]
pub struct HubHandle(pub u32);

/// Token identifying one AHP process inside a stat module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[display(fmt = "kill code {}", _0)]
pub struct KillCode(pub u32);
