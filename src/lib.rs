//! Armor Shield - absorptive health pools bound to worn body armor

pub mod core;
pub mod entity;
pub mod host;
pub mod shield;
pub mod simulation;
pub mod stats;
