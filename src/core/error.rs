use thiserror::Error;

use crate::core::types::{ItemSerial, PlayerId};

#[derive(Error, Debug)]
pub enum ShieldError {
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Item {serial} not found in inventory of {player}")]
    ItemNotFound { player: PlayerId, serial: ItemSerial },

    #[error("No free item serials left")]
    SerialsExhausted,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShieldError>;
