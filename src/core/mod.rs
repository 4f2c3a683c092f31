pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfiguredShield, ShieldSettings};
pub use error::{Result, ShieldError};
pub use types::{HubHandle, ItemSerial, KillCode, PlayerId};
