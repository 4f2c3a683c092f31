pub mod coordinator;
pub mod process;

pub use coordinator::ShieldCoordinator;
pub use process::{ActiveShield, ShieldProcess};
