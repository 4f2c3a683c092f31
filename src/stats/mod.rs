pub mod ahp;

pub use ahp::{AhpProcess, AhpStat};
