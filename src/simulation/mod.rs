//! Reference host used by the binary and the integration tests

pub mod host;
pub mod server;

pub use host::SimHost;
pub use server::{PlayerReport, Server};
