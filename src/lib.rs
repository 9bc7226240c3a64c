pub mod backend;
pub mod browser;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod server;

pub use config::{BackendCommand, LaunchConfig};
pub use error::LaunchError;
pub use launcher::{launch, Launcher, Running};
