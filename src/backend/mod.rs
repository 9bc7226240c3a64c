//! Backend Supervision
//!
//! Starts the backend as a fire-and-forget subprocess. No health checks,
//! no restarts, no shutdown handling.

pub mod process;

pub use process::{launch, BackendProcess};
