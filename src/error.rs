use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Everything that can go wrong between startup and the serve loop.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Failed to start {program} in {}: {source}", .working_dir.display())]
    StartupFailure {
        program: String,
        working_dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to bind {addr}: {source}")]
    ListenerBind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),

    #[error("Could not determine working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    #[error("Failed to run {program}: {source}")]
    BrowserOpen {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}
