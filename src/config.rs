//! Launch Configuration
//!
//! Fixed port and directory layout for both launcher variants, plus the
//! base-directory lookup used to find them.

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::LaunchError;

/// Port the frontend is served on.
pub const DEFAULT_PORT: u16 = 3000;

/// Frontend bundle directory, relative to the base directory.
pub const DIST_DIR: &str = "dist";

/// Backend directory, relative to the base directory.
pub const BACKEND_DIR: &str = "backend";

/// External process started before the frontend is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCommand {
    pub working_dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl BackendCommand {
    pub fn new<I, S>(working_dir: impl Into<PathBuf>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            working_dir: working_dir.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `node server.js` inside `<base>/backend`
    pub fn node_server(base: &Path) -> Self {
        Self::new(base.join(BACKEND_DIR), "node", ["server.js"])
    }
}

/// Everything the launcher needs, built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Directory served over HTTP
    pub static_root: PathBuf,
    /// TCP port, bound on all interfaces
    pub port: u16,
    /// Backend to start first, if any
    pub backend: Option<BackendCommand>,
    /// How long to wait after binding before opening the browser
    pub browser_open_delay: Duration,
}

impl LaunchConfig {
    /// Backend + frontend, browser opened one second after bind.
    pub fn supervised(base: &Path) -> Self {
        Self {
            static_root: base.join(DIST_DIR),
            port: DEFAULT_PORT,
            backend: Some(BackendCommand::node_server(base)),
            browser_open_delay: Duration::from_secs(1),
        }
    }

    /// Frontend only, browser opened right after bind.
    pub fn frontend_only(base: &Path) -> Self {
        Self {
            static_root: base.join(DIST_DIR),
            port: DEFAULT_PORT,
            backend: None,
            browser_open_delay: Duration::ZERO,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// URL opened in the browser.
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Current working directory, the base for the frontend-only variant.
pub fn working_dir() -> Result<PathBuf, LaunchError> {
    env::current_dir().map_err(LaunchError::WorkingDirectory)
}

/// Base directory for the supervised variant.
///
/// A packaged build keeps `dist` next to the executable; otherwise fall
/// back to the working directory (development runs, `cargo run`).
pub fn supervised_base_dir() -> Result<PathBuf, LaunchError> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let cwd = working_dir()?;
    Ok(pick_base_dir(exe_dir.as_deref(), &cwd))
}

fn pick_base_dir(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = exe_dir {
        if dir.join(DIST_DIR).is_dir() {
            log::info!("[Startup] Using bundle next to executable: {}", dir.display());
            return dir.to_path_buf();
        }
    }
    cwd.to_path_buf()
}
