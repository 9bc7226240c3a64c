//! Startup choreography: backend, root check, bind, delayed browser open,
//! then serve until the process dies.

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::net::TcpListener;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::backend::{self, BackendProcess};
use crate::browser;
use crate::config::LaunchConfig;
use crate::error::LaunchError;
use crate::server;

/// Browser opener used by `Launcher::new`.
pub type OpenFn = fn(&str) -> Result<(), LaunchError>;

/// Runs the startup steps in order. Any failure before `serve` is fatal.
pub struct Launcher<O = OpenFn> {
    config: LaunchConfig,
    open: O,
}

impl Launcher {
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            config,
            open: browser::open_default_browser,
        }
    }
}

impl<O> Launcher<O>
where
    O: FnOnce(&str) -> Result<(), LaunchError> + Send + 'static,
{
    /// Replace the browser opener.
    pub fn with_opener<P>(self, open: P) -> Launcher<P>
    where
        P: FnOnce(&str) -> Result<(), LaunchError> + Send + 'static,
    {
        Launcher {
            config: self.config,
            open,
        }
    }

    /// Everything up to and including the browser-open schedule.
    pub async fn start(self) -> Result<Running, LaunchError> {
        let Launcher { mut config, open } = self;

        let backend = match &config.backend {
            Some(cmd) => Some(backend::launch(cmd)?),
            None => {
                log::info!("[Startup] No backend configured, serving frontend only");
                None
            }
        };

        server::validate_root(&config.static_root)?;

        let listener = server::bind(config.bind_addr()).await?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| LaunchError::ListenerBind {
                addr: config.bind_addr(),
                source,
            })?;

        // Actual port, in case 0 was requested.
        config.port = local_addr.port();
        let shutdown = CancellationToken::new();
        browser::schedule_browser_open(
            config.url(),
            config.browser_open_delay,
            shutdown.clone(),
            open,
        );

        Ok(Running {
            listener,
            local_addr,
            static_root: config.static_root,
            backend,
            shutdown: shutdown.drop_guard(),
        })
    }
}

/// A bound launcher, ready to serve.
pub struct Running {
    listener: TcpListener,
    local_addr: SocketAddr,
    static_root: PathBuf,
    backend: Option<BackendProcess>,
    shutdown: DropGuard,
}

impl Running {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until an I/O error. A pending browser open is cancelled when
    /// this returns.
    pub async fn serve(self) -> Result<(), LaunchError> {
        let Running {
            listener,
            static_root,
            backend: _backend,
            shutdown,
            ..
        } = self;

        let result = server::serve(listener, &static_root).await;
        drop(shutdown);
        result
    }
}

/// Run the whole launcher with the real browser opener.
pub async fn launch(config: LaunchConfig) -> Result<(), LaunchError> {
    Launcher::new(config).start().await?.serve().await
}
