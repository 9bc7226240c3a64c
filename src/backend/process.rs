//! Backend Process Spawning
//!
//! Starts the backend with the launcher's own stdout/stderr and hands back
//! the child handle without waiting on it.

use std::io;
use std::process::{Child, Command, Stdio};

use crate::config::BackendCommand;
use crate::error::LaunchError;

/// A started backend.
///
/// Dropping this neither waits for nor kills the child; the operating
/// system decides its lifetime relative to the launcher.
#[derive(Debug)]
pub struct BackendProcess {
    child: Child,
}

impl BackendProcess {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }
}

/// Build the command without spawning it.
pub fn build_command(backend: &BackendCommand) -> Command {
    let mut cmd = Command::new(&backend.program);
    cmd.args(&backend.args)
        .current_dir(&backend.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Spawn the backend. Fails if the working directory is missing or the
/// program cannot be started.
pub fn launch(backend: &BackendCommand) -> Result<BackendProcess, LaunchError> {
    let startup_failure = |source: io::Error| LaunchError::StartupFailure {
        program: backend.program.clone(),
        working_dir: backend.working_dir.clone(),
        source,
    };

    if !backend.working_dir.is_dir() {
        return Err(startup_failure(io::Error::new(
            io::ErrorKind::NotFound,
            "working directory does not exist",
        )));
    }

    log::info!(
        "[Backend] Starting backend in {}...",
        backend.working_dir.display()
    );
    log::info!(
        "[Backend] Command: {} {}",
        backend.program,
        backend.args.join(" ")
    );

    let child = build_command(backend).spawn().map_err(startup_failure)?;
    let process = BackendProcess { child };

    log::info!("[Backend] Started (PID: {})", process.pid());
    Ok(process)
}
