//! Starts `node server.js` from ./backend, serves ./dist on port 3000 and
//! opens the browser a second later.

use std::process::ExitCode;

use dist_launcher::{config, logging, LaunchConfig, LaunchError};

async fn run() -> Result<(), LaunchError> {
    let base = config::supervised_base_dir()?;
    log::info!("[Startup] Base dir: {}", base.display());
    dist_launcher::launch(LaunchConfig::supervised(&base)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
