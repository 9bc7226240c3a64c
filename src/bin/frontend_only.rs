//! Serves ./dist on port 3000 and opens the browser straight away. No backend.

use std::process::ExitCode;

use dist_launcher::{config, logging, LaunchConfig, LaunchError};

async fn run() -> Result<(), LaunchError> {
    let cwd = config::working_dir()?;
    dist_launcher::launch(LaunchConfig::frontend_only(&cwd)).await
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
