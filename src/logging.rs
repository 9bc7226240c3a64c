use env_logger::Env;

/// Console logging at `info` unless `RUST_LOG` says otherwise.
pub fn init() {
    if let Err(e) = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init()
    {
        eprintln!("[Startup] Failed to initialize logging: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_does_not_panic() {
        init();
        init();
        log::info!("[Startup] logging still works");
    }
}
