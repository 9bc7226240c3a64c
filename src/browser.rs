//! Default Browser Launching
//!
//! Maps the host platform to its "open this URL" command and starts it
//! without waiting. Failures here are logged, never fatal.

use std::env::consts::OS;
use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::LaunchError;

/// Platforms with a known URL opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    Unsupported(String),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(OS)
    }

    /// Map a `std::env::consts::OS` value.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            other => Platform::Unsupported(other.to_string()),
        }
    }
}

/// Program and arguments that open a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

/// Pure mapping from platform to opener command.
pub fn browser_command(platform: &Platform, url: &str) -> Result<BrowserCommand, LaunchError> {
    let (program, mut args): (&'static str, Vec<String>) = match platform {
        Platform::Linux => ("xdg-open", Vec::new()),
        Platform::Windows => ("rundll32", vec!["url.dll,FileProtocolHandler".to_string()]),
        Platform::MacOs => ("open", Vec::new()),
        Platform::Unsupported(os) => return Err(LaunchError::UnsupportedPlatform(os.clone())),
    };
    args.push(url.to_string());
    Ok(BrowserCommand { program, args })
}

/// Start the opener detached from our stdio.
pub fn spawn_command(cmd: &BrowserCommand) -> io::Result<()> {
    Command::new(cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Resolve the command for `platform` and hand it to `spawner`.
///
/// `spawner` is never called for an unsupported platform.
pub fn open_with<F>(platform: &Platform, url: &str, spawner: F) -> Result<(), LaunchError>
where
    F: FnOnce(&BrowserCommand) -> io::Result<()>,
{
    let cmd = browser_command(platform, url)?;
    spawner(&cmd).map_err(|source| LaunchError::BrowserOpen {
        program: cmd.program.to_string(),
        source,
    })
}

/// Open `url` in the user's default browser.
pub fn open_default_browser(url: &str) -> Result<(), LaunchError> {
    open_with(&Platform::current(), url, spawn_command)
}

/// Run `open` with `url` after `delay` on a background task.
///
/// The task gives up if `cancel` fires before the delay elapses. Errors are
/// logged and swallowed. Pass `open_default_browser` for the real opener.
pub fn schedule_browser_open<F>(
    url: String,
    delay: Duration,
    cancel: CancellationToken,
    open: F,
) -> JoinHandle<()>
where
    F: FnOnce(&str) -> Result<(), LaunchError> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("[Browser] Cancelled before opening {}", url);
                return;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        log::info!("Serving frontend at {}", url);
        if let Err(e) = open(&url) {
            log::warn!("[Browser] Could not open browser: {}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const URL: &str = "http://localhost:3000";

    #[test]
    fn platform_from_os() {
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Unsupported("freebsd".to_string())
        );
    }

    #[test]
    fn command_per_platform() {
        let linux = browser_command(&Platform::Linux, URL).unwrap();
        assert_eq!(linux.program, "xdg-open");
        assert_eq!(linux.args, vec![URL.to_string()]);

        let mac = browser_command(&Platform::MacOs, URL).unwrap();
        assert_eq!(mac.program, "open");
        assert_eq!(mac.args, vec![URL.to_string()]);

        let windows = browser_command(&Platform::Windows, URL).unwrap();
        assert_eq!(windows.program, "rundll32");
        assert_eq!(
            windows.args,
            vec!["url.dll,FileProtocolHandler".to_string(), URL.to_string()]
        );
    }

    #[test]
    fn unsupported_platform_spawns_nothing() {
        let mut spawned = 0;
        let result = open_with(&Platform::Unsupported("haiku".into()), URL, |_| {
            spawned += 1;
            Ok(())
        });

        assert!(matches!(result, Err(LaunchError::UnsupportedPlatform(ref os)) if os == "haiku"));
        assert_eq!(spawned, 0);
    }

    #[test]
    fn spawn_failure_is_browser_open_error() {
        let result = open_with(&Platform::Linux, URL, |_| {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        });

        match result {
            Err(LaunchError::BrowserOpen { program, source }) => {
                assert_eq!(program, "xdg-open");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected BrowserOpen, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn opens_only_after_full_delay() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();

        let handle = schedule_browser_open(
            URL.to_string(),
            Duration::from_secs(1),
            CancellationToken::new(),
            move |url| {
                assert_eq!(url, URL);
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        );

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_before_delay_never_opens() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let cancel = CancellationToken::new();

        let handle = schedule_browser_open(URL.to_string(), Duration::from_secs(1), cancel.clone(), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        cancel.cancel();

        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn open_failure_does_not_panic_task() {
        let handle = schedule_browser_open(URL.to_string(), Duration::ZERO, CancellationToken::new(), |_| {
            Err(LaunchError::UnsupportedPlatform("plan9".into()))
        });

        assert!(handle.await.is_ok());
    }
}
