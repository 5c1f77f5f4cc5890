// SPDX-License-Identifier: MPL-2.0
//! Outbound link dispatch.
//!
//! Every clickable contact or link on the page goes through one
//! [`LinkDispatcher`]. When no opener is installed the call is skipped
//! silently; URLs are never validated and are handed to the platform as-is.

use crate::error::{Error, Result};
use std::fmt;
use std::process::{Command, Stdio};

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands URLs to the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            // The empty string is the window title `start` expects first.
            cmd.args(["/C", "start", "", url]);
            cmd
        }
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        launch(Self::command(url))
    }
}

/// Spawns `cmd` detached from the UI thread and reaps it once it exits.
fn launch(mut cmd: Command) -> Result<()> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::Io(format!("Failed to launch URL handler: {}", e)))?;

    let reaper = std::thread::Builder::new()
        .name("link-reaper".into())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                log::warn!("[link] URL handler exited with {status}");
            }
            Ok(_) => {}
            Err(err) => log::warn!("[link] could not wait for URL handler: {err}"),
        });

    if let Err(err) = reaper {
        log::warn!("[link] could not start reaper thread: {err}");
    }
    Ok(())
}

#[derive(Default)]
pub struct LinkDispatcher {
    opener: Option<Box<dyn LinkOpener>>,
}

impl fmt::Debug for LinkDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkDispatcher")
            .field("installed", &self.is_installed())
            .finish()
    }
}

impl LinkDispatcher {
    /// A dispatcher with nothing installed; every dispatch is a no-op.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_opener(opener: impl LinkOpener + 'static) -> Self {
        Self {
            opener: Some(Box::new(opener)),
        }
    }

    pub fn system() -> Self {
        Self::with_opener(SystemOpener)
    }

    pub fn is_installed(&self) -> bool {
        self.opener.is_some()
    }

    /// Opens `url`, or does nothing when no opener is installed.
    ///
    /// Opener failures are logged and swallowed.
    pub fn dispatch(&self, url: &str) {
        let Some(opener) = &self.opener else {
            log::debug!("[link] no opener installed, skipping {url}");
            return;
        };

        match opener.open(url) {
            Ok(()) => log::info!("[link] opened {url}"),
            Err(err) => log::warn!("[link] could not open {url}: {err}"),
        }
    }
}
