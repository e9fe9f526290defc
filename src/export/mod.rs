//! Writing pages to disk and popping them open in a viewer.
//!
//! All the side effects live behind [`SideEffects`], so the rest of the crate
//! can be tested without touching the filesystem or spawning processes.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::errors::ExportError;

pub const DEFAULT_OUTPUT: &str = "output.html";

/// The outside world, as far as exporting is concerned.
pub trait SideEffects {
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()>;

    /// Run a program to completion. A non-zero exit counts as failure.
    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<()>;

    /// Tell the user something.
    fn notify(&mut self, message: &str);
}

/// The real filesystem, real processes, and `tracing` for notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEffects;

impl SideEffects for SystemEffects {
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<()> {
        let status = Command::new(program).args(args).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!(
                "{} exited with {}",
                program, status
            )))
        }
    }

    fn notify(&mut self, message: &str) {
        info!("{}", message);
    }
}

/// Viewer launchers, tried in order until one works: macOS, Windows, then the
/// freedesktop opener.
const OPENERS: [(&str, &[&str]); 3] = [
    ("open", &[]),
    ("cmd", &["/C", "start", ""]),
    ("xdg-open", &[]),
];

/// Saves rendered pages and opens them, through whatever [`SideEffects`] it
/// was given.
#[derive(Debug, Clone)]
pub struct Exporter<E: SideEffects> {
    effects: E,
}

impl Exporter<SystemEffects> {
    pub fn system() -> Exporter<SystemEffects> {
        Exporter::new(SystemEffects)
    }
}

impl<E: SideEffects> Exporter<E> {
    pub fn new(effects: E) -> Exporter<E> {
        Exporter { effects }
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn into_effects(self) -> E {
        self.effects
    }

    /// Write `contents` to `path`. Failure is returned, not swallowed; the
    /// drawing it came from is untouched either way.
    pub fn save(&mut self, contents: &str, path: &Path) -> Result<PathBuf, ExportError> {
        self.effects
            .write_file(path, contents)
            .map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.effects
            .notify(&format!("Drawing saved to {}", path.display()));
        Ok(path.to_path_buf())
    }

    /// Try each platform opener in turn. Returns whether any of them worked;
    /// if none did, the user gets a notification instead of an error.
    pub fn open(&mut self, path: &Path) -> bool {
        let target = path.to_string_lossy();
        for (program, prefix) in OPENERS.iter() {
            let mut args: Vec<&str> = prefix.to_vec();
            args.push(&target);
            match self.effects.run(program, &args) {
                Ok(()) => {
                    debug!(program, path = %target, "opened drawing");
                    return true;
                }
                Err(err) => debug!(program, error = %err, "opener failed"),
            }
        }
        self.effects.notify("Could not open the file automatically");
        false
    }
}

/// Log an export failure without letting it take the session down.
pub fn report(error: &ExportError) {
    warn!("export failed: {}", error);
}
