//! Run log file.
//!
//! Every package-manager and provisioning command appends its combined
//! stdout/stderr to a plain-text log so operators can inspect exactly what
//! the bootstrap did. This transcript is separate from tracing diagnostics.

use crate::error::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only transcript of a bootstrap run.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// Open (or create) the run log at the given path, creating parent
    /// directories as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Default log location: `logs/groundwork.log` under the current directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("logs/groundwork.log")
    }

    /// Get the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the start of a command invocation.
    pub fn command(&mut self, command: &str) -> Result<()> {
        self.line(&format!("$ {}", command))
    }

    /// Record combined command output, line by line.
    pub fn output(&mut self, output: &str) -> Result<()> {
        for line in output.lines() {
            self.line(line)?;
        }
        Ok(())
    }

    /// Record a status note (detection result, outcome, skip reason).
    pub fn note(&mut self, note: &str) -> Result<()> {
        self.line(note)
    }

    fn line(&mut self, text: &str) -> Result<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.file, "[{}] {}", stamp, text)?;
        Ok(())
    }
}
