//! Best-score persistence.
//!
//! The engine only keeps the best score in memory; this store carries it
//! across runs as a small versioned JSON document:
//!
//! ```json
//! { "version": 1, "best_score": 20480 }
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so an
//! interrupted save leaves the previous file intact. A file that exists but
//! cannot be read is renamed to `<name>.json.bak` before the next save, so a
//! lower score never replaces a record the store failed to read.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct BestScoreFile {
    version: u32,
    best_score: u32,
}

/// File-backed best score.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
    /// Value most recently loaded from or written to disk.
    last_synced: Option<u32>,
    /// The last load failed on an existing file; keep it before overwriting.
    unreadable: bool,
}

impl BestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_synced: None,
            unreadable: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable file is moved before the next save.
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Read the stored best score. A missing file reads as 0.
    ///
    /// On any other failure the file is left alone and remembered as
    /// unreadable; the next [`save`](Self::save) moves it to
    /// [`backup_path`](Self::backup_path) first.
    pub fn load(&mut self) -> Result<u32> {
        match read_best_score(&self.path) {
            Ok(best) => {
                self.last_synced = Some(best);
                self.unreadable = false;
                Ok(best)
            }
            Err(e) => {
                self.last_synced = None;
                self.unreadable = true;
                Err(e)
            }
        }
    }

    /// Like [`load`](Self::load), but a broken file is logged and reads as 0.
    pub fn load_or_default(&mut self) -> u32 {
        match self.load() {
            Ok(best) => {
                info!("loaded best score {} from {}", best, self.path.display());
                best
            }
            Err(e) => {
                warn!("ignoring best score file: {:#}", e);
                0
            }
        }
    }

    /// Write `best_score`, creating the parent directory if needed.
    pub fn save(&mut self, best_score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }

        if self.unreadable {
            self.set_aside()?;
        }

        let body = serde_json::to_string_pretty(&BestScoreFile {
            version: FORMAT_VERSION,
            best_score,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), self.path.display()))?;

        self.last_synced = Some(best_score);
        Ok(())
    }

    fn set_aside(&mut self) -> Result<()> {
        let backup = self.backup_path();
        match fs::rename(&self.path, &backup) {
            Ok(()) => warn!(
                "moved unreadable {} to {}",
                self.path.display(),
                backup.display()
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("rename {} -> {}", self.path.display(), backup.display())
                });
            }
        }
        self.unreadable = false;
        Ok(())
    }

    /// Save only when `best_score` differs from what is on disk.
    ///
    /// Returns whether a write happened.
    pub fn checkpoint(&mut self, best_score: u32) -> Result<bool> {
        if self.last_synced == Some(best_score) {
            return Ok(false);
        }
        self.save(best_score)?;
        info!("saved best score {}", best_score);
        Ok(true)
    }
}

fn read_best_score(path: &Path) -> Result<u32> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };

    let file: BestScoreFile =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    if file.version != FORMAT_VERSION {
        bail!(
            "{}: unsupported format version {} (expected {})",
            path.display(),
            file.version,
            FORMAT_VERSION
        );
    }
    Ok(file.best_score)
}
