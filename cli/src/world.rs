//! Persisted world state
//!
//! The CLI is the single serializing executor: each mutating command takes
//! the state lock, loads the `StealthNft` snapshot, applies one operation,
//! and writes the snapshot back only if that operation succeeded.

use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use stealth_nft::StealthNft;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub struct WorldStore {
    path: PathBuf,
}

/// Exclusive hold on the state file, released on drop
struct StateLock {
    path: PathBuf,
}

impl StateLock {
    fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                writeln!(file, "{}", std::process::id())?;
                Ok(Self {
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => bail!(
                "World state is locked by another stealthnft command ({}). \
                 If no command is running, remove the lock file.",
                path.display()
            ),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to create lock {}", path.display()))
            }
        }
    }
}

impl Drop for StateLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to release state lock");
        }
    }
}

impl WorldStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    /// Load the snapshot, or an empty world if none exists yet
    pub fn load(&self) -> Result<StealthNft> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no world state yet, starting empty");
            return Ok(StealthNft::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse world state {}", self.path.display()))
    }

    /// Write the snapshot to a fresh temporary file and rename it into place
    fn save(&self, world: &StealthNft) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        serde_json::to_writer_pretty(tmp.as_file_mut(), world)?;
        tmp.as_file_mut().flush()?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!(
            path = %self.path.display(),
            minted = world.ledger().total_minted(),
            "world state saved"
        );
        Ok(())
    }

    /// Apply one operation under the state lock; the snapshot is saved only
    /// when it succeeds
    pub fn apply<T>(
        &self,
        op: impl FnOnce(&mut StealthNft) -> stealth_nft::Result<T>,
    ) -> Result<T> {
        let _lock = StateLock::acquire(&self.lock_path())?;

        let mut world = self.load()?;
        let out = op(&mut world)?;
        self.save(&world)?;
        Ok(out)
    }
}
