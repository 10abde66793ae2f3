//! Save destinations for fetched assets.
//!
//! The batch runner never touches the filesystem directly; it hands each
//! body to a [`SaveSink`] under a derived name. The CLI plugs in a
//! directory-backed sink, tests plug in in-memory ones.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Opaque "save these bytes as a named file" capability.
pub trait SaveSink: Send + Sync {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<()>;
}

/// Sink writing each asset into a fixed directory, created on first use.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SaveSink for DirSink {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir: {}", self.dir.display()))?;
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
