//! The markdown file new entries are written into.
use super::format_utils::{format_log_header, splice_entry};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A log file on disk: a fixed header followed by entries, newest first.
#[derive(Debug, Clone)]
pub struct LogDocument {
    path: PathBuf,
}

impl LogDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with the fixed header if it is missing.
    ///
    /// Returns `true` when the file was created by this call.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }
        fs::write(&self.path, format_log_header())
            .with_context(|| format!("writing header to {}", self.path.display()))?;
        debug!(path = %self.path.display(), "created log file");
        Ok(true)
    }

    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).with_context(|| format!("reading {}", self.path.display()))
    }

    /// Inserts a rendered entry block right after the header and returns the new content.
    ///
    /// The whole file is rewritten in one go; on any error it is left as it was.
    pub fn insert_entry(&self, block: &str) -> Result<String> {
        self.ensure_exists()?;
        let content = self.read()?;
        let updated = splice_entry(&content, block);
        self.replace(&updated)?;
        debug!(
            path = %self.path.display(),
            bytes = updated.len(),
            "inserted entry"
        );
        Ok(updated)
    }

    /// Writes `content` to a sibling temporary file and renames it over the log.
    fn replace(&self, content: &str) -> Result<()> {
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::Builder::new()
            .prefix(".daily-content")
            .suffix(".tmp")
            .tempfile_in(dir)
            .with_context(|| format!("creating temporary file in {}", dir.display()))?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .with_context(|| format!("copying permissions of {}", self.path.display()))?;
        }
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("writing {}", tmp.path().display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("syncing {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }

    /// The directory holding the file, `None` for a bare file name.
    fn parent_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }
}
