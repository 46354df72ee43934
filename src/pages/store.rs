//! File-backed page store.
//!
//! # Responsibilities
//! - Map a title to `<dir>/<title>.txt`
//! - Save page bodies (create or truncate, owner-only permissions)
//! - Load page bodies, reporting a missing file as `NotFound`

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::pages::Page;

/// Extension given to every page file.
pub const PAGE_EXTENSION: &str = "txt";

/// Permission bits for newly created page files.
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// Errors from page storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("open {}: no such file", .path.display())]
    NotFound { path: PathBuf },

    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn from_io(op: &'static str, path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound { path }
        } else {
            StoreError::Io { op, path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Stores each page as a standalone file under one directory.
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `title`.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.root.join(format!("{title}.{PAGE_EXTENSION}"))
    }

    /// Write the page body, creating or truncating its file.
    ///
    /// Permissions apply only when the file is created; an existing file
    /// keeps its mode.
    pub async fn save(&self, page: &Page) -> Result<(), StoreError> {
        let path = self.path_for(&page.title);

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(PAGE_FILE_MODE);

        let mut file = match options.open(&path).await {
            Ok(f) => f,
            Err(e) => return Err(StoreError::Io { op: "open", path, source: e }),
        };

        if let Err(e) = file.write_all(&page.body).await {
            return Err(StoreError::Io { op: "write", path, source: e });
        }
        if let Err(e) = file.flush().await {
            return Err(StoreError::Io { op: "write", path, source: e });
        }

        tracing::debug!(
            title = %page.title,
            path = %path.display(),
            bytes = page.body.len(),
            "Page written"
        );
        Ok(())
    }

    /// Read the full body of `title`.
    pub async fn load(&self, title: &str) -> Result<Page, StoreError> {
        let path = self.path_for(title);
        let body = tokio::fs::read(&path)
            .await
            .map_err(|e| StoreError::from_io("open", path, e))?;
        Ok(Page::new(title, body))
    }
}
