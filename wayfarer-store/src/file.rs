//! JSON-file-backed adapters for durable local persistence.
//!
//! Visited documents live under a data directory as
//! `visited.<user>.json`, one document per user, replaced wholesale on
//! every save. The catalog source re-reads its document on every fetch
//! so each session opens against a fresh snapshot.

use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wayfarer_core::{Catalog, CatalogSource, VisitedState, VisitedStore};

/// Failure modes shared by the file-backed adapters.
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Visited store writing one JSON document per user under `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory. The directory is
    /// created lazily on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform's conventional data directory for Wayfarer, when
    /// the platform defines one.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wayfarer"))
    }

    fn path_for(&self, user_key: &str) -> PathBuf {
        self.dir.join(format!("visited.{}.json", sanitize(user_key)))
    }
}

/// Keep user keys path-safe without rejecting any of them: anything
/// outside `[A-Za-z0-9._-]` becomes an underscore.
fn sanitize(user_key: &str) -> String {
    user_key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl VisitedStore for JsonFileStore {
    type Error = FileStoreError;

    async fn load_visited(&self, user_key: &str) -> Result<Option<VisitedState>, Self::Error> {
        let path = self.path_for(user_key);
        match fs::read_to_string(&path) {
            Ok(json) => {
                log::debug!("loaded visited document {}", path.display());
                Ok(Some(VisitedState::from_json(&json)?))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_visited(&self, user_key: &str, state: &VisitedState) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(user_key);
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&path, json)?;
        log::debug!(
            "saved visited document {} ({} regions)",
            path.display(),
            state.len()
        );
        Ok(())
    }

    async fn delete_visited(&self, user_key: &str) -> Result<(), Self::Error> {
        match fs::remove_file(self.path_for(user_key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Catalog source reading the canonical catalog document from a path.
///
/// A missing or unreadable document is an error, never an empty
/// catalog; the engine relies on that distinction to avoid pruning
/// visited ids against nothing.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source reading from the given document path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    type Error = FileStoreError;

    async fn fetch_catalog(&self) -> Result<Catalog, Self::Error> {
        let json = fs::read_to_string(&self.path)?;
        let catalog = Catalog::from_json(&json)?;
        log::debug!(
            "fetched catalog from {} ({} regions)",
            self.path.display(),
            catalog.len()
        );
        Ok(catalog)
    }
}
