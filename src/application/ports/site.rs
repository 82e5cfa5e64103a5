// src/application/ports/site.rs
use crate::application::error::ApplicationResult;
use chrono::NaiveDate;
use std::path::Path;

/// An HTML file found under the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// Path relative to the site root, `/`-separated.
    pub path: String,
    /// Local date of the last modification.
    pub modified: NaiveDate,
}

/// Access to the site's files. Paths are relative to the site root.
pub trait SiteStore: Send + Sync {
    fn root(&self) -> &Path;

    /// Fails with `MissingFile` when the file does not exist.
    fn read(&self, path: &str) -> ApplicationResult<String>;

    /// Replace a file atomically, creating parent directories as needed.
    fn write(&self, path: &str, contents: &str) -> ApplicationResult<()>;

    fn exists(&self, path: &str) -> bool;

    fn remove(&self, path: &str) -> ApplicationResult<()>;

    fn size(&self, path: &str) -> ApplicationResult<u64>;

    /// Root-level `*.html` files plus everything under `articles/`, sorted
    /// by path.
    fn list_html(&self) -> ApplicationResult<Vec<SiteFile>>;
}
