// src/application/ports/archive.rs
use crate::application::error::ApplicationResult;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub files: usize,
}

pub trait ContentArchiver: Send + Sync {
    /// Pack the site's content into an archive called `name`.
    fn archive(&self, name: &str) -> ApplicationResult<ArchiveSummary>;
}
