// src/infrastructure/repositories/json_index.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};

use crate::application::ports::time::Clock;
use crate::domain::article::{ArticleIndex, ArticleIndexRepository};
use crate::domain::category::CategoryTable;
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::fs::write_atomic;

/// Article index kept as one pretty-printed JSON document.
pub struct JsonArticleIndexRepository {
    path: PathBuf,
    categories: Arc<CategoryTable>,
    clock: Arc<dyn Clock>,
}

impl JsonArticleIndexRepository {
    pub fn new(path: impl Into<PathBuf>, categories: Arc<CategoryTable>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            categories,
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence(&self, err: &io::Error) -> DomainError {
        DomainError::Persistence(format!("{}: {err}", self.path.display()))
    }
}

impl ArticleIndexRepository for JsonArticleIndexRepository {
    fn load(&self) -> DomainResult<ArticleIndex> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no index yet; starting empty");
                return Ok(ArticleIndex::new((*self.categories).clone(), self.clock.now()));
            }
            Err(err) => return Err(self.persistence(&err)),
        };

        let index: ArticleIndex =
            serde_json::from_str(&raw).map_err(|err| DomainError::CorruptIndex {
                path: self.path.display().to_string(),
                reason: err.to_string(),
            })?;
        Ok(index.normalized((*self.categories).clone()))
    }

    fn save(&self, index: &ArticleIndex) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(index)
            .map_err(|err| DomainError::Persistence(err.to_string()))?;
        write_atomic(&self.path, json.as_bytes()).map_err(|err| self.persistence(&err))?;
        tracing::debug!(path = %self.path.display(), total = index.total_articles(), "index saved");
        Ok(())
    }
}
