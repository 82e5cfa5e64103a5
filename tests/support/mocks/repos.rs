// tests/support/mocks/repos.rs
use std::sync::Mutex;

use super::time::fixed_now;
use lawsite_core::domain::{
    article::{ArticleIndex, ArticleIndexRepository},
    category::CategoryTable,
    errors::{DomainError, DomainResult},
};

/// Index kept in memory; counts saves so tests can assert on them.
pub struct InMemoryIndexRepo {
    index: Mutex<ArticleIndex>,
    saves: Mutex<usize>,
}

impl Default for InMemoryIndexRepo {
    fn default() -> Self {
        Self {
            index: Mutex::new(ArticleIndex::new(CategoryTable::standard(), fixed_now())),
            saves: Mutex::new(0),
        }
    }
}

impl InMemoryIndexRepo {
    pub fn saves(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    pub fn snapshot(&self) -> ArticleIndex {
        self.index.lock().unwrap().clone()
    }
}

impl ArticleIndexRepository for InMemoryIndexRepo {
    fn load(&self) -> DomainResult<ArticleIndex> {
        Ok(self.index.lock().unwrap().clone())
    }

    fn save(&self, index: &ArticleIndex) -> DomainResult<()> {
        *self.index.lock().unwrap() = index.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

/// Loads an empty index but refuses every save.
#[derive(Default)]
pub struct FailingSaveRepo;

impl ArticleIndexRepository for FailingSaveRepo {
    fn load(&self) -> DomainResult<ArticleIndex> {
        Ok(ArticleIndex::new(CategoryTable::standard(), fixed_now()))
    }

    fn save(&self, _index: &ArticleIndex) -> DomainResult<()> {
        Err(DomainError::Persistence("disk full".into()))
    }
}
