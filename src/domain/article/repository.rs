use crate::domain::article::entity::{ArticleIndex, ArticleRecord};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// Durable store for the article index.
pub trait ArticleIndexRepository: Send + Sync {
    /// Read the index. A missing store yields a fresh, empty index; a
    /// malformed one fails with `CorruptIndex`.
    fn load(&self) -> DomainResult<ArticleIndex>;

    /// Replace the stored index. Implementations must not leave a partially
    /// written index behind.
    fn save(&self, index: &ArticleIndex) -> DomainResult<()>;

    /// Read-modify-write of a single registration. Nothing is persisted when
    /// the record is rejected.
    fn register(&self, record: ArticleRecord, now: DateTime<Utc>) -> DomainResult<ArticleIndex> {
        let mut index = self.load()?;
        index.register(record, now)?;
        self.save(&index)?;
        Ok(index)
    }
}
