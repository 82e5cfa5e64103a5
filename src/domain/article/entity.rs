// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleFilename, ArticleTitle, PublishDate};
use crate::domain::category::CategoryTable;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published article as recorded in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub filename: ArticleFilename,
    pub title: ArticleTitle,
    pub category: String,
    pub subcategory: String,
    pub date: PublishDate,
    pub url: String,
}

impl ArticleRecord {
    pub fn new(
        filename: ArticleFilename,
        title: ArticleTitle,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        date: PublishDate,
        domain: &str,
    ) -> Self {
        let url = canonical_url(domain, filename.as_str());
        Self {
            filename,
            title,
            category: category.into(),
            subcategory: subcategory.into(),
            date,
            url,
        }
    }
}

/// `domain + "/" + path`, tolerating a trailing slash on the domain.
pub fn canonical_url(domain: &str, path: &str) -> String {
    format!(
        "{}/{}",
        domain.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The authoritative list of published articles.
///
/// `total_articles` is derived: it is recomputed on load and on every
/// registration and never set on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleIndex {
    #[serde(default)]
    articles: Vec<ArticleRecord>,
    #[serde(default)]
    total_articles: usize,
    #[serde(default)]
    categories: CategoryTable,
    #[serde(with = "super::timestamp")]
    last_updated: DateTime<Utc>,
}

impl ArticleIndex {
    pub fn new(categories: CategoryTable, now: DateTime<Utc>) -> Self {
        Self {
            articles: Vec::new(),
            total_articles: 0,
            categories,
            last_updated: now,
        }
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub fn total_articles(&self) -> usize {
        self.total_articles
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn contains(&self, filename: &ArticleFilename) -> bool {
        self.find(filename).is_some()
    }

    pub fn find(&self, filename: &ArticleFilename) -> Option<&ArticleRecord> {
        self.articles.iter().find(|a| &a.filename == filename)
    }

    /// Append a record. A colliding filename is rejected and leaves the
    /// index untouched.
    pub fn register(&mut self, record: ArticleRecord, now: DateTime<Utc>) -> DomainResult<()> {
        if self.contains(&record.filename) {
            return Err(DomainError::DuplicateFilename(record.filename.into()));
        }
        self.articles.push(record);
        self.total_articles = self.articles.len();
        self.last_updated = now;
        Ok(())
    }

    /// Re-derive counters and swap in the configured category table after
    /// reading a stored index.
    pub fn normalized(mut self, categories: CategoryTable) -> Self {
        self.total_articles = self.articles.len();
        self.categories = categories;
        self
    }

    /// Filenames that appear more than once (only possible in hand-edited
    /// index files).
    pub fn duplicate_filenames(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.articles {
            let name = record.filename.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}
