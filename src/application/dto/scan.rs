use crate::domain::scan::{ReconciliationReport, ScanListing, ScannedArticle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFileDto {
    pub path: String,
    pub reason: String,
}

/// Pages of one category, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanGroupDto {
    pub category: String,
    pub articles: Vec<ScannedArticle>,
}

impl ScanGroupDto {
    pub fn from_listing(listing: &ScanListing) -> Vec<Self> {
        listing
            .by_category()
            .into_iter()
            .map(|(category, articles)| Self {
                category,
                articles: articles.into_iter().cloned().collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcomeDto {
    pub total: usize,
    pub categories: Vec<ScanGroupDto>,
    /// Absent when the index could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation: Option<ReconciliationReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFileDto>,
}
