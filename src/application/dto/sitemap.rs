use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapOutcomeDto {
    pub sitemap_path: String,
    pub robots_path: String,
    pub url_count: usize,
    pub page_types: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapValidationDto {
    pub valid: bool,
    pub url_count: usize,
    pub file_size: u64,
    pub message: String,
    /// Registered article URLs without a `url` entry.
    pub missing_articles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SitemapReportDto {
    #[serde(with = "crate::domain::article::timestamp")]
    pub generation_time: DateTime<Utc>,
    pub total_pages: usize,
    pub sitemap_path: String,
    pub domain: String,
    pub page_breakdown: BTreeMap<String, usize>,
    pub validation: SitemapValidationDto,
}
