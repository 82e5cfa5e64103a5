use super::articles::ArticleDto;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct ContentStatisticsDto {
    pub total_articles: usize,
    pub categories: BTreeMap<String, usize>,
    pub recent_articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoStatusDto {
    pub sitemap_status: &'static str,
    pub robots_txt_status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentReportDto {
    #[serde(with = "crate::domain::article::timestamp")]
    pub generation_time: DateTime<Utc>,
    pub statistics: ContentStatisticsDto,
    pub seo: SeoStatusDto,
    pub recommendations: Vec<String>,
}
