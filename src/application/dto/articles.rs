use crate::domain::article::ArticleRecord;
use serde::Serialize;

/// Index record as shown to operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDto {
    pub filename: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub date: String,
    pub url: String,
}

impl From<&ArticleRecord> for ArticleDto {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            filename: record.filename.to_string(),
            title: record.title.to_string(),
            category: record.category.clone(),
            subcategory: record.subcategory.clone(),
            date: record.date.iso(),
            url: record.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedArticleDto {
    pub article: ArticleDto,
    pub total_articles: usize,
    /// Whether the sitemap was regenerated after registration.
    pub sitemap_updated: bool,
}

/// Outcome of one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItemDto {
    pub line: usize,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItemDto {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReportDto {
    pub items: Vec<BatchItemDto>,
    pub succeeded: usize,
    pub failed: usize,
    pub sitemap_updated: bool,
}

impl BatchReportDto {
    pub fn new(items: Vec<BatchItemDto>, sitemap_updated: bool) -> Self {
        let succeeded = items.iter().filter(|i| i.is_success()).count();
        let failed = items.len() - succeeded;
        Self {
            items,
            succeeded,
            failed,
            sitemap_updated,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
