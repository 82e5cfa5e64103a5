// src/application/queries/seo.rs
use std::sync::Arc;

use crate::{
    application::{dto::SeoAuditItemDto, error::ApplicationResult, ports::site::SiteStore},
    domain::{
        article::ArticleIndexRepository,
        seo::{self, SeoReport},
    },
};

pub struct SeoQueryService {
    index_repo: Arc<dyn ArticleIndexRepository>,
    site: Arc<dyn SiteStore>,
}

impl SeoQueryService {
    pub fn new(index_repo: Arc<dyn ArticleIndexRepository>, site: Arc<dyn SiteStore>) -> Self {
        Self { index_repo, site }
    }

    /// Audit one page. Fails with `MissingFile` when it does not exist.
    pub fn audit_file(&self, path: &str) -> ApplicationResult<SeoReport> {
        let html = self.site.read(path)?;
        Ok(seo::audit(path, &html))
    }

    /// Audit every registered article, one result per article.
    pub fn audit_registered(&self) -> ApplicationResult<Vec<SeoAuditItemDto>> {
        let index = self.index_repo.load()?;
        let items = index
            .articles()
            .iter()
            .map(|record| {
                let filename = record.filename.to_string();
                match self.audit_file(&filename) {
                    Ok(report) => SeoAuditItemDto {
                        filename,
                        report: Some(report),
                        error: None,
                    },
                    Err(err) => {
                        tracing::warn!(filename = %filename, error = %err, "seo audit failed");
                        SeoAuditItemDto {
                            filename,
                            report: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect();
        Ok(items)
    }
}
