// src/application/queries/scan.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ScanGroupDto, ScanOutcomeDto, SkippedFileDto},
        error::ApplicationResult,
        ports::site::SiteStore,
    },
    domain::{
        article::ArticleIndexRepository,
        category::CategoryTable,
        errors::DomainError,
        scan::{self, ScanListing, ScannedArticle},
        sitemap::StaticPageTable,
    },
};

/// Read-only listing of article pages found on disk. Never writes the index.
pub struct ScanQueryService {
    index_repo: Arc<dyn ArticleIndexRepository>,
    site: Arc<dyn SiteStore>,
    categories: Arc<CategoryTable>,
    static_pages: Arc<StaticPageTable>,
    domain: String,
}

impl ScanQueryService {
    pub fn new(
        index_repo: Arc<dyn ArticleIndexRepository>,
        site: Arc<dyn SiteStore>,
        categories: Arc<CategoryTable>,
        static_pages: Arc<StaticPageTable>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            index_repo,
            site,
            categories,
            static_pages,
            domain: domain.into(),
        }
    }

    /// Candidate pages with their metadata, plus the files that could not be
    /// read.
    pub fn listing(&self) -> ApplicationResult<(ScanListing, Vec<SkippedFileDto>)> {
        let mut articles = Vec::new();
        let mut skipped = Vec::new();

        for file in self.site.list_html()? {
            if !scan::is_article_candidate(&file.path, &self.categories, &self.static_pages) {
                continue;
            }
            match self.site.read(&file.path) {
                Ok(markup) => articles.push(ScannedArticle::from_page(
                    &file.path,
                    &markup,
                    file.modified,
                    &self.domain,
                )),
                Err(err) => {
                    tracing::warn!(path = %file.path, error = %err, "skipping unreadable page");
                    skipped.push(SkippedFileDto {
                        path: file.path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok((ScanListing::new(articles), skipped))
    }

    /// Listing plus reconciliation against the index. A corrupt index only
    /// drops the reconciliation.
    pub fn scan(&self) -> ApplicationResult<ScanOutcomeDto> {
        let (listing, skipped) = self.listing()?;

        let reconciliation = match self.index_repo.load() {
            Ok(index) => {
                for duplicate in index.duplicate_filenames() {
                    tracing::warn!(filename = duplicate, "index lists the same filename more than once");
                }
                Some(scan::reconcile(&index, &listing))
            }
            Err(err @ DomainError::CorruptIndex { .. }) => {
                tracing::warn!(error = %err, "index unreadable; scan reported without reconciliation");
                None
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(articles = listing.len(), skipped = skipped.len(), "scan finished");
        Ok(ScanOutcomeDto {
            total: listing.len(),
            categories: ScanGroupDto::from_listing(&listing),
            reconciliation,
            skipped,
        })
    }
}
