// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{ListingSource, sitemap::SitemapCommandService},
        ports::{site::SiteStore, time::Clock},
    },
    domain::{
        article::{ArticleIndexRepository, services::ArticleFilenameService},
        category::CategoryTable,
    },
};

pub struct ArticleCommandService {
    pub(super) index_repo: Arc<dyn ArticleIndexRepository>,
    pub(super) site: Arc<dyn SiteStore>,
    pub(super) filenames: Arc<ArticleFilenameService>,
    pub(super) categories: Arc<CategoryTable>,
    pub(super) sitemap: Arc<SitemapCommandService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) domain: String,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index_repo: Arc<dyn ArticleIndexRepository>,
        site: Arc<dyn SiteStore>,
        filenames: Arc<ArticleFilenameService>,
        categories: Arc<CategoryTable>,
        sitemap: Arc<SitemapCommandService>,
        clock: Arc<dyn Clock>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            index_repo,
            site,
            filenames,
            categories,
            sitemap,
            clock,
            domain: domain.into(),
        }
    }

    /// Regenerate sitemap and robots.txt from the index. Failures are logged
    /// and reported as `false`; the articles already written stay.
    pub(super) fn refresh_sitemap(&self) -> bool {
        match self.sitemap.generate(ListingSource::Index) {
            Ok(outcome) => {
                tracing::info!(urls = outcome.url_count, "sitemap refreshed");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "sitemap refresh failed; article kept");
                false
            }
        }
    }
}
