// src/application/commands/knowledge.rs
use std::sync::Arc;

use serde::Serialize;

use crate::{
    application::{
        commands::ListingSource,
        error::ApplicationResult,
        ports::site::SiteStore,
        queries::scan::ScanQueryService,
        render::{KnowledgeEntry, render_knowledge_page},
    },
    config::{ContentSettings, KNOWLEDGE_PAGE},
    domain::{article::ArticleIndexRepository, category::CategoryTable},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgePageOutcome {
    pub path: String,
    pub total_articles: usize,
    pub categories: usize,
}

pub struct KnowledgeCommandService {
    index_repo: Arc<dyn ArticleIndexRepository>,
    site: Arc<dyn SiteStore>,
    scanner: Arc<ScanQueryService>,
    categories: Arc<CategoryTable>,
}

impl KnowledgeCommandService {
    pub fn new(
        index_repo: Arc<dyn ArticleIndexRepository>,
        site: Arc<dyn SiteStore>,
        scanner: Arc<ScanQueryService>,
        categories: Arc<CategoryTable>,
    ) -> Self {
        Self {
            index_repo,
            site,
            scanner,
            categories,
        }
    }

    fn entries(&self, source: ListingSource) -> ApplicationResult<Vec<KnowledgeEntry>> {
        let entries = match source {
            ListingSource::Index => {
                let settings = ContentSettings::load_or_init(self.site.as_ref())?;
                let index = self.index_repo.load()?;
                index
                    .articles()
                    .iter()
                    .map(|record| KnowledgeEntry {
                        filename: record.filename.to_string(),
                        title: record.title.to_string(),
                        description: settings.description_for(record.title.as_str()),
                        category: record.category.clone(),
                        date: record.date.date(),
                    })
                    .collect()
            }
            ListingSource::Scan => self
                .scanner
                .listing()?
                .0
                .articles
                .into_iter()
                .map(|article| KnowledgeEntry {
                    filename: article.filename,
                    title: article.title,
                    description: article.description,
                    category: article.category,
                    date: article.date,
                })
                .collect(),
        };
        Ok(entries)
    }

    /// Rewrite `legal-knowledge.html` from the chosen listing.
    pub fn generate(&self, source: ListingSource) -> ApplicationResult<KnowledgePageOutcome> {
        let entries = self.entries(source)?;
        let html = render_knowledge_page(&entries, &self.categories);
        self.site.write(KNOWLEDGE_PAGE, &html)?;

        let mut categories: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();

        tracing::info!(articles = entries.len(), ?source, "knowledge page written");
        Ok(KnowledgePageOutcome {
            path: KNOWLEDGE_PAGE.to_string(),
            total_articles: entries.len(),
            categories: categories.len(),
        })
    }
}
