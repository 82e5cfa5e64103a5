// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, backup::BackupCommandService,
            knowledge::KnowledgeCommandService, sitemap::SitemapCommandService,
        },
        ports::{archive::ContentArchiver, site::SiteStore, time::Clock, util::SlugGenerator},
        queries::{report::ReportQueryService, scan::ScanQueryService, seo::SeoQueryService},
    },
    domain::{
        article::{ArticleIndexRepository, services::ArticleFilenameService},
        category::CategoryTable,
        sitemap::StaticPageTable,
    },
};

/// Every use case, wired against one site.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub sitemap_commands: Arc<SitemapCommandService>,
    pub knowledge_commands: Arc<KnowledgeCommandService>,
    pub backup_commands: Arc<BackupCommandService>,
    pub scan_queries: Arc<ScanQueryService>,
    pub seo_queries: Arc<SeoQueryService>,
    pub report_queries: Arc<ReportQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index_repo: Arc<dyn ArticleIndexRepository>,
        site: Arc<dyn SiteStore>,
        archiver: Arc<dyn ContentArchiver>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        categories: Arc<CategoryTable>,
        static_pages: Arc<StaticPageTable>,
        domain: &str,
    ) -> Self {
        let scan_queries = Arc::new(ScanQueryService::new(
            Arc::clone(&index_repo),
            Arc::clone(&site),
            Arc::clone(&categories),
            Arc::clone(&static_pages),
            domain,
        ));

        let sitemap_commands = Arc::new(SitemapCommandService::new(
            Arc::clone(&index_repo),
            Arc::clone(&site),
            Arc::clone(&scan_queries),
            Arc::clone(&static_pages),
            Arc::clone(&clock),
            domain,
        ));

        let filenames = Arc::new(ArticleFilenameService::new(
            Arc::clone(&categories),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&index_repo),
            Arc::clone(&site),
            filenames,
            Arc::clone(&categories),
            Arc::clone(&sitemap_commands),
            Arc::clone(&clock),
            domain,
        ));

        let knowledge_commands = Arc::new(KnowledgeCommandService::new(
            Arc::clone(&index_repo),
            Arc::clone(&site),
            Arc::clone(&scan_queries),
            categories,
        ));

        let backup_commands = Arc::new(BackupCommandService::new(archiver, Arc::clone(&clock)));
        let seo_queries = Arc::new(SeoQueryService::new(Arc::clone(&index_repo), Arc::clone(&site)));
        let report_queries = Arc::new(ReportQueryService::new(index_repo, site, clock));

        Self {
            article_commands,
            sitemap_commands,
            knowledge_commands,
            backup_commands,
            scan_queries,
            seo_queries,
            report_queries,
        }
    }
}
