// src/application/commands/sitemap.rs
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::{
    application::{
        commands::ListingSource,
        dto::{SitemapOutcomeDto, SitemapReportDto, SitemapValidationDto},
        error::{ApplicationError, ApplicationResult},
        ports::{site::SiteStore, time::Clock},
        queries::scan::ScanQueryService,
    },
    config::SITEMAP_REPORT_FILE,
    domain::{
        article::ArticleIndexRepository,
        sitemap::{
            self, EXCLUDED_FILES, PageKind, ROBOTS_FILE, SITEMAP_FILE, Sitemap, StaticPageTable,
            classify_page,
        },
    },
};

/// A sitemap together with how many of its entries fall under each page
/// type.
struct BuiltSitemap {
    sitemap: Sitemap,
    page_types: BTreeMap<String, usize>,
}

pub struct SitemapCommandService {
    index_repo: Arc<dyn ArticleIndexRepository>,
    site: Arc<dyn SiteStore>,
    scanner: Arc<ScanQueryService>,
    static_pages: Arc<StaticPageTable>,
    clock: Arc<dyn Clock>,
    domain: String,
}

impl SitemapCommandService {
    pub fn new(
        index_repo: Arc<dyn ArticleIndexRepository>,
        site: Arc<dyn SiteStore>,
        scanner: Arc<ScanQueryService>,
        static_pages: Arc<StaticPageTable>,
        clock: Arc<dyn Clock>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            index_repo,
            site,
            scanner,
            static_pages,
            clock,
            domain: domain.into(),
        }
    }

    fn build(&self, source: ListingSource) -> ApplicationResult<BuiltSitemap> {
        let mut page_types: BTreeMap<String, usize> = BTreeMap::new();
        let mut builder =
            Sitemap::builder(self.domain.as_str()).static_pages(&self.static_pages, self.clock.today());
        for page in self.static_pages.iter() {
            *page_types
                .entry(classify_page(&page.path).as_str().to_string())
                .or_default() += 1;
        }

        let articles: Vec<(String, chrono::NaiveDate)> = match source {
            ListingSource::Index => self
                .index_repo
                .load()?
                .articles()
                .iter()
                .map(|record| (record.url.clone(), record.date.date()))
                .collect(),
            ListingSource::Scan => self
                .scanner
                .listing()?
                .0
                .articles
                .into_iter()
                .map(|article| (article.url, article.date))
                .collect(),
        };

        for (url, date) in articles {
            if builder.article(url.as_str(), date) {
                *page_types
                    .entry(PageKind::Article.as_str().to_string())
                    .or_default() += 1;
            } else {
                tracing::debug!(url = %url, "duplicate sitemap location skipped");
            }
        }

        if source == ListingSource::Scan {
            for file in self.site.list_html()? {
                let listable = !file.path.contains('/')
                    && !EXCLUDED_FILES.contains(&file.path.as_str())
                    && !self.static_pages.contains(&file.path);
                if !listable {
                    continue;
                }
                if let Some(kind) = builder.page(&file.path, file.modified) {
                    *page_types.entry(kind.as_str().to_string()).or_default() += 1;
                }
            }
        }

        Ok(BuiltSitemap {
            sitemap: builder.build(),
            page_types,
        })
    }

    /// Write `sitemap.xml` and `robots.txt`.
    pub fn generate(&self, source: ListingSource) -> ApplicationResult<SitemapOutcomeDto> {
        let built = self.build(source)?;
        self.site.write(SITEMAP_FILE, &built.sitemap.render())?;
        self.site.write(ROBOTS_FILE, &sitemap::render_robots(&self.domain))?;
        tracing::info!(urls = built.sitemap.len(), ?source, "sitemap written");

        Ok(SitemapOutcomeDto {
            sitemap_path: SITEMAP_FILE.to_string(),
            robots_path: ROBOTS_FILE.to_string(),
            url_count: built.sitemap.len(),
            page_types: built.page_types,
        })
    }

    /// Check the written sitemap's shape and that every registered article is
    /// listed.
    pub fn validate(&self) -> ApplicationResult<SitemapValidationDto> {
        if !self.site.exists(SITEMAP_FILE) {
            return Ok(SitemapValidationDto {
                valid: false,
                url_count: 0,
                file_size: 0,
                message: format!("{SITEMAP_FILE} not found"),
                missing_articles: Vec::new(),
            });
        }

        let xml = self.site.read(SITEMAP_FILE)?;
        let file_size = self.site.size(SITEMAP_FILE)?;
        let parsed = match sitemap::parse(&xml) {
            Ok(parsed) => parsed,
            Err(err) => {
                return Ok(SitemapValidationDto {
                    valid: false,
                    url_count: 0,
                    file_size,
                    message: err.to_string(),
                    missing_articles: Vec::new(),
                });
            }
        };

        let listed: HashSet<&str> = parsed.locs.iter().map(String::as_str).collect();
        let index = self.index_repo.load()?;
        let missing_articles: Vec<String> = index
            .articles()
            .iter()
            .filter(|record| !listed.contains(record.url.as_str()))
            .map(|record| record.url.clone())
            .collect();

        let url_count = parsed.locs.len();
        let message = if missing_articles.is_empty() {
            format!("sitemap contains {url_count} urls")
        } else {
            format!(
                "sitemap contains {url_count} urls but misses {} registered articles",
                missing_articles.len()
            )
        };
        Ok(SitemapValidationDto {
            valid: missing_articles.is_empty(),
            url_count,
            file_size,
            message,
            missing_articles,
        })
    }

    /// Regenerate, validate and save a summary to `tools/sitemap-report.json`.
    pub fn report(&self, source: ListingSource) -> ApplicationResult<SitemapReportDto> {
        let outcome = self.generate(source)?;
        let validation = self.validate()?;

        let report = SitemapReportDto {
            generation_time: self.clock.now(),
            total_pages: outcome.url_count,
            sitemap_path: self.site.root().join(SITEMAP_FILE).display().to_string(),
            domain: self.domain.clone(),
            page_breakdown: outcome.page_types,
            validation,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        self.site.write(SITEMAP_REPORT_FILE, &json)?;
        tracing::info!(path = SITEMAP_REPORT_FILE, "sitemap report saved");
        Ok(report)
    }
}
