pub mod articles;
pub mod report;
pub mod scan;
pub mod seo;
pub mod sitemap;

pub use articles::{ArticleDto, BatchItemDto, BatchReportDto, CreatedArticleDto};
pub use report::{ContentReportDto, ContentStatisticsDto, SeoStatusDto};
pub use scan::{ScanGroupDto, ScanOutcomeDto, SkippedFileDto};
pub use seo::SeoAuditItemDto;
pub use sitemap::{SitemapOutcomeDto, SitemapReportDto, SitemapValidationDto};
