// src/application/queries/report.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, ContentReportDto, ContentStatisticsDto, SeoStatusDto},
        error::ApplicationResult,
        ports::{site::SiteStore, time::Clock},
    },
    domain::{
        article::{ArticleIndex, ArticleIndexRepository},
        sitemap::{ROBOTS_FILE, SITEMAP_FILE},
    },
};

/// Below this many articles the report suggests writing more.
pub const TARGET_ARTICLE_COUNT: usize = 50;
pub const RECENT_ARTICLES: usize = 10;
/// Largest category may hold at most this many times the smallest.
pub const MAX_CATEGORY_RATIO: usize = 3;

pub struct ReportQueryService {
    index_repo: Arc<dyn ArticleIndexRepository>,
    site: Arc<dyn SiteStore>,
    clock: Arc<dyn Clock>,
}

fn file_status(exists: bool) -> &'static str {
    if exists { "exists" } else { "missing" }
}

impl ReportQueryService {
    pub fn new(
        index_repo: Arc<dyn ArticleIndexRepository>,
        site: Arc<dyn SiteStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            index_repo,
            site,
            clock,
        }
    }

    pub fn content_report(&self) -> ApplicationResult<ContentReportDto> {
        let index = self.index_repo.load()?;
        let statistics = statistics(&index);
        let seo = SeoStatusDto {
            sitemap_status: file_status(self.site.exists(SITEMAP_FILE)),
            robots_txt_status: file_status(self.site.exists(ROBOTS_FILE)),
        };
        let recommendations = recommendations(&statistics, &seo);

        Ok(ContentReportDto {
            generation_time: self.clock.now(),
            statistics,
            seo,
            recommendations,
        })
    }
}

fn statistics(index: &ArticleIndex) -> ContentStatisticsDto {
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for record in index.articles() {
        *categories.entry(record.category.clone()).or_default() += 1;
    }

    let mut recent: Vec<_> = index.articles().iter().collect();
    // stable sort keeps registration order among same-day articles
    recent.sort_by(|a, b| b.date.cmp(&a.date));

    ContentStatisticsDto {
        total_articles: index.total_articles(),
        categories,
        recent_articles: recent
            .into_iter()
            .take(RECENT_ARTICLES)
            .map(ArticleDto::from)
            .collect(),
    }
}

fn recommendations(statistics: &ContentStatisticsDto, seo: &SeoStatusDto) -> Vec<String> {
    let mut out = Vec::new();
    if statistics.total_articles < TARGET_ARTICLE_COUNT {
        out.push("考慮增加更多文章內容以提升SEO排名".to_string());
    }
    if seo.sitemap_status == "missing" {
        out.push("缺少sitemap.xml文件，建議立即生成".to_string());
    }
    let max = statistics.categories.values().max();
    let min = statistics.categories.values().min();
    if max.zip(min).is_some_and(|(max, min)| *max > min * MAX_CATEGORY_RATIO) {
        out.push("文章分類分布不均，建議平衡各類別內容".to_string());
    }
    out
}
