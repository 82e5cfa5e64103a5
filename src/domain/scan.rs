// src/domain/scan.rs
//! Filesystem-derived article listing and its reconciliation against the
//! article index.
//!
//! Everything here is best effort: categories come from a filename
//! heuristic and dates from file modification times, which drift whenever
//! files are copied or redeployed. The listing is a report, never a
//! replacement for the index.

use crate::domain::article::{ArticleIndex, canonical_url};
use crate::domain::category::CategoryTable;
use crate::domain::html;
use crate::domain::sitemap::{EXCLUDED_FILES, StaticPageTable};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Ordered keyword rules; the first rule with a matching keyword wins.
pub const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["inheritance", "estate", "will"], "inheritance"),
    (&["real-estate", "property", "mortgage"], "real-estate"),
    (&["family", "divorce", "custody"], "family-law"),
    (&["criminal"], "criminal-law"),
    (&["corporate", "company"], "corporate-law"),
    (&["labor", "employment"], "labor-law"),
    (&["tax"], "tax-law"),
];

/// Used when no rule matches.
pub const DEFAULT_CATEGORY: &str = "civil-law";

pub const ARTICLES_DIR: &str = "articles";

/// Guess a category from a filename.
///
/// Rule order matters and is kept as-is even where it misfires: anything
/// containing `estate` (including `real-estate-…`) lands in `inheritance`.
pub fn infer_category(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(DEFAULT_CATEGORY, |(_, category)| *category)
}

/// Whether a site-relative path looks like an article page.
///
/// Root-level pages qualify when named `article-*.html` or
/// `{category}-*.html`; everything under `articles/` qualifies. Static pages
/// and excluded files never do.
pub fn is_article_candidate(
    path: &str,
    categories: &CategoryTable,
    static_pages: &StaticPageTable,
) -> bool {
    if !path.ends_with(".html") {
        return false;
    }
    let name = path.rsplit('/').next().unwrap_or(path);
    if EXCLUDED_FILES.iter().any(|f| *f == name) || static_pages.contains(path) {
        return false;
    }
    if path.starts_with(&format!("{ARTICLES_DIR}/")) {
        return true;
    }
    if path.contains('/') {
        return false;
    }
    name.starts_with("article-")
        || categories
            .iter()
            .any(|c| name.starts_with(&format!("{}-", c.key)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedArticle {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub url: String,
}

impl ScannedArticle {
    /// Build a listing entry from a page's markup. The display title is the
    /// first `<h1>`, falling back to `<title>` and then the filename.
    pub fn from_page(path: &str, markup: &str, modified: NaiveDate, domain: &str) -> Self {
        let page_title = html::title(markup).map(html::decode);
        let title = html::first_heading(markup)
            .filter(|h| !h.is_empty())
            .map(|h| html::decode(&h))
            .or(page_title)
            .unwrap_or_else(|| path.to_string());
        let description = html::meta_description(markup)
            .map(html::decode)
            .unwrap_or_default();
        let name = path.rsplit('/').next().unwrap_or(path);

        Self {
            filename: path.to_string(),
            title,
            description,
            category: infer_category(name).to_string(),
            date: modified,
            url: canonical_url(domain, path),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanListing {
    pub articles: Vec<ScannedArticle>,
}

impl ScanListing {
    pub fn new(articles: Vec<ScannedArticle>) -> Self {
        Self { articles }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Group by category in order of first appearance, newest first within
    /// each group.
    pub fn by_category(&self) -> Vec<(String, Vec<&ScannedArticle>)> {
        let mut groups: Vec<(String, Vec<&ScannedArticle>)> = Vec::new();
        for article in &self.articles {
            match groups.iter_mut().find(|(key, _)| *key == article.category) {
                Some((_, items)) => items.push(article),
                None => groups.push((article.category.clone(), vec![article])),
            }
        }
        for (_, items) in &mut groups {
            items.sort_by(|a, b| b.date.cmp(&a.date));
        }
        groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMismatch {
    pub filename: String,
    pub indexed: String,
    pub inferred: String,
}

/// Drift between the index and the files on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    pub matched: usize,
    pub only_in_index: Vec<String>,
    pub only_on_disk: Vec<String>,
    pub category_mismatches: Vec<CategoryMismatch>,
}

impl ReconciliationReport {
    pub fn is_consistent(&self) -> bool {
        self.only_in_index.is_empty() && self.only_on_disk.is_empty()
    }
}

pub fn reconcile(index: &ArticleIndex, listing: &ScanListing) -> ReconciliationReport {
    let on_disk: HashMap<&str, &ScannedArticle> = listing
        .articles
        .iter()
        .map(|a| (a.filename.as_str(), a))
        .collect();
    let indexed: HashSet<&str> = index
        .articles()
        .iter()
        .map(|a| a.filename.as_str())
        .collect();

    let mut report = ReconciliationReport::default();
    for record in index.articles() {
        match on_disk.get(record.filename.as_str()) {
            Some(scanned) => {
                report.matched += 1;
                if scanned.category != record.category {
                    report.category_mismatches.push(CategoryMismatch {
                        filename: record.filename.to_string(),
                        indexed: record.category.clone(),
                        inferred: scanned.category.clone(),
                    });
                }
            }
            None => report.only_in_index.push(record.filename.to_string()),
        }
    }
    report.only_on_disk = listing
        .articles
        .iter()
        .filter(|a| !indexed.contains(a.filename.as_str()))
        .map(|a| a.filename.clone())
        .collect();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleFilename, ArticleRecord, ArticleTitle, PublishDate};
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn inference_is_first_match_wins() {
        assert_eq!(infer_category("article-inheritance-basics.html"), "inheritance");
        assert_eq!(infer_category("article-WILL-drafting.html"), "inheritance");
        // `estate` is checked before `real-estate`
        assert_eq!(infer_category("real-estate-transactions-x.html"), "inheritance");
        assert_eq!(infer_category("article-mortgage.html"), "real-estate");
        assert_eq!(infer_category("article-custody.html"), "family-law");
        assert_eq!(infer_category("article-company-setup.html"), "corporate-law");
        assert_eq!(infer_category("article-tax-return.html"), "tax-law");
        assert_eq!(infer_category("article-contracts.html"), "civil-law");
    }

    #[test]
    fn candidates_skip_static_and_excluded_pages() {
        let categories = CategoryTable::standard();
        let statics = StaticPageTable::standard();
        assert!(is_article_candidate("article-one.html", &categories, &statics));
        assert!(is_article_candidate("tax-law-income-x-20250101.html", &categories, &statics));
        assert!(is_article_candidate("articles/inheritance/a.html", &categories, &statics));
        assert!(!is_article_candidate("index.html", &categories, &statics));
        assert!(!is_article_candidate("article-template.html", &categories, &statics));
        assert!(!is_article_candidate("templates/article-x.html", &categories, &statics));
        assert!(!is_article_candidate("article-one.txt", &categories, &statics));
    }

    #[test]
    fn page_title_falls_back_in_order() {
        let with_h1 = "<title>T</title><h1><b>Heading</b></h1>";
        let with_title = "<title>Only title</title>";
        let a = ScannedArticle::from_page("article-a.html", with_h1, day(1), "https://x.com");
        let b = ScannedArticle::from_page("article-b.html", with_title, day(1), "https://x.com");
        let c = ScannedArticle::from_page("article-c.html", "<p></p>", day(1), "https://x.com");
        assert_eq!(a.title, "Heading");
        assert_eq!(b.title, "Only title");
        assert_eq!(c.title, "article-c.html");
        assert_eq!(a.url, "https://x.com/article-a.html");
    }

    #[test]
    fn extracted_text_is_decoded_once() {
        let markup = r#"<title>A &amp; B</title><meta name="description" content="x &lt; y"><h1>Wills &amp; Trusts</h1>"#;
        let article = ScannedArticle::from_page("article-w.html", markup, day(1), "https://x.com");
        assert_eq!(article.title, "Wills & Trusts");
        assert_eq!(article.description, "x < y");
    }

    #[test]
    fn groups_keep_first_seen_order_and_sort_by_date() {
        let make = |name: &str, d| ScannedArticle::from_page(name, "", day(d), "https://x.com");
        let listing = ScanListing::new(vec![
            make("article-tax-1.html", 1),
            make("article-will-1.html", 2),
            make("article-tax-2.html", 5),
        ]);
        let groups = listing.by_category();
        assert_eq!(groups[0].0, "tax-law");
        assert_eq!(groups[0].1[0].filename, "article-tax-2.html");
        assert_eq!(groups[1].0, "inheritance");
    }

    #[test]
    fn reconcile_reports_both_directions() {
        let mut index = ArticleIndex::new(
            CategoryTable::standard(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        );
        for (name, category) in [
            ("real-estate-mortgages-a-20250101.html", "real-estate"),
            ("tax-law-income-b-20250101.html", "tax-law"),
        ] {
            let record = ArticleRecord::new(
                ArticleFilename::new(name).unwrap(),
                ArticleTitle::new("t").unwrap(),
                category,
                "x",
                PublishDate::parse("20250101").unwrap(),
                "https://x.com",
            );
            index.register(record, Utc::now()).unwrap();
        }
        let listing = ScanListing::new(vec![
            ScannedArticle::from_page("real-estate-mortgages-a-20250101.html", "", day(3), "https://x.com"),
            ScannedArticle::from_page("article-orphan.html", "", day(3), "https://x.com"),
        ]);

        let report = reconcile(&index, &listing);
        assert_eq!(report.matched, 1);
        assert_eq!(report.only_in_index, vec!["tax-law-income-b-20250101.html"]);
        assert_eq!(report.only_on_disk, vec!["article-orphan.html"]);
        assert_eq!(report.category_mismatches[0].inferred, "inheritance");
        assert!(!report.is_consistent());
    }
}
