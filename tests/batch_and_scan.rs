// tests/batch_and_scan.rs
mod support;

use lawsite_core::{
    application::{commands::ListingSource, error::ApplicationError},
    config::INDEX_FILE,
    infrastructure::csv_batch,
    presentation::cli::error::CliError,
};
use support::{SiteFixture, article_command};

const BATCH_CSV: &str = "\
title,category,subcategory,subtitle,keywords,date
遺囑的效力,inheritance,wills,,遺囑;效力,20250105
買賣糾紛,real-estate,unknown-sub,,,20250105
代筆遺囑,inheritance,wills,代筆遺囑的要件,,2025-01-06
";

#[test]
fn batch_continues_past_failing_rows() {
    let site = SiteFixture::new();
    site.write("batch.csv", BATCH_CSV);

    let rows = csv_batch::read_batch_file(&site.path("batch.csv")).expect("csv parsed");
    assert_eq!(rows.len(), 3);

    let report = site
        .services
        .article_commands
        .create_batch(rows)
        .expect("batch runs");

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert!(report.has_failures());
    assert!(report.sitemap_updated);

    let failed = &report.items[1];
    assert_eq!(failed.line, 3);
    assert_eq!(failed.title, "買賣糾紛");
    assert!(failed.filename.is_none());
    assert!(failed.error.as_deref().is_some_and(|e| e.contains("unknown-sub")));

    assert!(site.exists("inheritance-wills-遺囑的效力-20250105.html"));
    assert!(site.exists("inheritance-wills-代筆遺囑-20250106.html"));
    assert_eq!(site.index_value()["total_articles"], 2);
    assert_eq!(site.sitemap_locs().len(), 2 + 7);

    let err = CliError::partial_failure("1 of 3 batch items failed");
    assert_eq!(err.code(), 1);
}

#[test]
fn batch_with_missing_column_fails_whole_file() {
    let site = SiteFixture::new();
    site.write("batch.csv", "title,category\n遺囑的效力,inheritance\n");

    let err = csv_batch::read_batch_file(&site.path("batch.csv")).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("subcategory"));

    let missing = csv_batch::read_batch_file(&site.path("nope.csv")).unwrap_err();
    assert!(matches!(missing, ApplicationError::MissingFile(_)));
}

#[test]
fn scan_reconciles_disk_against_index() {
    let site = SiteFixture::new();
    site.disable_sitemap_automation();
    site.services
        .article_commands
        .create_article(article_command("遺囑的效力", "inheritance", "wills"))
        .expect("create");
    site.write(
        "article-unregistered.html",
        "<html><head><title>Unregistered</title><meta name=\"description\" content=\"d\"></head><body><h1>Unregistered</h1></body></html>",
    );
    site.write("about.html", "<html><head><title>About</title></head></html>");

    let outcome = site.services.scan_queries.scan().expect("scan");

    assert_eq!(outcome.total, 2);
    let reconciliation = outcome.reconciliation.expect("index readable");
    assert_eq!(reconciliation.matched, 1);
    assert_eq!(reconciliation.only_on_disk, vec!["article-unregistered.html"]);
    assert!(reconciliation.only_in_index.is_empty());
    assert!(!reconciliation.is_consistent());
}

#[test]
fn scan_tolerates_corrupt_index() {
    let site = SiteFixture::new();
    site.write(INDEX_FILE, "{ not json");
    site.write(
        "article-probate.html",
        "<html><head><title>Probate</title></head><body><h1>Probate</h1></body></html>",
    );

    let outcome = site.services.scan_queries.scan().expect("scan still runs");

    assert_eq!(outcome.total, 1);
    assert!(outcome.reconciliation.is_none());
    assert_eq!(outcome.categories[0].category, "civil-law");
    assert_eq!(outcome.categories[0].articles[0].title, "Probate");

    let err = site
        .services
        .sitemap_commands
        .generate(ListingSource::Index)
        .unwrap_err();
    assert_eq!(CliError::from_error(err).code(), 2);
    assert_eq!(site.read(INDEX_FILE), "{ not json", "corrupt index is never rewritten");
}
