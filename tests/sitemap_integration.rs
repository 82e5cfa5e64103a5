// tests/sitemap_integration.rs
mod support;

use lawsite_core::{
    application::commands::ListingSource,
    config::SITEMAP_REPORT_FILE,
};
use support::{SiteFixture, article_command};

const STATIC_PAGES: usize = 7;

fn site_with_articles(titles: &[&str]) -> SiteFixture {
    let site = SiteFixture::new();
    site.disable_sitemap_automation();
    for title in titles {
        site.services
            .article_commands
            .create_article(article_command(title, "inheritance", "wills"))
            .expect("create");
    }
    site
}

#[test]
fn lists_static_pages_then_articles_once() {
    let site = site_with_articles(&["遺囑的效力", "代筆遺囑", "公證遺囑"]);

    let outcome = site
        .services
        .sitemap_commands
        .generate(ListingSource::Index)
        .expect("generate");

    let locs = site.sitemap_locs();
    assert_eq!(outcome.url_count, 3 + STATIC_PAGES);
    assert_eq!(locs.len(), 3 + STATIC_PAGES);
    assert_eq!(locs[0], "https://lawyer880.com/index.html");
    assert_eq!(outcome.page_types.get("article"), Some(&3));

    let mut unique = locs.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), locs.len());

    let robots = site.read("robots.txt");
    assert!(robots.contains("Sitemap: https://lawyer880.com/sitemap.xml"));
}

#[test]
fn regeneration_is_byte_identical() {
    let site = site_with_articles(&["遺囑的效力", "代筆遺囑"]);
    let commands = &site.services.sitemap_commands;

    commands.generate(ListingSource::Index).expect("first run");
    let first = site.read("sitemap.xml");
    commands.generate(ListingSource::Index).expect("second run");

    assert_eq!(site.read("sitemap.xml"), first);
}

#[test]
fn validate_reports_missing_file_then_missing_articles() {
    let site = site_with_articles(&["遺囑的效力"]);
    let commands = &site.services.sitemap_commands;

    let missing = commands.validate().expect("validate");
    assert!(!missing.valid);
    assert_eq!(missing.message, "sitemap.xml not found");

    commands.generate(ListingSource::Index).expect("generate");
    site.services
        .article_commands
        .create_article(article_command("代筆遺囑", "inheritance", "wills"))
        .expect("create after sitemap");

    let stale = commands.validate().expect("validate");
    assert!(!stale.valid);
    assert_eq!(stale.url_count, 1 + STATIC_PAGES);
    assert_eq!(
        stale.missing_articles,
        vec!["https://lawyer880.com/inheritance-wills-代筆遺囑-20250101.html"]
    );

    commands.generate(ListingSource::Index).expect("regenerate");
    let fresh = commands.validate().expect("validate");
    assert!(fresh.valid, "{}", fresh.message);
    assert!(fresh.file_size > 0);
}

#[test]
fn malformed_sitemap_is_invalid_not_an_error() {
    let site = SiteFixture::new();
    site.write("sitemap.xml", "<urlset><url></urlset>");

    let validation = site.services.sitemap_commands.validate().expect("validate");
    assert!(!validation.valid);
    assert_eq!(validation.url_count, 0);
}

#[test]
fn report_is_saved_next_to_the_index() {
    let site = site_with_articles(&["遺囑的效力"]);

    let report = site
        .services
        .sitemap_commands
        .report(ListingSource::Index)
        .expect("report");

    assert_eq!(report.total_pages, 1 + STATIC_PAGES);
    assert!(report.validation.valid);
    assert_eq!(report.domain, "https://lawyer880.com");

    let saved: serde_json::Value =
        serde_json::from_str(&site.read(SITEMAP_REPORT_FILE)).expect("report json");
    assert_eq!(saved["total_pages"], 1 + STATIC_PAGES);
    assert_eq!(saved["page_breakdown"]["article"], 1);
}

#[test]
fn scan_source_picks_up_unregistered_pages() {
    let site = SiteFixture::new();
    site.write(
        "article-probate.html",
        "<html><head><title>Probate</title></head><body><h1>Probate</h1></body></html>",
    );
    site.write(
        "articles/family-custody.html",
        "<html><head><title>Custody</title></head><body></body></html>",
    );
    site.write("index.html", "<html><head><title>Home</title></head></html>");

    let outcome = site
        .services
        .sitemap_commands
        .generate(ListingSource::Scan)
        .expect("generate from scan");

    assert_eq!(outcome.url_count, 2 + STATIC_PAGES);
    let locs = site.sitemap_locs();
    assert!(locs.contains(&"https://lawyer880.com/article-probate.html".to_string()));
    assert!(locs.contains(&"https://lawyer880.com/articles/family-custody.html".to_string()));
}

#[test]
fn scan_source_lists_other_root_pages_with_fallback_policy() {
    let site = SiteFixture::new();
    site.write("about.html", "<html><head><title>About</title></head></html>");
    site.write(
        "article-probate.html",
        "<html><head><title>Probate</title></head><body><h1>Probate</h1></body></html>",
    );
    site.write("googlecaf92c162f582b73.html", "google-site-verification");

    let outcome = site
        .services
        .sitemap_commands
        .generate(ListingSource::Scan)
        .expect("generate from scan");

    assert_eq!(outcome.url_count, 2 + STATIC_PAGES);
    assert_eq!(outcome.page_types.get("other"), Some(&1));
    assert_eq!(outcome.page_types.get("article"), Some(&1));

    let sitemap = site.read("sitemap.xml");
    let about = sitemap
        .split("<url>")
        .find(|block| block.contains("https://lawyer880.com/about.html"))
        .expect("about page listed");
    assert!(about.contains("<priority>0.5</priority>"));
    assert!(about.contains("<changefreq>monthly</changefreq>"));
    assert!(!sitemap.contains("googlecaf92c162f582b73.html"));

    let from_index = site
        .services
        .sitemap_commands
        .generate(ListingSource::Index)
        .expect("generate from index");
    assert_eq!(from_index.url_count, STATIC_PAGES);
}
