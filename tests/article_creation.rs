// tests/article_creation.rs
mod support;

use std::sync::Arc;

use lawsite_core::{
    application::{error::ApplicationError, ports::util::SlugGenerator},
    config::SETTINGS_FILE,
    domain::{
        article::{ArticleTitle, PublishDate, services::ArticleFilenameService},
        category::CategoryTable,
        errors::DomainError,
    },
    infrastructure::util::RegexSlugGenerator,
    presentation::cli::error::CliError,
};
use support::{DummySlug, FailingSaveRepo, InMemoryIndexRepo, SiteFixture, article_command, dated_command};

const CJK_FILENAME: &str = "inheritance-tax-planning-遺產稅申報期限與罰則-20250101.html";

#[test]
fn creates_page_index_entry_and_sitemap_for_cjk_title() {
    let site = SiteFixture::new();

    let created = site
        .services
        .article_commands
        .create_article(article_command("遺產稅申報期限與罰則", "inheritance", "tax-planning"))
        .expect("article created");

    assert_eq!(created.article.filename, CJK_FILENAME);
    assert_eq!(created.total_articles, 1);
    assert!(created.sitemap_updated);

    let page = site.read(CJK_FILENAME);
    assert!(page.contains("<h1>遺產稅申報期限與罰則</h1>"));
    assert!(page.contains("繼承法"));
    assert!(page.contains(r#"href="legal-knowledge.html#inheritance""#));
    assert!(page.contains("2025-01-01"));
    assert!(!page.contains("{{"), "unfilled placeholder left in page");

    let index = site.index_value();
    assert_eq!(index["total_articles"], 1);
    assert_eq!(index["articles"][0]["filename"], CJK_FILENAME);
    assert_eq!(index["articles"][0]["date"], "2025-01-01");
    assert_eq!(
        index["articles"][0]["url"],
        format!("https://lawyer880.com/{CJK_FILENAME}")
    );

    let sitemap = site.read("sitemap.xml");
    let entry = sitemap
        .split("<url>")
        .find(|block| block.contains(CJK_FILENAME))
        .expect("article listed in sitemap");
    assert!(entry.contains("<priority>0.6</priority>"));
    assert!(entry.contains("<lastmod>2025-01-01</lastmod>"));
    assert!(site.exists("robots.txt"));
    assert!(site.exists(SETTINGS_FILE), "default settings are written on first use");
}

#[test]
fn invalid_subcategory_writes_nothing() {
    let site = SiteFixture::new();

    let err = site
        .services
        .article_commands
        .create_article(article_command("遺囑的效力", "inheritance", "divorce"))
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidSubcategory { .. })
    ));
    assert_eq!(CliError::from_error(err).code(), 1);
    assert!(site.index_json().is_none());
    assert!(!site.exists("inheritance-divorce-遺囑的效力-20250101.html"));
    assert!(!site.exists("sitemap.xml"));
}

#[test]
fn duplicate_registration_leaves_index_unchanged() {
    let site = SiteFixture::new();
    let commands = &site.services.article_commands;

    commands
        .create_article(article_command("遺產稅申報期限與罰則", "inheritance", "tax-planning"))
        .expect("first create");
    let before = site.index_json().expect("index written");

    let err = commands
        .create_article(article_command("遺產稅申報期限與罰則", "inheritance", "tax-planning"))
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DuplicateFilename(ref name)) if name == CJK_FILENAME
    ));
    assert_eq!(site.index_json().expect("index still there"), before);
}

#[test]
fn total_tracks_every_registration() {
    let site = SiteFixture::new();
    site.disable_sitemap_automation();

    let titles = ["遺囑的效力", "遺囑的撤回", "代筆遺囑", "公證遺囑"];
    for (i, title) in titles.iter().enumerate() {
        let created = site
            .services
            .article_commands
            .create_article(article_command(title, "inheritance", "wills"))
            .expect("create");
        assert_eq!(created.total_articles, i + 1);
        assert!(!created.sitemap_updated);
    }

    let index = site.index_value();
    assert_eq!(index["total_articles"], titles.len());
    assert_eq!(index["articles"].as_array().map(Vec::len), Some(titles.len()));
    assert!(!site.exists("sitemap.xml"));
}

#[test]
fn missing_template_is_an_io_failure() {
    let site = SiteFixture::without_template();

    let err = site
        .services
        .article_commands
        .create_article(article_command("遺囑的效力", "inheritance", "wills"))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::MissingTemplate(_)));
    assert_eq!(CliError::from_error(err).code(), 2);
    assert!(site.index_json().is_none());
}

#[test]
fn failed_registration_removes_written_page() {
    let site = SiteFixture::with_repo(Arc::new(FailingSaveRepo), Arc::new(DummySlug));

    let err = site
        .services
        .article_commands
        .create_article(article_command("Probate Basics", "inheritance", "wills"))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));
    assert!(!site.exists("inheritance-wills-probate-basics-20250101.html"));
}

#[test]
fn related_articles_link_registered_pages_only() {
    let repo = Arc::new(InMemoryIndexRepo::default());
    let site = SiteFixture::with_repo(repo.clone(), Arc::new(DummySlug));
    site.disable_sitemap_automation();
    let commands = &site.services.article_commands;

    commands
        .create_article(dated_command("Probate Basics", "inheritance", "wills", "2025-01-02"))
        .expect("first create");

    let mut command = article_command("Contesting A Will", "inheritance", "disputes");
    command.related = vec![
        "inheritance-wills-probate-basics-20250102.html".into(),
        "not-registered.html".into(),
    ];
    commands.create_article(command).expect("second create");

    let page = site.read("inheritance-disputes-contesting-a-will-20250101.html");
    assert!(page.contains(r#"href="inheritance-wills-probate-basics-20250102.html""#));
    assert!(!page.contains("not-registered.html"));
    assert_eq!(repo.saves(), 2);
    assert_eq!(repo.snapshot().total_articles(), 2);
    assert!(site.index_json().is_none(), "index lives in the injected repository");
}

#[test]
fn bad_date_is_rejected_before_any_write() {
    let site = SiteFixture::new();

    let err = site
        .services
        .article_commands
        .create_article(dated_command("遺囑的效力", "inheritance", "wills", "2025-13-40"))
        .unwrap_err();

    assert!(err.is_validation());
    assert!(!site.exists(SETTINGS_FILE));
}

#[test]
fn overlong_title_is_a_validation_error() {
    let site = SiteFixture::new();
    let title = "遺產稅申報".repeat(18);

    let err = site
        .services
        .article_commands
        .create_article(article_command(&title, "inheritance", "tax-planning"))
        .unwrap_err();

    assert!(err.is_validation(), "{err}");
    assert_eq!(CliError::from_error(err).code(), 1);
    assert!(site.index_json().is_none());
    assert!(!site.exists(SETTINGS_FILE));
}

#[test]
fn colliding_titles_never_share_a_filename() {
    let site = SiteFixture::new();
    site.disable_sitemap_automation();
    let commands = &site.services.article_commands;

    let titles = ["遺囑 效力", "遺囑-效力", "遺囑 - 效力", "  遺囑  效力 "];
    let mut created = 0;
    for title in titles {
        match commands.create_article(article_command(title, "inheritance", "wills")) {
            Ok(_) => created += 1,
            Err(err) => assert!(matches!(
                err,
                ApplicationError::Domain(DomainError::DuplicateFilename(_))
            )),
        }
    }

    let index = site.index_value();
    let mut filenames: Vec<&str> = index["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .filter_map(|record| record["filename"].as_str())
        .collect();
    let registered = filenames.len();
    filenames.sort_unstable();
    filenames.dedup();
    assert_eq!(filenames.len(), registered);
    assert_eq!(registered, created);
    assert_eq!(index["total_articles"], created);
    assert_eq!(created, 1);
}

#[test]
fn filename_derivation_is_stable() {
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator);
    let filenames = ArticleFilenameService::new(Arc::new(CategoryTable::standard()), Arc::clone(&slugger));
    let title = ArticleTitle::new("遺產稅 申報！期限").expect("title");
    let date = PublishDate::parse("20250101").expect("date");

    let first = filenames
        .derive("inheritance", "tax-planning", &title, date)
        .expect("derive");
    let second = filenames
        .derive("inheritance", "tax-planning", &title, date)
        .expect("derive again");
    assert_eq!(first, second);
    assert_eq!(first.as_str(), "inheritance-tax-planning-遺產稅-申報期限-20250101.html");

    let reslugged = ArticleTitle::new(slugger.slugify(title.as_str())).expect("slug title");
    let from_slug = filenames
        .derive("inheritance", "tax-planning", &reslugged, date)
        .expect("derive from slug");
    assert_eq!(from_slug, first);
}
