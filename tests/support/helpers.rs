// tests/support/helpers.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use super::mocks::DummyClock;
use lawsite_core::{
    application::{
        ports::{site::SiteStore, util::SlugGenerator},
        services::ApplicationServices,
    },
    config::{BACKUP_DIR, ContentSettings, INDEX_FILE, SETTINGS_FILE, TEMPLATE_FILE},
    domain::{article::ArticleIndexRepository, category::CategoryTable, sitemap::StaticPageTable},
    infrastructure::{
        backup::ZipArchiver, repositories::JsonArticleIndexRepository, site_files::FsSiteStore,
        util::RegexSlugGenerator,
    },
};

pub const DOMAIN: &str = "https://lawyer880.com";

/// Article template carrying every placeholder, with enough navigation
/// links to pass the SEO audit.
pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh-TW">
<head>
<title>{{ARTICLE_TITLE}} - 不動產繼承法律880</title>
<meta name="description" content="{{ARTICLE_DESCRIPTION}}">
<meta name="keywords" content="{{ARTICLE_KEYWORDS}}">
<link rel="canonical" href="https://lawyer880.com/{{ARTICLE_FILENAME}}">
</head>
<body>
<nav><a href="index.html">首頁</a> <a href="legal-knowledge.html">法律知識</a></nav>
<h1>{{ARTICLE_TITLE}}</h1>
<p class="subtitle">{{ARTICLE_SUBTITLE}}</p>
<a href="{{CATEGORY_PAGE}}">{{CATEGORY_NAME}}</a>
<time datetime="{{PUBLISH_DATE}}">{{PUBLISH_DATE}}</time>
<time datetime="{{MODIFIED_DATE}}">{{MODIFIED_DATE}}</time>
<div class="toc">{{TABLE_OF_CONTENTS}}</div>
<article>{{ARTICLE_CONTENT}}</article>
<aside>{{RELATED_ARTICLES}}</aside>
<footer><a href="index.html">回首頁</a></footer>
</body>
</html>
"#;

/// A site root in a temp directory with the services wired against it the
/// same way the binary wires them.
pub struct SiteFixture {
    pub dir: TempDir,
    pub services: ApplicationServices,
}

impl SiteFixture {
    pub fn new() -> Self {
        let fixture = Self::without_template();
        fixture.write(TEMPLATE_FILE, TEMPLATE);
        fixture
    }

    pub fn without_template() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let repo = json_repo(dir.path());
        let services = wire(dir.path(), repo, Arc::new(RegexSlugGenerator));
        Self { dir, services }
    }

    /// Same site layout, but the index lives behind `repo`.
    pub fn with_repo(repo: Arc<dyn ArticleIndexRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let services = wire(dir.path(), repo, slugger);
        let fixture = Self { dir, services };
        fixture.write(TEMPLATE_FILE, TEMPLATE);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap_or_else(|err| panic!("read {relative}: {err}"))
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write fixture file");
    }

    pub fn index_json(&self) -> Option<String> {
        fs::read_to_string(self.path(INDEX_FILE)).ok()
    }

    pub fn index_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.read(INDEX_FILE)).expect("index is valid json")
    }

    /// Write settings with sitemap automation switched off.
    pub fn disable_sitemap_automation(&self) {
        let mut settings = ContentSettings::default();
        settings.automation.auto_update_sitemap = false;
        self.write(
            SETTINGS_FILE,
            &serde_json::to_string_pretty(&settings).expect("settings json"),
        );
    }

    /// Every `<loc>` of the written sitemap, in order.
    pub fn sitemap_locs(&self) -> Vec<String> {
        let xml = self.read("sitemap.xml");
        xml.lines()
            .filter_map(|line| {
                let line = line.trim();
                line.strip_prefix("<loc>")
                    .and_then(|rest| rest.strip_suffix("</loc>"))
                    .map(str::to_string)
            })
            .collect()
    }
}

fn json_repo(root: &Path) -> Arc<dyn ArticleIndexRepository> {
    Arc::new(JsonArticleIndexRepository::new(
        root.join(INDEX_FILE),
        Arc::new(CategoryTable::standard()),
        Arc::new(DummyClock),
    ))
}

fn wire(
    root: &Path,
    repo: Arc<dyn ArticleIndexRepository>,
    slugger: Arc<dyn SlugGenerator>,
) -> ApplicationServices {
    let site: Arc<dyn SiteStore> = Arc::new(FsSiteStore::new(root));
    ApplicationServices::new(
        repo,
        site,
        Arc::new(ZipArchiver::new(root, root.join(BACKUP_DIR))),
        Arc::new(DummyClock),
        slugger,
        Arc::new(CategoryTable::standard()),
        Arc::new(StaticPageTable::standard()),
        DOMAIN,
    )
}
