// src/domain/sitemap.rs
//! Sitemap model: page policies, entry de-duplication, XML rendering and
//! parsing for validation.

use crate::domain::article::canonical_url;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// Site verification file and the raw template: never listed, never scanned.
pub const EXCLUDED_FILES: [&str; 2] = ["googlecaf92c162f582b73.html", "article-template.html"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crawl priority in tenths, rendered `0.0` through `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagePolicy {
    pub priority: Priority,
    pub changefreq: ChangeFreq,
}

impl PagePolicy {
    const fn new(tenths: u8, changefreq: ChangeFreq) -> Self {
        Self {
            priority: Priority(tenths),
            changefreq,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Homepage,
    Service,
    Info,
    Knowledge,
    Article,
    Other,
}

impl PageKind {
    pub fn default_policy(&self) -> PagePolicy {
        match self {
            Self::Homepage => PagePolicy::new(10, ChangeFreq::Weekly),
            Self::Service => PagePolicy::new(9, ChangeFreq::Monthly),
            Self::Info => PagePolicy::new(8, ChangeFreq::Monthly),
            Self::Knowledge => PagePolicy::new(8, ChangeFreq::Weekly),
            Self::Article => PagePolicy::new(6, ChangeFreq::Monthly),
            Self::Other => PagePolicy::new(5, ChangeFreq::Monthly),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Service => "service",
            Self::Info => "info",
            Self::Knowledge => "knowledge",
            Self::Article => "article",
            Self::Other => "other",
        }
    }
}

/// Page type from a root-level file name.
pub fn classify_page(filename: &str) -> PageKind {
    match filename {
        name if name.starts_with("article-") => PageKind::Article,
        "index.html" => PageKind::Homepage,
        "services-tailwind.html" | "service-process.html" => PageKind::Service,
        "team.html" | "cases.html" => PageKind::Info,
        "legal-knowledge.html" => PageKind::Knowledge,
        _ => PageKind::Other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    pub path: String,
    pub policy: PagePolicy,
}

/// Hand-configured pages that are always listed ahead of articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPageTable {
    pages: Vec<StaticPage>,
}

impl StaticPageTable {
    pub fn new(pages: Vec<StaticPage>) -> Self {
        Self { pages }
    }

    pub fn standard() -> Self {
        let page = |path: &str, tenths, changefreq| StaticPage {
            path: path.to_string(),
            policy: PagePolicy::new(tenths, changefreq),
        };
        Self::new(vec![
            page("index.html", 10, ChangeFreq::Weekly),
            page("services-tailwind.html", 9, ChangeFreq::Monthly),
            page("service-process.html", 8, ChangeFreq::Monthly),
            page("team.html", 8, ChangeFreq::Monthly),
            page("cases.html", 8, ChangeFreq::Weekly),
            page("legal-knowledge.html", 8, ChangeFreq::Weekly),
            page("pricing.html", 7, ChangeFreq::Monthly),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaticPage> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.pages.iter().any(|p| p.path == path)
    }
}

impl Default for StaticPageTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn builder(domain: impl Into<String>) -> SitemapBuilder {
        SitemapBuilder {
            domain: domain.into(),
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NAMESPACE}\">\n"));
        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                quick_xml::escape::escape(entry.loc.as_str())
            ));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.lastmod.format("%Y-%m-%d")
            ));
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

/// Accumulates entries, dropping any whose `loc` was already added.
pub struct SitemapBuilder {
    domain: String,
    entries: Vec<SitemapEntry>,
    seen: HashSet<String>,
}

impl SitemapBuilder {
    /// Returns false when the `loc` was already present.
    pub fn push(&mut self, entry: SitemapEntry) -> bool {
        if !self.seen.insert(entry.loc.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Static pages carry `generated_on` as `lastmod`: they have no publish
    /// date of their own.
    pub fn static_pages(mut self, pages: &StaticPageTable, generated_on: NaiveDate) -> Self {
        for page in pages.iter() {
            let loc = canonical_url(&self.domain, &page.path);
            self.push(SitemapEntry {
                loc,
                lastmod: generated_on,
                changefreq: page.policy.changefreq,
                priority: page.policy.priority,
            });
        }
        self
    }

    pub fn article(&mut self, url: impl Into<String>, published: NaiveDate) -> bool {
        let policy = PageKind::Article.default_policy();
        self.push(SitemapEntry {
            loc: url.into(),
            lastmod: published,
            changefreq: policy.changefreq,
            priority: policy.priority,
        })
    }

    /// A page outside the static table, listed under its page type's
    /// default policy. Returns the page type when the entry was added.
    pub fn page(&mut self, path: &str, modified: NaiveDate) -> Option<PageKind> {
        let kind = classify_page(path);
        let policy = kind.default_policy();
        let added = self.push(SitemapEntry {
            loc: canonical_url(&self.domain, path),
            lastmod: modified,
            changefreq: policy.changefreq,
            priority: policy.priority,
        });
        added.then_some(kind)
    }

    pub fn build(self) -> Sitemap {
        Sitemap {
            entries: self.entries,
        }
    }
}

/// `loc` values of a sitemap document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSitemap {
    pub locs: Vec<String>,
}

/// Parse a sitemap and check its shape: a `urlset` root in the sitemap
/// namespace whose `url` children each carry a `loc`.
pub fn parse(xml: &str) -> DomainResult<ParsedSitemap> {
    let invalid = |msg: String| DomainError::Validation(format!("invalid sitemap: {msg}"));

    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut locs = Vec::new();
    let mut url_has_loc = false;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                if stack.is_empty() {
                    check_root(&name, &element)?;
                    saw_root = true;
                } else if name == "url" {
                    url_has_loc = false;
                }
                stack.push(name);
            }
            Ok(Event::Empty(element)) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                if stack.is_empty() {
                    check_root(&name, &element)?;
                    saw_root = true;
                } else if name == "url" {
                    return Err(invalid("url entry without loc".into()));
                }
            }
            Ok(Event::Text(text)) => {
                if stack.last().map(String::as_str) == Some("loc") {
                    let value = text
                        .unescape()
                        .map_err(|err| invalid(err.to_string()))?;
                    let value = value.trim();
                    if !value.is_empty() {
                        locs.push(value.to_string());
                        url_has_loc = true;
                    }
                }
            }
            Ok(Event::End(_)) => {
                if stack.pop().as_deref() == Some("url") && !url_has_loc {
                    return Err(invalid("url entry without loc".into()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(invalid(format!(
                    "{err} at byte {}",
                    reader.buffer_position()
                )));
            }
        }
    }

    if !saw_root {
        return Err(invalid("document has no urlset element".into()));
    }
    if !stack.is_empty() {
        return Err(invalid(format!("unclosed element <{}>", stack.join("/"))));
    }
    Ok(ParsedSitemap { locs })
}

fn check_root(name: &str, element: &quick_xml::events::BytesStart<'_>) -> DomainResult<()> {
    if name != "urlset" {
        return Err(DomainError::Validation(format!(
            "invalid sitemap: root element is <{name}>, expected <urlset>"
        )));
    }
    let namespace = element
        .attributes()
        .filter_map(Result::ok)
        .find(|attr| attr.key.as_ref() == b"xmlns")
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()));
    if namespace.as_deref() != Some(SITEMAP_NAMESPACE) {
        return Err(DomainError::Validation(format!(
            "invalid sitemap: urlset namespace must be {SITEMAP_NAMESPACE}"
        )));
    }
    Ok(())
}

/// robots.txt pointing crawlers at the sitemap and away from tooling.
pub fn render_robots(domain: &str) -> String {
    let sitemap_url = canonical_url(domain, SITEMAP_FILE);
    format!(
        "User-agent: *\n\
         Allow: /\n\
         \n\
         # Sitemap\n\
         Sitemap: {sitemap_url}\n\
         \n\
         # Disallow sensitive files\n\
         Disallow: /{}\n\
         Disallow: /templates/\n\
         Disallow: /tools/\n",
        EXCLUDED_FILES[0]
    )
}
