// src/presentation/cli/mod.rs
//! `lawsite` command line.
//!
//! Structured results go to stdout as JSON; logs go to stderr.

pub mod error;
pub mod handlers;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Content pipeline for the lawyer880.com static site.
#[derive(Debug, Parser)]
#[command(name = "lawsite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Site root (overrides `CONTENT_BASE_DIR`).
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Site origin used for canonical URLs (overrides `SITE_DOMAIN`).
    #[arg(long, global = true)]
    pub domain: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create one article from the template and register it.
    Create(CreateArgs),
    /// Create articles from a CSV file, one per row.
    Batch(BatchArgs),
    /// Print content statistics and recommendations.
    Report,
    /// Regenerate sitemap.xml and robots.txt.
    Sitemap(SitemapArgs),
    /// Audit one page, or every registered article.
    Seo(SeoArgs),
    /// Zip the site's pages and tooling into backups/.
    Backup,
    /// Suggest article topics.
    Ideas(IdeasArgs),
    /// List article pages on disk and compare them with the index.
    Scan,
    /// Regenerate legal-knowledge.html.
    Knowledge(KnowledgeArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub subcategory: String,

    #[arg(long)]
    pub subtitle: Option<String>,

    /// Publish date, `YYYYMMDD` or `YYYY-MM-DD` (default: today).
    #[arg(long)]
    pub date: Option<String>,

    /// Extra keywords, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Section heading; repeat for each section (default: configured sections).
    #[arg(long = "section")]
    pub sections: Vec<String>,

    /// HTML file holding the article body.
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Filename of a registered article to link; repeat up to three times.
    #[arg(long)]
    pub related: Vec<String>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV with `title,category,subcategory[,subtitle,keywords,date]` columns.
    #[arg(long)]
    pub csv: PathBuf,
}

#[derive(Debug, Args)]
pub struct SitemapArgs {
    /// Build from pages found on disk instead of the index.
    #[arg(long)]
    pub from_scan: bool,

    /// Only validate the existing sitemap.
    #[arg(long, conflicts_with = "report")]
    pub validate: bool,

    /// Also save tools/sitemap-report.json.
    #[arg(long)]
    pub report: bool,
}

#[derive(Debug, Args)]
pub struct SeoArgs {
    /// Page to audit, relative to the site root.
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdeasArgs {
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct KnowledgeArgs {
    /// Build from pages found on disk instead of the index.
    #[arg(long)]
    pub from_scan: bool,
}
