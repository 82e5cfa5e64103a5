use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lawsite_core::application::{
    error::{EXIT_IO, EXIT_VALIDATION},
    ports::{archive::ContentArchiver, site::SiteStore, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use lawsite_core::config::{AppConfig, ConfigError};
use lawsite_core::domain::{
    article::ArticleIndexRepository, category::CategoryTable, sitemap::StaticPageTable,
};
use lawsite_core::infrastructure::{
    backup::ZipArchiver, repositories::JsonArticleIndexRepository, site_files::FsSiteStore,
    time::SystemClock, util::RegexSlugGenerator,
};
use lawsite_core::presentation::cli::{Cli, error::CliError, handlers};

fn main() -> ExitCode {
    // Allow dotenv files to populate env vars (including RUST_LOG) when present.
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    match bootstrap(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            tracing::error!(error = %err, code, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(code)
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        cli.code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        EXIT_VALIDATION
    } else {
        EXIT_IO
    }
}

fn bootstrap(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?.with_overrides(cli.base_dir, cli.domain)?;
    tracing::debug!(base_dir = %config.base_dir().display(), domain = config.domain(), "configuration loaded");

    let categories = Arc::new(CategoryTable::standard());
    let static_pages = Arc::new(StaticPageTable::standard());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator);
    let site: Arc<dyn SiteStore> = Arc::new(FsSiteStore::new(config.base_dir()));
    let archiver: Arc<dyn ContentArchiver> =
        Arc::new(ZipArchiver::new(config.base_dir(), config.backup_dir()));
    let index_repo: Arc<dyn ArticleIndexRepository> = Arc::new(JsonArticleIndexRepository::new(
        config.index_path(),
        Arc::clone(&categories),
        Arc::clone(&clock),
    ));

    let services = ApplicationServices::new(
        index_repo,
        site,
        archiver,
        clock,
        slugger,
        categories,
        static_pages,
        config.domain(),
    );

    handlers::run(cli.command, &services)?;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    // stdout carries command output; logs go to stderr
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
