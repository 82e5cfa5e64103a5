// src/presentation/cli/handlers.rs
use std::{fs, io, path::Path};

use serde::Serialize;

use super::{
    Commands, CreateArgs, SitemapArgs,
    error::{CliError, CliResult, IntoCliResult},
};
use crate::{
    application::{
        commands::{ListingSource, articles::CreateArticleCommand},
        error::ApplicationError,
        services::ApplicationServices,
    },
    domain::ideas,
    infrastructure::csv_batch,
};

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::from_error(ApplicationError::infrastructure(err.to_string())))?;
    println!("{json}");
    Ok(())
}

fn source(from_scan: bool) -> ListingSource {
    if from_scan {
        ListingSource::Scan
    } else {
        ListingSource::Index
    }
}

fn read_content_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ApplicationError::missing_file(path.display().to_string())
            } else {
                ApplicationError::infrastructure(format!("{}: {err}", path.display()))
            }
        })
        .into_cli()
}

fn create(services: &ApplicationServices, args: CreateArgs) -> CliResult<()> {
    let content = args
        .content_file
        .as_deref()
        .map(read_content_file)
        .transpose()?;
    let command = CreateArticleCommand::builder()
        .title(args.title)
        .category(args.category)
        .subcategory(args.subcategory)
        .subtitle(args.subtitle)
        .date(args.date)
        .keywords(args.keywords)
        .table_of_contents((!args.sections.is_empty()).then_some(args.sections))
        .content(content)
        .related(args.related)
        .build()
        .map_err(|msg| CliError::from_error(ApplicationError::validation(msg)))?;

    let created = services.article_commands.create_article(command).into_cli()?;
    print_json(&created)
}

fn sitemap(services: &ApplicationServices, args: &SitemapArgs) -> CliResult<()> {
    let commands = &services.sitemap_commands;
    if args.validate {
        let validation = commands.validate().into_cli()?;
        print_json(&validation)?;
        if !validation.valid {
            return Err(CliError::partial_failure(validation.message));
        }
        return Ok(());
    }
    if args.report {
        return print_json(&commands.report(source(args.from_scan)).into_cli()?);
    }
    print_json(&commands.generate(source(args.from_scan)).into_cli()?)
}

/// Execute one subcommand against the wired services.
pub fn run(command: Commands, services: &ApplicationServices) -> CliResult<()> {
    match command {
        Commands::Create(args) => create(services, args),
        Commands::Batch(args) => {
            let rows = csv_batch::read_batch_file(&args.csv).into_cli()?;
            let report = services.article_commands.create_batch(rows).into_cli()?;
            print_json(&report)?;
            if report.has_failures() {
                return Err(CliError::partial_failure(format!(
                    "{} of {} batch items failed",
                    report.failed,
                    report.items.len()
                )));
            }
            Ok(())
        }
        Commands::Report => print_json(&services.report_queries.content_report().into_cli()?),
        Commands::Sitemap(args) => sitemap(services, &args),
        Commands::Seo(args) => match args.file {
            Some(file) => print_json(&services.seo_queries.audit_file(&file).into_cli()?),
            None => print_json(&services.seo_queries.audit_registered().into_cli()?),
        },
        Commands::Backup => print_json(&services.backup_commands.backup().into_cli()?),
        Commands::Ideas(args) => print_json(&ideas::suggest(args.category.as_deref())),
        Commands::Scan => print_json(&services.scan_queries.scan().into_cli()?),
        Commands::Knowledge(args) => print_json(
            &services
                .knowledge_commands
                .generate(source(args.from_scan))
                .into_cli()?,
        ),
    }
}
