// src/infrastructure/csv_batch.rs
//! Batch input: one article per CSV row with header columns `title`,
//! `category`, `subcategory` and optionally `subtitle`, `keywords`
//! (`;`-separated) and `date`.

use std::path::Path;

use serde::Deserialize;

use crate::application::commands::articles::{BatchRow, CreateArticleCommand};
use crate::application::error::{ApplicationError, ApplicationResult};

pub const REQUIRED_COLUMNS: [&str; 3] = ["title", "category", "subcategory"];
pub const KEYWORD_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
struct CsvArticleRow {
    title: String,
    category: String,
    subcategory: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl CsvArticleRow {
    fn into_command(self) -> Result<CreateArticleCommand, String> {
        let keywords = self
            .keywords
            .map(|raw| {
                raw.split(KEYWORD_SEPARATOR)
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        CreateArticleCommand::builder()
            .title(self.title)
            .category(self.category)
            .subcategory(self.subcategory)
            .subtitle(self.subtitle)
            .date(self.date)
            .keywords(keywords)
            .build()
            .map_err(str::to_string)
    }
}

/// Parse a batch file. A missing file or missing required column fails the
/// whole batch; a malformed row only fails that row.
pub fn read_batch_file(path: &Path) -> ApplicationResult<Vec<BatchRow>> {
    if !path.is_file() {
        return Err(ApplicationError::missing_file(path.display().to_string()));
    }
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| ApplicationError::infrastructure(format!("{}: {err}", path.display())))?;
    read_batch(reader)
}

pub fn read_batch<R: std::io::Read>(mut reader: csv::Reader<R>) -> ApplicationResult<Vec<BatchRow>> {
    let headers = reader
        .headers()
        .map_err(|err| ApplicationError::validation(format!("unreadable csv header: {err}")))?
        .clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(ApplicationError::validation(format!(
            "csv is missing required columns: {}",
            missing.join(", ")
        )));
    }
    let title_column = headers.iter().position(|h| h == "title");

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        // header is line 1
        let fallback_line = offset + 2;
        let row = match record {
            Ok(record) => {
                let line = record
                    .position()
                    .and_then(|p| usize::try_from(p.line()).ok())
                    .unwrap_or(fallback_line);
                let title = title_column
                    .and_then(|i| record.get(i))
                    .unwrap_or_default()
                    .to_string();
                let command = record
                    .deserialize::<CsvArticleRow>(Some(&headers))
                    .map_err(|err| format!("invalid row: {err}"))
                    .and_then(CsvArticleRow::into_command);
                BatchRow { line, title, command }
            }
            Err(err) => BatchRow {
                line: err
                    .position()
                    .and_then(|p| usize::try_from(p.line()).ok())
                    .unwrap_or(fallback_line),
                title: String::new(),
                command: Err(format!("unreadable row: {err}")),
            },
        };
        rows.push(row);
    }
    Ok(rows)
}
