// src/application/commands/articles/batch.rs
use super::{ArticleCommandService, CreateArticleCommand};
use crate::{
    application::{
        dto::{BatchItemDto, BatchReportDto},
        error::ApplicationResult,
    },
    config::ContentSettings,
};

/// One input row. Rows that could not be parsed still take part so the
/// report covers every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    /// 1-based line in the source file, header included.
    pub line: usize,
    pub title: String,
    pub command: Result<CreateArticleCommand, String>,
}

impl ArticleCommandService {
    /// Create every row independently. A failing row is recorded and the
    /// batch moves on; the sitemap is refreshed once at the end.
    pub fn create_batch(&self, rows: Vec<BatchRow>) -> ApplicationResult<BatchReportDto> {
        let settings = ContentSettings::load_or_init(self.site.as_ref())?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let outcome = row.command.and_then(|command| {
                self.prepare(command)
                    .and_then(|prepared| {
                        let filename = prepared.filename().to_string();
                        self.write_and_register(prepared, &settings).map(|_| filename)
                    })
                    .map_err(|err| err.to_string())
            });

            match outcome {
                Ok(filename) => {
                    tracing::info!(line = row.line, filename = %filename, "batch item created");
                    items.push(BatchItemDto {
                        line: row.line,
                        title: row.title,
                        filename: Some(filename),
                        error: None,
                    });
                }
                Err(error) => {
                    tracing::warn!(line = row.line, title = %row.title, error = %error, "batch item failed");
                    items.push(BatchItemDto {
                        line: row.line,
                        title: row.title,
                        filename: None,
                        error: Some(error),
                    });
                }
            }
        }

        let any_created = items.iter().any(BatchItemDto::is_success);
        let sitemap_updated =
            any_created && settings.automation.auto_update_sitemap && self.refresh_sitemap();

        let report = BatchReportDto::new(items, sitemap_updated);
        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "batch finished"
        );
        Ok(report)
    }
}
