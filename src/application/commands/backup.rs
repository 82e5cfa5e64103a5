// src/application/commands/backup.rs
use std::sync::Arc;

use chrono::Local;

use crate::application::{
    error::ApplicationResult,
    ports::{
        archive::{ArchiveSummary, ContentArchiver},
        time::Clock,
    },
};

pub struct BackupCommandService {
    archiver: Arc<dyn ContentArchiver>,
    clock: Arc<dyn Clock>,
}

impl BackupCommandService {
    pub fn new(archiver: Arc<dyn ContentArchiver>, clock: Arc<dyn Clock>) -> Self {
        Self { archiver, clock }
    }

    /// `content_backup_{YYYYMMDD_HHMMSS}.zip`, stamped in local time.
    pub fn archive_name(&self) -> String {
        format!(
            "content_backup_{}.zip",
            self.clock.now().with_timezone(&Local).format("%Y%m%d_%H%M%S")
        )
    }

    pub fn backup(&self) -> ApplicationResult<ArchiveSummary> {
        let name = self.archive_name();
        let summary = self.archiver.archive(&name)?;
        tracing::info!(path = %summary.path.display(), files = summary.files, "backup written");
        Ok(summary)
    }
}
