// src/infrastructure/backup.rs
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::archive::{ArchiveSummary, ContentArchiver};

/// Directories archived in full, next to the root-level pages.
pub const ARCHIVED_DIRS: [&str; 2] = ["tools", "templates"];

/// Zip (deflate) archives of the site's pages and tooling.
pub struct ZipArchiver {
    root: PathBuf,
    backup_dir: PathBuf,
}

fn infra(context: &str, err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("{context}: {err}"))
}

impl ZipArchiver {
    pub fn new(root: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            backup_dir: backup_dir.into(),
        }
    }

    /// Files to archive with their `/`-separated names inside the zip.
    fn collect(&self) -> ApplicationResult<Vec<(PathBuf, String)>> {
        let mut files = Vec::new();
        let root_pages = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|x| x == "html"));
        for entry in root_pages {
            files.push(entry.into_path());
        }

        for dir in ARCHIVED_DIRS {
            let dir = self.root.join(dir);
            if !dir.is_dir() {
                continue;
            }
            for entry in WalkDir::new(&dir) {
                let entry = entry.map_err(|err| infra("walking backup sources", err))?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        }

        files.sort();
        Ok(files
            .into_iter()
            .filter_map(|path| {
                let name = archive_name(&self.root, &path)?;
                Some((path, name))
            })
            .collect())
    }
}

fn archive_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

impl ContentArchiver for ZipArchiver {
    fn archive(&self, name: &str) -> ApplicationResult<ArchiveSummary> {
        fs::create_dir_all(&self.backup_dir).map_err(|err| infra("creating backup directory", err))?;
        let target = self.backup_dir.join(name);
        let files = self.collect()?;

        let tmp = NamedTempFile::new_in(&self.backup_dir).map_err(|err| infra("creating archive", err))?;
        let mut zip = ZipWriter::new(tmp);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (path, entry_name) in &files {
            zip.start_file(entry_name.as_str(), options)
                .map_err(|err| infra(entry_name, err))?;
            let mut source = File::open(path).map_err(|err| infra(entry_name, err))?;
            io::copy(&mut source, &mut zip).map_err(|err| infra(entry_name, err))?;
        }

        let tmp = zip.finish().map_err(|err| infra("finishing archive", err))?;
        tmp.persist(&target)
            .map_err(|err| infra("saving archive", err.error))?;

        Ok(ArchiveSummary {
            path: target,
            files: files.len(),
        })
    }
}
