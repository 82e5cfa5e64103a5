// src/infrastructure/site_files.rs
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use walkdir::WalkDir;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::site::{SiteFile, SiteStore};
use crate::domain::scan::ARTICLES_DIR;
use crate::infrastructure::fs::write_atomic;

/// Site files on the local filesystem under one root directory.
pub struct FsSiteStore {
    root: PathBuf,
}

impl FsSiteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join a site-relative path onto the root, refusing anything that
    /// would escape it.
    fn resolve(&self, path: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(ApplicationError::validation(format!(
                "path `{path}` must stay inside the site directory"
            )));
        }
        Ok(self.root.join(relative))
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn site_file(&self, path: &Path) -> ApplicationResult<Option<SiteFile>> {
        let Some(relative) = self.relative(path) else {
            tracing::warn!(path = %path.display(), "skipping file with a non UTF-8 name");
            return Ok(None);
        };
        let modified = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|err| io_error(path, err))?;
        Ok(Some(SiteFile {
            path: relative,
            modified: local_date(modified.into()),
        }))
    }
}

fn local_date(modified: DateTime<Local>) -> NaiveDate {
    modified.date_naive()
}

fn io_error(path: &Path, err: io::Error) -> ApplicationError {
    if err.kind() == io::ErrorKind::NotFound {
        ApplicationError::missing_file(path.display().to_string())
    } else {
        ApplicationError::infrastructure(format!("{}: {err}", path.display()))
    }
}

fn is_html(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "html")
}

impl SiteStore for FsSiteStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, path: &str) -> ApplicationResult<String> {
        let full = self.resolve(path)?;
        fs::read_to_string(&full).map_err(|err| io_error(&full, err))
    }

    fn write(&self, path: &str, contents: &str) -> ApplicationResult<()> {
        let full = self.resolve(path)?;
        write_atomic(&full, contents.as_bytes()).map_err(|err| io_error(&full, err))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|full| full.exists())
    }

    fn remove(&self, path: &str) -> ApplicationResult<()> {
        let full = self.resolve(path)?;
        fs::remove_file(&full).map_err(|err| io_error(&full, err))
    }

    fn size(&self, path: &str) -> ApplicationResult<u64> {
        let full = self.resolve(path)?;
        fs::metadata(&full)
            .map(|meta| meta.len())
            .map_err(|err| io_error(&full, err))
    }

    fn list_html(&self) -> ApplicationResult<Vec<SiteFile>> {
        let root_pages = WalkDir::new(&self.root).min_depth(1).max_depth(1);
        let article_pages = WalkDir::new(self.root.join(ARTICLES_DIR)).min_depth(1);

        let mut files = Vec::new();
        for entry in root_pages.into_iter().chain(article_pages) {
            let entry = match entry {
                Ok(entry) => entry,
                // an absent articles/ directory is normal
                Err(err) if err.io_error().is_some_and(|e| e.kind() == io::ErrorKind::NotFound) => {
                    continue;
                }
                Err(err) => return Err(ApplicationError::infrastructure(err.to_string())),
            };
            if !entry.file_type().is_file() || !is_html(entry.path()) {
                continue;
            }
            if let Some(file) = self.site_file(entry.path())? {
                files.push(file);
            }
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_root_pages_and_article_tree_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsSiteStore::new(dir.path());
        store.write("index.html", "<html></html>").unwrap();
        store.write("articles/tax/a.html", "a").unwrap();
        store.write("templates/article-template.html", "t").unwrap();
        store.write("notes.txt", "n").unwrap();

        let paths: Vec<String> = store.list_html().unwrap().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["articles/tax/a.html", "index.html"]);
    }

    #[test]
    fn missing_files_and_escapes_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsSiteStore::new(dir.path());
        assert!(matches!(store.read("nope.html"), Err(ApplicationError::MissingFile(_))));
        assert!(matches!(store.read("../etc/passwd"), Err(ApplicationError::Validation(_))));
        assert!(!store.exists("../anything"));
        assert!(store.list_html().unwrap().is_empty());
    }
}
