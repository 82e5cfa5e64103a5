use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for ArticleTitle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// File name of a generated article page, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleFilename(String);

impl ArticleFilename {
    /// Longest name most filesystems accept for a single path component.
    pub const MAX_BYTES: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("filename cannot be empty".into()));
        }
        if value.len() > Self::MAX_BYTES {
            return Err(DomainError::Validation(format!(
                "article filename is {} bytes, the limit is {}; shorten the title",
                value.len(),
                Self::MAX_BYTES
            )));
        }
        if !value.ends_with(".html") {
            return Err(DomainError::Validation(format!(
                "article filename must end with .html: {value}"
            )));
        }
        if value.contains("..") || value.contains('\\') || value.starts_with('/') {
            return Err(DomainError::Validation(format!(
                "article filename must stay inside the site root: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleFilename> for String {
    fn from(value: ArticleFilename) -> Self {
        value.0
    }
}

impl TryFrom<String> for ArticleFilename {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Calendar publish date. Stored as `YYYY-MM-DD`, embedded in filenames as
/// `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublishDate(NaiveDate);

impl PublishDate {
    pub const ISO_FORMAT: &'static str = "%Y-%m-%d";
    pub const COMPACT_FORMAT: &'static str = "%Y%m%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Accepts `YYYYMMDD` or `YYYY-MM-DD`.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, Self::COMPACT_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(value, Self::ISO_FORMAT))
            .map(Self)
            .map_err(|_| {
                DomainError::Validation(format!(
                    "invalid date `{value}`, expected YYYYMMDD or YYYY-MM-DD"
                ))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn compact(&self) -> String {
        self.0.format(Self::COMPACT_FORMAT).to_string()
    }

    pub fn iso(&self) -> String {
        self.0.format(Self::ISO_FORMAT).to_string()
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::ISO_FORMAT))
    }
}

impl From<PublishDate> for String {
    fn from(value: PublishDate) -> Self {
        value.iso()
    }
}

impl TryFrom<String> for PublishDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NaiveDate> for PublishDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}
