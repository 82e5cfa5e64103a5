// src/domain/seo.rs
//! Read-only SEO checks over a single HTML document.

use crate::domain::html;
use serde::{Serialize, Serializer};
use std::fmt;

pub const MAX_TITLE_LENGTH: usize = 60;
pub const MAX_DESCRIPTION_LENGTH: usize = 160;
pub const MIN_INTERNAL_LINKS: usize = 3;

/// Links counted as internal navigation back into the site.
pub const INTERNAL_LINK_TARGETS: [&str; 2] =
    [r#"href="legal-knowledge.html""#, r#"href="index.html""#];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoChecks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_length: Option<usize>,
    pub h1_count: usize,
    pub internal_links: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeoSuggestion {
    MissingTitle,
    TitleTooLong { length: usize },
    MissingDescription,
    DescriptionTooLong { length: usize },
    HeadingCount { h1_count: usize },
    FewInternalLinks { count: usize },
}

impl fmt::Display for SeoSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => f.write_str("missing <title> tag"),
            Self::TitleTooLong { length } => write!(
                f,
                "title is {length} characters, keep it within {MAX_TITLE_LENGTH}"
            ),
            Self::MissingDescription => f.write_str("missing meta description"),
            Self::DescriptionTooLong { length } => write!(
                f,
                "description is {length} characters, keep it within {MAX_DESCRIPTION_LENGTH}"
            ),
            Self::HeadingCount { h1_count } => write!(
                f,
                "unexpected number of h1 tags ({h1_count}), each page should have exactly one"
            ),
            Self::FewInternalLinks { count } => write!(
                f,
                "only {count} internal links, add at least {MIN_INTERNAL_LINKS} links to related pages"
            ),
        }
    }
}

impl Serialize for SeoSuggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    pub filename: String,
    pub checks: SeoChecks,
    pub suggestions: Vec<SeoSuggestion>,
}

impl SeoReport {
    pub fn is_clean(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Run every check against `html`. Lengths are counted in characters, not
/// bytes, since most titles on the site are CJK.
pub fn audit(filename: &str, html: &str) -> SeoReport {
    let mut checks = SeoChecks::default();
    let mut suggestions = Vec::new();

    match html::title(html) {
        Some(title) => {
            let length = title.chars().count();
            checks.title_length = Some(length);
            if length > MAX_TITLE_LENGTH {
                suggestions.push(SeoSuggestion::TitleTooLong { length });
            }
        }
        None => suggestions.push(SeoSuggestion::MissingTitle),
    }

    match html::meta_description(html) {
        Some(description) => {
            let length = description.chars().count();
            checks.description_length = Some(length);
            if length > MAX_DESCRIPTION_LENGTH {
                suggestions.push(SeoSuggestion::DescriptionTooLong { length });
            }
        }
        None => suggestions.push(SeoSuggestion::MissingDescription),
    }

    checks.h1_count = html.matches("<h1").count();
    if checks.h1_count != 1 {
        suggestions.push(SeoSuggestion::HeadingCount {
            h1_count: checks.h1_count,
        });
    }

    checks.internal_links = INTERNAL_LINK_TARGETS
        .iter()
        .map(|target| html.matches(target).count())
        .sum();
    if checks.internal_links < MIN_INTERNAL_LINKS {
        suggestions.push(SeoSuggestion::FewInternalLinks {
            count: checks.internal_links,
        });
    }

    SeoReport {
        filename: filename.to_string(),
        checks,
        suggestions,
    }
}
