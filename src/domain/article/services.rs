// src/domain/article/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::value_objects::{ArticleFilename, ArticleTitle, PublishDate};
use crate::domain::category::CategoryTable;
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service deriving article filenames of the form
/// `{category}-{subcategory}-{slug}-{YYYYMMDD}.html`.
///
/// The result is deterministic but not unique: two titles that slugify the
/// same way on the same day collide. Uniqueness is enforced at registration.
pub struct ArticleFilenameService {
    categories: Arc<CategoryTable>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleFilenameService {
    pub fn new(categories: Arc<CategoryTable>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            categories,
            generator,
        }
    }

    pub fn derive(
        &self,
        category: &str,
        subcategory: &str,
        title: &ArticleTitle,
        date: PublishDate,
    ) -> DomainResult<ArticleFilename> {
        self.categories.validate(category, subcategory)?;

        let slug = self.generator.slugify(title.as_str());
        if slug.is_empty() {
            return Err(DomainError::Validation(format!(
                "title `{title}` has no characters usable in a filename"
            )));
        }

        ArticleFilename::new(format!(
            "{category}-{subcategory}-{slug}-{}.html",
            date.compact()
        ))
    }
}
