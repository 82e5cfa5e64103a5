// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, CreatedArticleDto},
        error::{ApplicationError, ApplicationResult},
        render::{ArticlePage, RelatedArticle, template::unfilled_placeholders},
    },
    config::{ContentSettings, TEMPLATE_FILE},
    domain::{
        article::{ArticleFilename, ArticleIndex, ArticleRecord, ArticleTitle, PublishDate},
        errors::DomainError,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticleCommand {
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub subtitle: Option<String>,
    /// `YYYYMMDD` or `YYYY-MM-DD`; today when absent.
    pub date: Option<String>,
    /// Appended to the configured default keywords.
    pub keywords: Vec<String>,
    /// Section headings; the configured defaults when absent.
    pub table_of_contents: Option<Vec<String>>,
    pub content: Option<String>,
    /// Filenames of registered articles to link below the article.
    pub related: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    subtitle: Option<String>,
    date: Option<String>,
    keywords: Vec<String>,
    table_of_contents: Option<Vec<String>>,
    content: Option<String>,
    related: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn table_of_contents(mut self, sections: Option<Vec<String>>) -> Self {
        self.table_of_contents = sections;
        self
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    pub fn related(mut self, related: Vec<String>) -> Self {
        self.related = related;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            category: self.category.ok_or("category is required")?,
            subcategory: self.subcategory.ok_or("subcategory is required")?,
            subtitle: self.subtitle,
            date: self.date,
            keywords: self.keywords,
            table_of_contents: self.table_of_contents,
            content: self.content,
            related: self.related,
        })
    }
}

/// A command that passed validation and has its filename derived. Nothing
/// has touched the filesystem yet.
pub(super) struct PreparedArticle {
    command: CreateArticleCommand,
    title: ArticleTitle,
    filename: ArticleFilename,
    date: PublishDate,
}

impl PreparedArticle {
    pub(super) fn filename(&self) -> &ArticleFilename {
        &self.filename
    }
}

impl ArticleCommandService {
    /// Render, write and register one article, then refresh the sitemap when
    /// automation asks for it.
    pub fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<CreatedArticleDto> {
        let prepared = self.prepare(command)?;
        let settings = ContentSettings::load_or_init(self.site.as_ref())?;

        let index = self.write_and_register(prepared, &settings)?;
        let article = index
            .articles()
            .last()
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::infrastructure("index empty after registration"))?;

        let sitemap_updated = settings.automation.auto_update_sitemap && self.refresh_sitemap();
        Ok(CreatedArticleDto {
            article,
            total_articles: index.total_articles(),
            sitemap_updated,
        })
    }

    /// Pure validation: title, date, category pair and filename.
    pub(super) fn prepare(&self, command: CreateArticleCommand) -> ApplicationResult<PreparedArticle> {
        let title = ArticleTitle::new(command.title.trim())?;
        let date = match command.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => PublishDate::parse(raw)?,
            None => PublishDate::new(self.clock.today()),
        };
        let filename = self
            .filenames
            .derive(&command.category, &command.subcategory, &title, date)?;

        Ok(PreparedArticle {
            command,
            title,
            filename,
            date,
        })
    }

    /// Write the page, then register it. The page is removed again when
    /// registration fails.
    pub(super) fn write_and_register(
        &self,
        prepared: PreparedArticle,
        settings: &ContentSettings,
    ) -> ApplicationResult<ArticleIndex> {
        let PreparedArticle {
            command,
            title,
            filename,
            date,
        } = prepared;

        let index = self.index_repo.load()?;
        if index.contains(&filename) || self.site.exists(filename.as_str()) {
            return Err(DomainError::DuplicateFilename(filename.into()).into());
        }

        let template = self.site.read(TEMPLATE_FILE).map_err(|err| match err {
            ApplicationError::MissingFile(path) => ApplicationError::missing_template(path),
            other => other,
        })?;

        let category = self
            .categories
            .validate(&command.category, &command.subcategory)?;
        let related = resolve_related(&index, &command.related, settings);
        let sections = command
            .table_of_contents
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| settings.content.default_sections.clone());

        let page = ArticlePage {
            title: &title,
            filename: &filename,
            category,
            published: date,
            subtitle: command.subtitle.as_deref(),
            description: settings.description_for(title.as_str()),
            keywords: merge_keywords(&settings.seo.default_keywords, &command.keywords),
            table_of_contents: &sections,
            content: command.content.as_deref(),
            related: &related,
        };
        let html = page.render(&template);
        let unfilled = unfilled_placeholders(&html);
        if !unfilled.is_empty() {
            tracing::warn!(filename = %filename, placeholders = ?unfilled, "page still contains placeholders");
        }
        self.site.write(filename.as_str(), &html)?;

        let record = ArticleRecord::new(
            filename.clone(),
            title,
            command.category,
            command.subcategory,
            date,
            &self.domain,
        );
        match self.index_repo.register(record, self.clock.now()) {
            Ok(index) => {
                tracing::info!(filename = %filename, total = index.total_articles(), "article created");
                Ok(index)
            }
            Err(err) => {
                if let Err(cleanup) = self.site.remove(filename.as_str()) {
                    tracing::warn!(filename = %filename, error = %cleanup, "could not remove unregistered page");
                }
                Err(err.into())
            }
        }
    }
}

/// Configured keywords first, then the caller's, without repeats.
fn merge_keywords(defaults: &[String], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(defaults.len() + extra.len());
    for keyword in defaults.iter().chain(extra) {
        let keyword = keyword.trim();
        if !keyword.is_empty() && !merged.iter().any(|k| k == keyword) {
            merged.push(keyword.to_string());
        }
    }
    merged
}

fn resolve_related(
    index: &ArticleIndex,
    filenames: &[String],
    settings: &ContentSettings,
) -> Vec<RelatedArticle> {
    filenames
        .iter()
        .filter_map(|name| {
            let record = ArticleFilename::new(name.as_str())
                .ok()
                .and_then(|filename| index.find(&filename));
            if record.is_none() {
                tracing::warn!(filename = %name, "related article is not registered; skipped");
            }
            record
        })
        .map(|record| RelatedArticle {
            title: record.title.to_string(),
            link: record.filename.to_string(),
            description: settings.description_for(record.title.as_str()),
        })
        .collect()
}
