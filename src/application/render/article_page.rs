// src/application/render/article_page.rs
use super::template::fill_template;
use crate::domain::article::{ArticleFilename, ArticleTitle, PublishDate};
use crate::domain::category::Category;
use crate::domain::html::escape;

pub const DEFAULT_SUBTITLE: &str = "專業律師為您詳細解析相關法律問題";
/// Related article cards shown below an article.
pub const RELATED_LIMIT: usize = 3;

const NO_RELATED_CARD: &str = r#"
                <div class="bg-white p-6 shadow-sm border">
                    <h3 class="text-xl font-bold text-primary-dark mb-3">更多相關文章</h3>
                    <p class="text-gray-600">更多精彩內容即將推出...</p>
                </div>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedArticle {
    pub title: String,
    pub link: String,
    pub description: String,
}

/// Everything needed to fill the article template.
#[derive(Debug, Clone)]
pub struct ArticlePage<'a> {
    pub title: &'a ArticleTitle,
    pub filename: &'a ArticleFilename,
    pub category: &'a Category,
    pub published: PublishDate,
    pub subtitle: Option<&'a str>,
    pub description: String,
    pub keywords: Vec<String>,
    pub table_of_contents: &'a [String],
    /// Raw HTML; default sections are generated when absent.
    pub content: Option<&'a str>,
    pub related: &'a [RelatedArticle],
}

impl ArticlePage<'_> {
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        let date = self.published.iso();
        vec![
            ("{{ARTICLE_TITLE}}", escape(self.title.as_str())),
            ("{{ARTICLE_DESCRIPTION}}", escape(&self.description)),
            ("{{ARTICLE_KEYWORDS}}", escape(&self.keywords.join(", "))),
            ("{{ARTICLE_FILENAME}}", self.filename.to_string()),
            (
                "{{ARTICLE_SUBTITLE}}",
                escape(self.subtitle.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SUBTITLE)),
            ),
            ("{{CATEGORY_NAME}}", self.category.name().to_string()),
            ("{{CATEGORY_PAGE}}", self.category.page().to_string()),
            ("{{PUBLISH_DATE}}", date.clone()),
            ("{{MODIFIED_DATE}}", date),
            ("{{TABLE_OF_CONTENTS}}", table_of_contents(self.table_of_contents)),
            (
                "{{ARTICLE_CONTENT}}",
                self.content
                    .filter(|c| !c.trim().is_empty())
                    .map_or_else(
                        || default_content(self.title.as_str(), self.table_of_contents),
                        str::to_string,
                    ),
            ),
            ("{{RELATED_ARTICLES}}", related_articles(self.related)),
        ]
    }

    pub fn render(&self, template: &str) -> String {
        fill_template(template, self.placeholders())
    }
}

/// In-page anchor for a section heading.
pub fn section_anchor(section: &str) -> String {
    section.replace(' ', "-").to_lowercase()
}

pub fn table_of_contents(sections: &[String]) -> String {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            format!(
                r##"
                    <div class="flex items-start">
                        <span class="inline-flex items-center justify-center w-8 h-8 bg-accent-gold text-primary-dark rounded-full text-sm font-bold mr-3 flex-shrink-0">{number}</span>
                        <a href="#{anchor}" class="text-primary-dark hover:text-accent-gold font-medium">{label}</a>
                    </div>"##,
                number = i + 1,
                anchor = section_anchor(section),
                label = escape(section),
            )
        })
        .collect()
}

pub fn related_articles(related: &[RelatedArticle]) -> String {
    if related.is_empty() {
        return NO_RELATED_CARD.to_string();
    }
    related
        .iter()
        .take(RELATED_LIMIT)
        .map(|article| {
            let link = escape(&article.link);
            format!(
                r#"
                <div class="bg-white p-6 shadow-sm border hover:shadow-md transition-shadow">
                    <h3 class="text-xl font-bold text-primary-dark mb-3">
                        <a href="{link}" class="hover:text-accent-gold">{title}</a>
                    </h3>
                    <p class="text-gray-600 mb-4">{description}</p>
                    <a href="{link}" class="text-accent-gold hover:text-yellow-600 font-medium">閱讀更多 →</a>
                </div>"#,
                title = escape(&article.title),
                description = escape(&article.description),
            )
        })
        .collect()
}

fn section_blurb(section: &str, title: &str) -> String {
    match section {
        "法律概念說明" => format!("關於{title}的基本法律概念和重要性..."),
        "相關法條解析" => "相關的法律條文詳細解析...".to_string(),
        "實務案例分享" => "實際案例分析和處理方式...".to_string(),
        "常見問題解答" => "民眾最常遇到的問題和解答...".to_string(),
        "專業建議" => "律師的專業建議和注意事項...".to_string(),
        other => format!("{other}..."),
    }
}

/// Placeholder body with one heading per section, anchored to match the
/// table of contents.
pub fn default_content(title: &str, sections: &[String]) -> String {
    let title = escape(title);
    let mut body = String::new();
    for section in sections {
        body.push_str(&format!(
            "\n            <h2 id=\"{anchor}\">{label}</h2>\n            <p>{blurb}</p>\n",
            anchor = section_anchor(section),
            label = escape(section),
            blurb = section_blurb(section, &title),
        ));
    }
    body.push_str("        ");
    body
}
