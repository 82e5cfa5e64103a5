//! Page rendering. Everything here is pure string work over values the
//! command layer has already validated.

pub mod article_page;
pub mod knowledge_page;
pub mod template;

pub use article_page::{ArticlePage, RelatedArticle};
pub use knowledge_page::{KnowledgeEntry, render_knowledge_page};
pub use template::fill_template;
