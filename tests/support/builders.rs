// tests/support/builders.rs
use lawsite_core::application::commands::articles::CreateArticleCommand;

/// Command with a fixed date so filenames are predictable.
pub fn article_command(title: &str, category: &str, subcategory: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .category(category)
        .subcategory(subcategory)
        .date(Some("20250101".into()))
        .build()
        .expect("complete command")
}

pub fn dated_command(title: &str, category: &str, subcategory: &str, date: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        date: Some(date.to_string()),
        ..article_command(title, category, subcategory)
    }
}
