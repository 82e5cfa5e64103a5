mod batch;
mod create;
mod service;

pub use batch::BatchRow;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleCommandService;
