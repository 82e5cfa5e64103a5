pub mod entity;
pub mod repository;
pub mod services;
pub mod timestamp;
pub mod value_objects;

pub use entity::{ArticleIndex, ArticleRecord, canonical_url};
pub use repository::ArticleIndexRepository;
pub use value_objects::{ArticleFilename, ArticleTitle, PublishDate};
