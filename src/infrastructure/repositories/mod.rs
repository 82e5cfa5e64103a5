// src/infrastructure/repositories/mod.rs
mod json_index;

pub use json_index::JsonArticleIndexRepository;
