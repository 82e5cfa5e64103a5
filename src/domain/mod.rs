pub mod article;
pub mod category;
pub mod errors;
pub mod html;
pub mod ideas;
pub mod scan;
pub mod seo;
pub mod sitemap;
