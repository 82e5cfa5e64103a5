// src/application/ports/time.rs
use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date at the site's location, used for publish dates and
    /// sitemap `lastmod` values.
    fn today(&self) -> NaiveDate;
}
