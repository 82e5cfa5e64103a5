// tests/support/mocks/util.rs
use super::time::{fixed_now, fixed_today};
use chrono::{DateTime, NaiveDate, Utc};
use lawsite_core::application::ports::{time::Clock, util::SlugGenerator};

#[derive(Clone, Default)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }

    fn today(&self) -> NaiveDate {
        fixed_today()
    }
}

/// Lowercases and joins words with `-`; enough for ASCII titles.
#[derive(Clone, Default)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
