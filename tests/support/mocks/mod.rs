// tests/support/mocks/mod.rs

pub mod repos;
pub mod time;
pub mod util;

pub use repos::{FailingSaveRepo, InMemoryIndexRepo};
pub use time::{fixed_now, fixed_today};
pub use util::{DummyClock, DummySlug};
