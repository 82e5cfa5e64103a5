// tests/support/mod.rs
//! Temp-dir site fixtures, fake ports and command builders for the
//! integration tests. Each test binary uses a different slice of it.
#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod helpers;
pub mod mocks;

pub use builders::{article_command, dated_command};
pub use helpers::{DOMAIN, SiteFixture, TEMPLATE};
pub use mocks::{DummyClock, DummySlug, FailingSaveRepo, InMemoryIndexRepo, fixed_now, fixed_today};
