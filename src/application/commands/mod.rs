pub mod articles;
pub mod backup;
pub mod knowledge;
pub mod sitemap;

/// Where a generated listing takes its articles from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingSource {
    /// Registered articles (authoritative).
    #[default]
    Index,
    /// Files found on disk, for sites whose index has drifted.
    Scan,
}
