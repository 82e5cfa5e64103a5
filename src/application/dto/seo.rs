use crate::domain::seo::SeoReport;
use serde::Serialize;

/// Audit result for one registered article; exactly one of `report` and
/// `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct SeoAuditItemDto {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SeoReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
