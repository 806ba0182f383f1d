//! Registry of SharpAPI job types this crate can dispatch.
//!
//! A job type selects which remote processing pipeline handles the request;
//! each maps to a fixed endpoint path under the API base URL.

/// Vendor-defined endpoint identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    /// Travel/Tourism/Hospitality product categorization.
    HospitalityProductCategories,
}

impl JobType {
    /// Endpoint path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            JobType::HospitalityProductCategories => "/tth/hospitality_product_categories",
        }
    }
}
