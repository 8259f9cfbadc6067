//! The typed output record of row validation.

/// A fully validated job posting.
///
/// Constructed once per row by the validator, never mutated afterwards.
/// A row that fails validation produces a `ValidationErrorReport` in the
/// validate crate instead of one of these.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidatedPerson {
    // Job details
    pub job_title: String,
    pub rating: Option<f64>,

    // Company details
    pub company_name: Option<String>,
    pub size: Option<String>,
    pub founded: Option<i64>,
    pub type_of_ownership: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,

    // Revenue bounds in USD
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,

    // Salary bounds in USD
    pub salary_min: f64,
    pub salary_max: f64,

    // Location
    pub location_city: String,
    pub location_state: Option<String>,
    pub headquarters_city: Option<String>,
    pub headquarters_state: Option<String>,

    pub num_competitors: Option<i64>,
}
