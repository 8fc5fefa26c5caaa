//! Normalized quote result model

use serde::{Deserialize, Serialize};

use super::api::QuoteResponse;

/// Normalized output of the submission pipeline.
///
/// A direct projection of the backend's raw quote; every field is optional
/// and absent fields remain absent. Computed once per terminal step and
/// embedded into exactly one timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub monthly: Option<f64>,
    pub annual: Option<f64>,
    pub dwelling_limit: Option<f64>,
    pub coverage: Option<String>,
}

impl From<QuoteResponse> for QuoteSummary {
    fn from(raw: QuoteResponse) -> Self {
        Self {
            monthly: raw.premium_monthly,
            annual: raw.premium_annual,
            dwelling_limit: raw.dwelling_limit,
            coverage: raw.coverage,
        }
    }
}
