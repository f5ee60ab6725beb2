use serde::Serialize;

use crate::models::dashboard::{AggregateStats, DashboardInsights};
use crate::models::feedback::FieldError;

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None, fields: Vec::new() }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
        self.fields = fields;
        self
    }
}

/// Body of `GET /api/v1/feedback/stats`.
#[derive(Serialize, Debug)]
pub struct StatsResponse {
    pub stats: AggregateStats,
    pub insights: DashboardInsights,
}
