//! Invocation event and response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Trigger payload for the cost breakdown function.
///
/// `services` arrives JSON-encoded (not as a nested array) because the
/// upstream step passes it through verbatim from its own response body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CostBreakdownEvent {
    /// JSON-encoded array of objects, each with a `Service` field.
    #[validate(length(min = 1))]
    pub services: String,
    /// Inclusive start of the range, `YYYY-MM-DD`.
    pub start_date: String,
    /// Exclusive end of the range, `YYYY-MM-DD`.
    pub end_date: String,
    /// Linked account the costs are scoped to.
    #[validate(length(min = 1))]
    pub account_id: String,
}

/// One element of the decoded `services` array. Upstream entries carry more
/// fields (totals, ranks); only the service name matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    #[serde(rename = "Service")]
    pub service: String,
}

/// Lambda proxy-style response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdownResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl CostBreakdownResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}
