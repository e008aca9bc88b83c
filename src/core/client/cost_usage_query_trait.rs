use async_trait::async_trait;
use serde_json::Value;

use crate::domain::cost::dto::cost_query_request::CostQueryRequest;
use crate::errors::AppError;

/// Seam between the breakdown service and the Cost Explorer SDK.
///
/// Implementations return the `ResultsByTime` sequence for one service in
/// the Cost Explorer wire shape, in the order the API produced it.
#[async_trait]
pub trait CostUsageQuery {
    async fn daily_usage_type_costs(
        &self,
        req: &CostQueryRequest,
    ) -> Result<Vec<Value>, AppError>;
}
