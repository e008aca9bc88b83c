use async_trait::async_trait;
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, GroupDefinition,
    GroupDefinitionType,
};
use aws_sdk_costexplorer::Client;
use serde_json::Value;

use crate::core::client::ce_client::ce_client;
use crate::core::client::cost_usage_query_trait::CostUsageQuery;
use crate::core::client::mappers::map_results_by_time;
use crate::domain::cost::dto::cost_query_request::CostQueryRequest;
use crate::errors::{query_error, AppError};

const METRIC_UNBLENDED_COST: &str = "UnblendedCost";
const GROUP_KEY_USAGE_TYPE: &str = "USAGE_TYPE";

/// Cost Explorer backed implementation of [`CostUsageQuery`].
pub struct CeCostUsageQuery {
    client: Client,
}

impl CeCostUsageQuery {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the adapter on top of the shared process-wide client.
    pub async fn shared() -> Self {
        Self::new(ce_client().await.clone())
    }

    fn dimension_filter(key: Dimension, value: &str) -> Expression {
        Expression::builder()
            .dimensions(DimensionValues::builder().key(key).values(value).build())
            .build()
    }
}

#[async_trait]
impl CostUsageQuery for CeCostUsageQuery {
    async fn daily_usage_type_costs(
        &self,
        req: &CostQueryRequest,
    ) -> Result<Vec<Value>, AppError> {
        let time_period = DateInterval::builder()
            .start(req.start_date.as_str())
            .end(req.end_date.as_str())
            .build()
            .map_err(query_error)?;

        let filter = Expression::builder()
            .and(Self::dimension_filter(Dimension::Service, &req.service))
            .and(Self::dimension_filter(
                Dimension::LinkedAccount,
                &req.account_id,
            ))
            .build();

        let output = self
            .client
            .get_cost_and_usage()
            .time_period(time_period)
            .granularity(Granularity::Daily)
            .metrics(METRIC_UNBLENDED_COST)
            .group_by(
                GroupDefinition::builder()
                    .r#type(GroupDefinitionType::Dimension)
                    .key(GROUP_KEY_USAGE_TYPE)
                    .build(),
            )
            .filter(filter)
            .send()
            .await
            .map_err(|err| AppError::CostExplorerError(DisplayErrorContext(&err).to_string()))?;

        let results = output.results_by_time.unwrap_or_default();
        Ok(map_results_by_time(&results))
    }
}
