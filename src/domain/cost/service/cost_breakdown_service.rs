use anyhow::Result;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::cost_breakdown_dto::{
    CostBreakdownEvent, CostBreakdownResponse, ServiceEntry,
};
use crate::core::client::ce_cost_usage_query::CeCostUsageQuery;
use crate::core::client::cost_usage_query_trait::CostUsageQuery;
use crate::domain::cost::dto::cost_query_request::CostQueryRequest;
use crate::errors::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Breaks down the daily usage-type cost of one service.
///
/// Returns `None` when the Cost Explorer call fails, so one bad service name
/// cannot abort the whole batch. Anything other than a query failure still
/// propagates.
pub async fn breakdown_service_cost(req: CostQueryRequest) -> Result<Option<Vec<Value>>> {
    let query = CeCostUsageQuery::shared().await;
    breakdown_service_cost_with_query(&query, &req).await
}

/// Produces the per-service cost breakdown report for one invocation.
pub async fn produce_breakdown_report(event: CostBreakdownEvent) -> Result<CostBreakdownResponse> {
    let query = CeCostUsageQuery::shared().await;
    produce_breakdown_report_with_query(&query, event).await
}

async fn breakdown_service_cost_with_query<Q: CostUsageQuery>(
    query: &Q,
    req: &CostQueryRequest,
) -> Result<Option<Vec<Value>>> {
    match query.daily_usage_type_costs(req).await {
        Ok(results) => Ok(Some(results)),
        Err(err @ AppError::CostExplorerError(_)) => {
            error!("Error fetching cost breakdown for {}: {}", req.service, err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

async fn produce_breakdown_report_with_query<Q: CostUsageQuery>(
    query: &Q,
    event: CostBreakdownEvent,
) -> Result<CostBreakdownResponse> {
    event.validate()?;
    validate_date_range(&event.start_date, &event.end_date)?;

    // Malformed input is a caller bug: fail the invocation, no partial report
    let services: Vec<ServiceEntry> = serde_json::from_str(&event.services)?;

    let mut report = Map::new();
    for entry in services {
        let req = CostQueryRequest {
            service: entry.service.clone(),
            account_id: event.account_id.clone(),
            start_date: event.start_date.clone(),
            end_date: event.end_date.clone(),
        };

        let breakdown = breakdown_service_cost_with_query(query, &req).await?;
        // Duplicate names: last call wins
        report.insert(
            entry.service,
            breakdown.map_or(Value::Null, Value::Array),
        );
    }

    let report = Value::Object(report);
    info!(%report, "cost breakdown report");

    Ok(CostBreakdownResponse::ok(serde_json::to_string(&report)?))
}

fn validate_date_range(start_date: &str, end_date: &str) -> Result<(), AppError> {
    let start = NaiveDate::parse_from_str(start_date, DATE_FORMAT)
        .map_err(|err| AppError::InvalidEvent(format!("start_date {start_date:?}: {err}")))?;
    let end = NaiveDate::parse_from_str(end_date, DATE_FORMAT)
        .map_err(|err| AppError::InvalidEvent(format!("end_date {end_date:?}: {err}")))?;

    if start > end {
        return Err(AppError::InvalidEvent(format!(
            "start_date {start_date} is after end_date {end_date}"
        )));
    }
    Ok(())
}
