//! Lambda handler: connects the trigger event to the breakdown service

use lambda_runtime::{Error, LambdaEvent};

use crate::api::dto::cost_breakdown_dto::{CostBreakdownEvent, CostBreakdownResponse};
use crate::domain::cost::service::cost_breakdown_service::produce_breakdown_report;

/// Entry point invoked by the Lambda runtime.
///
/// Any `Err` here fails the invocation, which is the intended behavior for
/// malformed events; per-service query failures never reach this level.
pub async fn function_handler(
    event: LambdaEvent<CostBreakdownEvent>,
) -> Result<CostBreakdownResponse, Error> {
    Ok(produce_breakdown_report(event.payload).await?)
}
