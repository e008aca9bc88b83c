/// Maps aws-sdk-costexplorer types → the Cost Explorer wire JSON shape
use std::collections::HashMap;

use aws_sdk_costexplorer::types::{Group, MetricValue, ResultByTime};
use serde_json::{json, Map, Value};

/// Converts a `ResultsByTime` sequence into the JSON representation the Cost
/// Explorer REST API uses (`TimePeriod`/`Total`/`Groups`/`Estimated`), so the
/// report body carries the API's native shape, in the API's order.
pub fn map_results_by_time(results: &[ResultByTime]) -> Vec<Value> {
    results.iter().map(map_result_by_time).collect()
}

fn map_result_by_time(result: &ResultByTime) -> Value {
    let time_period = result.time_period.as_ref().map(|period| {
        json!({
            "Start": period.start.as_str(),
            "End": period.end.as_str(),
        })
    });

    let groups: Vec<Value> = result
        .groups
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(map_group)
        .collect();

    json!({
        "TimePeriod": time_period,
        "Total": result.total.as_ref().map(map_metric_values),
        "Groups": groups,
        "Estimated": result.estimated,
    })
}

fn map_group(group: &Group) -> Value {
    json!({
        "Keys": group.keys.clone().unwrap_or_default(),
        "Metrics": group
            .metrics
            .as_ref()
            .map(map_metric_values)
            .unwrap_or_else(|| Value::Object(Map::new())),
    })
}

fn map_metric_values(metrics: &HashMap<String, MetricValue>) -> Value {
    let mut out = Map::new();
    for (name, metric) in metrics {
        out.insert(
            name.clone(),
            json!({
                "Amount": metric.amount.as_deref(),
                "Unit": metric.unit.as_deref(),
            }),
        );
    }
    Value::Object(out)
}
