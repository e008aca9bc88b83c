/// Parameters for one Cost Explorer query, scoped to a single service.
///
/// Built per service per invocation and never mutated. `start_date` is
/// inclusive, `end_date` exclusive, both `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct CostQueryRequest {
    pub service: String,
    pub account_id: String,
    pub start_date: String,
    pub end_date: String,
}
