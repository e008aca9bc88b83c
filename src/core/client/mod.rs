// Cost Explorer client and query adapter
pub mod ce_client;
pub mod ce_cost_usage_query;
pub mod cost_usage_query_trait;
pub mod mappers;
