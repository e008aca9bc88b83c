pub mod cost_query_request;
