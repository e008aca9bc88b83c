pub mod cost_breakdown_service;
