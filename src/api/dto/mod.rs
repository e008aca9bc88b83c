pub mod cost_breakdown_dto;
