use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid invocation event: {0}")]
    InvalidEvent(String),

    #[error("Cost Explorer query failed: {0}")]
    CostExplorerError(String),
}

/// Helper for mapping any Cost Explorer failure into the typed query error
pub fn query_error<E: ToString>(err: E) -> AppError {
    AppError::CostExplorerError(err.to_string())
}
