use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad query values) or the dataset layers below it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dataset unreachable: {0}")]
    DataAccess(String),

    #[error("Dataset format error: {0}")]
    Format(String),

    #[error("Invalid coordinates: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal Server Error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> u16 {
        match self {
            AppError::DataAccess(_) => 502,
            AppError::Format(_) => 500,
            AppError::Validation(_) => 422,
            AppError::Config(_) => 500,
            AppError::BadRequest(_) => 400,
            AppError::NotFound => 404,
            AppError::MethodNotAllowed => 405,
            AppError::Internal => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, AppError>;
