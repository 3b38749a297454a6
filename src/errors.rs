// errors.rs
use astra::Response;
use thiserror::Error;

use crate::domain::board::BoardError;

/// Errors originating from the server logic
/// (routing, missing resources, bad input) or the session layer.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<BoardError> for ServerError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::UnknownProperty(_) => ServerError::NotFound,
            BoardError::NotVisible(_) => ServerError::BadRequest(err.to_string()),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::InternalError => 500,
        }
    }
}
