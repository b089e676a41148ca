use ntex::http::StatusCode;
use ntex::web::{HttpResponse, WebResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(rusqlite::Error),
    NotFound(String),
    /// A requested result cap that is zero or negative.
    InvalidLimit(i64),
    /// An ordering key outside the recognized column set.
    UnknownColumn(String),
    /// Fuzzy resolution was asked to match against an empty name universe.
    NoCandidates,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {}", e),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidLimit(limit) => write!(f, "Invalid limit: {}", limit),
            AppError::UnknownColumn(key) => write!(f, "Unknown column: {}", key),
            AppError::NoCandidates => write!(f, "No candidates to match against"),
        }
    }
}

impl WebResponseError for AppError {
    fn error_response(&self, _: &ntex::web::HttpRequest) -> HttpResponse {
        let (status, message) = match self {
            AppError::Db(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Not found: {}", msg)),
            AppError::InvalidLimit(_) => (StatusCode::BAD_REQUEST, "Invalid limit".to_string()),
            AppError::UnknownColumn(key) => {
                (StatusCode::BAD_REQUEST, format!("Unknown column: {}", key))
            }
            AppError::NoCandidates => (
                StatusCode::NOT_FOUND,
                "No known values to match against".to_string(),
            ),
        };
        HttpResponse::build(status).json(&serde_json::json!({ "error": message }))
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e)
    }
}
