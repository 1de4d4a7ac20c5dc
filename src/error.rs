//! Error types for the Postcode API client.

use thiserror::Error;

/// Errors returned by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured, e.g. the API key is missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// The API answered with a status other than `200 OK`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport failure or HTTP client setup error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A non-200 response, classified by status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `401`: the API key is missing or invalid.
    #[error("access denied, API key missing or invalid")]
    Unauthorized,

    /// `404`: nothing matches the query.
    #[error("no result found")]
    NotFound,

    /// `500`: the backend failed without further detail.
    #[error("unknown API error")]
    ServerError,

    /// Any other status.
    #[error("unexpected response status {0}")]
    Unknown(u16),
}

impl ApiError {
    /// Classify a status code. Only meaningful for statuses other than `200`.
    pub fn from_status(code: u16) -> Self {
        match code {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            500 => ApiError::ServerError,
            other => ApiError::Unknown(other),
        }
    }

    /// The HTTP status this error was classified from.
    pub fn code(&self) -> u16 {
        match self {
            ApiError::Unauthorized => 401,
            ApiError::NotFound => 404,
            ApiError::ServerError => 500,
            ApiError::Unknown(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_statuses() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::ServerError);
    }

    #[test]
    fn unknown_status_keeps_its_code() {
        let err = ApiError::from_status(418);
        assert_eq!(err, ApiError::Unknown(418));
        assert_eq!(err.code(), 418);
        assert_eq!(err.to_string(), "unexpected response status 418");
    }

    #[test]
    fn api_error_converts_into_error() {
        let err: Error = ApiError::from_status(401).into();
        assert!(matches!(err, Error::Api(ApiError::Unauthorized)));
        assert_eq!(err.to_string(), "access denied, API key missing or invalid");
    }
}
