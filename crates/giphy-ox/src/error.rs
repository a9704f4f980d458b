use serde::Deserialize;
use thiserror::Error;

/// Error body returned by GIPHY, either `{"meta": {"msg": ...}}` or `{"message": ...}`.
#[derive(Debug, Deserialize)]
struct GiphyApiErrorPayload {
    meta: Option<GiphyApiErrorMeta>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GiphyApiErrorMeta {
    msg: Option<String>,
}

/// Errors that can occur when searching the GIPHY API
#[derive(Debug, Error)]
pub enum GiphyRequestError {
    /// Network or transport failure
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Success status but the body is not the expected JSON
    #[error("Failed to decode response body: {source}; body: {body}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The body parsed but lacks a field the results are read from
    #[error("Missing field in response: {0}")]
    MissingField(String),
}

impl GiphyRequestError {
    /// HTTP status code, when the failure came from the API itself.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Parse an error response from the GIPHY API
pub(crate) fn parse_error_response(
    status: reqwest::StatusCode,
    bytes: &bytes::Bytes,
) -> GiphyRequestError {
    let message = serde_json::from_slice::<GiphyApiErrorPayload>(bytes)
        .ok()
        .and_then(|payload| payload.meta.and_then(|meta| meta.msg).or(payload.message))
        .unwrap_or_else(|| String::from_utf8_lossy(bytes).to_string());

    GiphyRequestError::ApiError {
        status: status.as_u16(),
        message,
    }
}
