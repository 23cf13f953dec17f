use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures that end a merge request.
///
/// The `Display` text of every variant is exactly the plain-text body sent
/// back to the client, so the message strings must stay stable.
#[derive(Debug, Error)]
pub enum TvlError {
    /// The request path had no non-empty segment to use as a protocol slug.
    #[error("Protocol slug missing in path")]
    MissingSlug,

    /// The upstream answered with a status outside the 2xx range.
    #[error("Upstream error ({status})")]
    UpstreamError { status: u16 },

    /// Anything else that went wrong while fetching or parsing upstream data.
    /// The cause is kept for logs only.
    #[error("Fetch failed")]
    FetchFailed(#[source] anyhow::Error),
}

impl TvlError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TvlError::MissingSlug => StatusCode::BAD_REQUEST,
            TvlError::UpstreamError { .. } | TvlError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for TvlError {
    fn from(err: reqwest::Error) -> Self {
        TvlError::FetchFailed(err.into())
    }
}

impl From<serde_json::Error> for TvlError {
    fn from(err: serde_json::Error) -> Self {
        TvlError::FetchFailed(err.into())
    }
}

impl IntoResponse for TvlError {
    fn into_response(self) -> Response {
        match &self {
            TvlError::MissingSlug => {}
            TvlError::UpstreamError { status } => {
                tracing::warn!(status, "upstream returned non-success status");
            }
            TvlError::FetchFailed(cause) => {
                tracing::warn!(error = ?cause, "fetching protocol data failed");
            }
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
