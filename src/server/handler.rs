use axum::{extract::State, http::Uri, Json};

use super::AppState;
use crate::data::{merge_chain_tvls, MergedTvl, MERGED_CHAINS};
use crate::error::TvlError;

/// Returns the last non-empty segment of a request path.
pub fn extract_slug(path: &str) -> Option<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).last()
}

/// Fetches a protocol's upstream data and answers with its merged Unichain TVL.
///
/// Pipeline: slug from the path, one upstream fetch, merge of the
/// `Unichain` and `Unichain-borrowed` series, ascending sort by date.
///
/// # Errors
/// * `TvlError::MissingSlug` (400) when the path has no usable segment
/// * `TvlError::UpstreamError` (502) when the upstream status is not 2xx
/// * `TvlError::FetchFailed` (502) for any other fetch or parse failure
pub async fn merge_tvl(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<MergedTvl>, TvlError> {
    let protocol = extract_slug(uri.path()).ok_or(TvlError::MissingSlug)?;

    let body = state.source.fetch_protocol(protocol).await?;
    let tvl = merge_chain_tvls(&body, &MERGED_CHAINS);

    tracing::info!(
        protocol,
        points = tvl.len(),
        first = ?tvl.first().and_then(|p| p.day()),
        last = ?tvl.last().and_then(|p| p.day()),
        "merged chain tvl"
    );

    Ok(Json(MergedTvl {
        protocol: protocol.to_string(),
        tvl,
    }))
}
