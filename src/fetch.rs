//! Blocking HTTP collaborator that loads a dataset payload.

use tracing::debug;

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

/// Fetches the `[[value, time], ...]` payload from `url` and builds a
/// dataset from it.
///
/// One GET, no retries: a failed fetch is terminal for the caller.
pub fn fetch_dataset(url: &str) -> ChartResult<Dataset> {
    let response = reqwest::blocking::get(url)
        .map_err(|err| ChartError::Fetch(format!("request to `{url}` failed: {err}")))?
        .error_for_status()
        .map_err(|err| ChartError::Fetch(format!("`{url}` returned an error status: {err}")))?;

    let payload = response
        .text()
        .map_err(|err| ChartError::Fetch(format!("failed to read body from `{url}`: {err}")))?;
    debug!(url, bytes = payload.len(), "fetched dataset payload");

    Dataset::from_json_str(&payload)
}
