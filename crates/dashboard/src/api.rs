//! Benchmarks service requests over the browser `fetch` API

use benchbot_core::{
    parse_comparison, parse_key_list, BenchKey, ComparisonResponse, RevisionSelection,
    ServiceConfig,
};
use gloo_net::http::Request;

async fn fetch_text(url: &str) -> Result<String, String> {
    tracing::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch data: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP error: {} {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Every benchmarked revision, unsorted
pub async fn load_keys(config: &ServiceConfig) -> Result<Vec<BenchKey>, String> {
    let body = fetch_text(&config.list_url()).await?;
    parse_key_list(&body).map_err(|e| format!("Failed to parse revisions: {}", e))
}

pub async fn load_comparison(
    config: &ServiceConfig,
    selection: RevisionSelection,
    other_engines: bool,
) -> Result<ComparisonResponse, String> {
    let url = config.compare_url(selection.date1, selection.date2, other_engines);
    let body = fetch_text(&url).await?;
    parse_comparison(&body).map_err(|e| format!("Failed to parse comparison: {}", e))
}
