//! Benchmarks service client

use crate::error::{Error, Result};
use benchbot_core::{parse_comparison, parse_key_list, BenchDate, BenchKey, ComparisonResponse, ServiceConfig};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use tracing::debug;

/// Source of benchmark data
pub trait BenchService {
    /// Every benchmarked revision, in no particular order
    fn list_keys(&self) -> Result<Vec<BenchKey>>;

    /// Both sides of a comparison
    fn compare(
        &self,
        date1: BenchDate,
        date2: BenchDate,
        other_engines: bool,
    ) -> Result<ComparisonResponse>;
}

/// Talks to the benchmarks service over HTTP
pub struct HttpBenchService {
    client: reqwest::blocking::Client,
    config: ServiceConfig,
}

impl HttpBenchService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let base = url::Url::parse(&config.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Service(format!(
                "Unsupported URL scheme: {}",
                base.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("benchbot"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()
            .map_err(|e| Error::Service(format!("Request failed: {}", e)))?
            .text()?;
        Ok(body)
    }
}

impl BenchService for HttpBenchService {
    fn list_keys(&self) -> Result<Vec<BenchKey>> {
        let body = self.get(&self.config.list_url())?;
        Ok(parse_key_list(&body)?)
    }

    fn compare(
        &self,
        date1: BenchDate,
        date2: BenchDate,
        other_engines: bool,
    ) -> Result<ComparisonResponse> {
        let body = self.get(&self.config.compare_url(date1, date2, other_engines))?;
        Ok(parse_comparison(&body)?)
    }
}
