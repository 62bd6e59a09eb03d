//! Request URLs for the benchmarks service

use crate::data::BenchDate;
use url::form_urlencoded;

/// Default benchmarks service
pub const DEFAULT_SERVER_URL: &str = "https://benchmarks.dimforge.com";
/// Default project (MongoDB collection) queried on the service
pub const DEFAULT_PROJECT: &str = "rapier3d";

/// Where to find benchmark data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Project identifier
    pub project: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            project: DEFAULT_PROJECT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, project: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project: project.into(),
        }
    }

    /// URL listing every benchmarked revision key
    pub fn list_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("project", &self.project)
            .append_pair("field", "key")
            .finish();
        format!("{}/list?{}", self.base_url, query)
    }

    /// URL fetching both sides of a comparison
    pub fn compare_url(&self, date1: BenchDate, date2: BenchDate, other_engines: bool) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("project", &self.project)
            .append_pair("date1", &date1.to_string())
            .append_pair("date2", &date2.to_string())
            .append_pair("otherEngines", if other_engines { "true" } else { "false" })
            .finish();
        format!("{}/graph/csv?{}", self.base_url, query)
    }
}
