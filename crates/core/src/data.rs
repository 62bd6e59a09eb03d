//! Data structures received from the benchmarks service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// When a benchmark was run, in milliseconds since the Unix epoch.
///
/// The service stores dates as BSON and hands them out as MongoDB extended
/// JSON. Ordering is numeric, so sorting keys by date never falls into the
/// lexicographic trap of comparing `"20"` against `"300"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchDate(i64);

impl BenchDate {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn millis(self) -> i64 {
        self.0
    }

    /// Convert to a UTC datetime, `None` if out of chrono's range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for BenchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BenchDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }
}

/// `{"$date": ...}` wrapper used by extended JSON
#[derive(Serialize, Deserialize)]
struct ExtendedDate {
    #[serde(rename = "$date")]
    date: DateRepr,
}

/// The shapes `$date` takes in canonical and relaxed extended JSON
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DateRepr {
    Canonical {
        #[serde(rename = "$numberLong")]
        number_long: String,
    },
    Millis(i64),
    Relaxed(String),
}

impl DateRepr {
    fn into_millis(self) -> Result<i64> {
        match self {
            DateRepr::Canonical { number_long } => number_long
                .parse()
                .map_err(|_| Error::InvalidDate(number_long)),
            DateRepr::Millis(millis) => Ok(millis),
            DateRepr::Relaxed(text) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| dt.timestamp_millis())
                .map_err(|_| Error::InvalidDate(text)),
        }
    }
}

impl Serialize for BenchDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ExtendedDate {
            date: DateRepr::Canonical {
                number_long: self.0.to_string(),
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BenchDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let ExtendedDate { date } = ExtendedDate::deserialize(deserializer)?;
        date.into_millis()
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// Identifies one benchmarked build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchKey {
    /// The commit SHA where this benchmark is run
    pub commit: String,
    /// The branch where this benchmark is run
    pub branch: String,
    /// When this benchmark is run
    pub date: BenchDate,
}

impl BenchKey {
    /// `branch@commit`
    pub fn revision(&self) -> String {
        format!("{}@{}", self.branch, self.commit)
    }

    /// `{branch@commit}`, the form used in labels and chart titles
    pub fn revision_tag(&self) -> String {
        format!("{{{}}}", self.revision())
    }
}

/// Details about the platform a benchmark ran on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchPlatform {
    /// Compiler version used to run the benchmarks
    pub compiler: String,
}

/// What is being benched, and with which engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchContext {
    /// Test identifier
    pub name: String,
    /// Physics engine the timings belong to; rewritten by the entry labeler
    pub backend: String,
}

/// One timing series for a (key, platform, context) triple
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchEntry {
    pub key: BenchKey,
    pub context: BenchContext,
    pub platform: BenchPlatform,
    /// Timings in milliseconds, one per frame
    pub timings: Vec<f64>,
}

/// Body of `/graph/csv`: one entry list per compared revision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ComparisonResponse {
    pub entries1: Vec<BenchEntry>,
    pub entries2: Vec<BenchEntry>,
}

/// Parse the body of `/list?field=key`
pub fn parse_key_list(body: &str) -> Result<Vec<BenchKey>> {
    Ok(serde_json::from_str(body)?)
}

/// Parse the body of `/graph/csv`
pub fn parse_comparison(body: &str) -> Result<ComparisonResponse> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_key_list_canonical_dates() {
        let body = r#"[
            {"commit": "a1b2c3", "branch": "master", "date": {"$date": {"$numberLong": "1600000000000"}}},
            {"commit": "d4e5f6", "branch": "simd", "date": {"$date": {"$numberLong": "1600000500000"}}}
        ]"#;

        let keys = parse_key_list(body).unwrap();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].branch, "master");
        assert_eq!(keys[0].date.millis(), 1_600_000_000_000);
        assert_eq!(keys[1].revision(), "simd@d4e5f6");
        assert_eq!(keys[1].revision_tag(), "{simd@d4e5f6}");
    }

    #[test]
    fn test_parse_relaxed_dates() {
        let body = r#"[
            {"commit": "c1", "branch": "b", "date": {"$date": 1600000000000}},
            {"commit": "c2", "branch": "b", "date": {"$date": "2020-09-13T12:26:40.000Z"}}
        ]"#;

        let keys = parse_key_list(body).unwrap();

        assert_eq!(keys[0].date, BenchDate::from_millis(1_600_000_000_000));
        assert_eq!(keys[1].date, BenchDate::from_millis(1_600_000_000_000));
    }

    #[test]
    fn test_parse_invalid_number_long() {
        let body = r#"[{"commit": "c", "branch": "b", "date": {"$date": {"$numberLong": "soon"}}}]"#;
        assert!(parse_key_list(body).is_err());
    }

    #[test]
    fn test_date_serializes_canonical() {
        let json = serde_json::to_value(BenchDate::from_millis(42)).unwrap();
        assert_eq!(json, serde_json::json!({"$date": {"$numberLong": "42"}}));
    }

    #[test]
    fn test_date_from_str() {
        assert_eq!(
            "1600000000000".parse::<BenchDate>().unwrap().millis(),
            1_600_000_000_000
        );
        assert!("undefined".parse::<BenchDate>().is_err());
    }

    #[test]
    fn test_date_to_datetime() {
        let dt = BenchDate::from_millis(0).to_datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_comparison() {
        let body = r#"{
            "entries1": [{
                "key": {"commit": "c1", "branch": "master", "date": {"$date": {"$numberLong": "1000"}}},
                "context": {"name": "balls", "backend": "rapier"},
                "platform": {"compiler": "rustc 1.47.0"},
                "timings": [1.5, 2.0, 2.5]
            }],
            "entries2": []
        }"#;

        let response = parse_comparison(body).unwrap();

        assert_eq!(response.entries1.len(), 1);
        assert!(response.entries2.is_empty());
        let entry = &response.entries1[0];
        assert_eq!(entry.context.name, "balls");
        assert_eq!(entry.platform.compiler, "rustc 1.47.0");
        assert_eq!(entry.timings, vec![1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_parse_comparison_malformed() {
        assert!(parse_comparison("{\"entries1\": 3}").is_err());
        assert!(parse_comparison("<html>").is_err());
    }
}
