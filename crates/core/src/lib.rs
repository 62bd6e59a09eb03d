//! benchbot-core - Shared types and chart pipeline for the benchbot viewer
//!
//! This crate contains WASM-compatible code that is shared between the CLI
//! and the dashboard. Transport is left to the frontends: they fetch the
//! URLs built by [`ServiceConfig`] and hand the bodies to the parsers here.
//!
//! # Features
//!
//! - Data structures returned by the benchmarks service
//! - Backend relabeling for two-revision comparisons
//! - Grouping into one chart per test, with stable per-backend colors
//! - Revision sorting and initial selection
//! - Latest-request-wins sequencing

pub mod colors;
pub mod compare;
pub mod data;
pub mod error;
pub mod label;
pub mod query;
pub mod revisions;
pub mod sequence;
pub mod series;

pub use colors::{ColorSource, ColorTable, SeededColors};
pub use compare::{build_comparison_charts, ComparisonCharts};
pub use data::{
    parse_comparison, parse_key_list, BenchContext, BenchDate, BenchEntry, BenchKey,
    BenchPlatform, ComparisonResponse,
};
pub use error::{Error, Result};
pub use label::{label_entries, PRIMARY_BACKEND};
pub use query::ServiceConfig;
pub use revisions::{
    initial_selection, option_label, sort_newest_first, RequestedDates, RevisionSelection,
};
pub use sequence::{RequestSequencer, RequestTicket};
pub use series::{group_series, ChartDataset, ChartGroup, ComparisonHeader};
