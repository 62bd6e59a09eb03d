//! Comparison pipeline: response -> labeled entries -> charts

use serde::Serialize;

use crate::colors::{ColorSource, ColorTable};
use crate::data::ComparisonResponse;
use crate::error::{Error, Result};
use crate::label::label_entries;
use crate::series::{group_series, ChartGroup, ComparisonHeader};

/// Everything a renderer needs for one comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCharts {
    pub header: ComparisonHeader,
    pub groups: Vec<ChartGroup>,
}

impl ComparisonHeader {
    /// Read both revisions and platforms off the first entry of each side
    pub fn from_response(response: &ComparisonResponse) -> Result<Self> {
        let first1 = response
            .entries1
            .first()
            .ok_or(Error::EmptyComparison { side: "entries1" })?;
        let first2 = response
            .entries2
            .first()
            .ok_or(Error::EmptyComparison { side: "entries2" })?;

        Ok(Self {
            key1: first1.key.clone(),
            key2: first2.key.clone(),
            platform1: first1.platform.clone(),
            platform2: first2.platform.clone(),
        })
    }
}

/// Turn a `/graph/csv` response into chart groups
pub fn build_comparison_charts<S: ColorSource>(
    response: ComparisonResponse,
    colors: &mut ColorTable<S>,
) -> Result<ComparisonCharts> {
    let header = ComparisonHeader::from_response(&response)?;
    let ComparisonResponse { entries1, entries2 } = response;

    let entries = label_entries(entries1, entries2, &header.key1, &header.key2);
    let groups = group_series(entries, &header, colors);

    tracing::debug!(
        "Built {} charts comparing {} and {}",
        groups.len(),
        header.key1.revision(),
        header.key2.revision()
    );

    Ok(ComparisonCharts { header, groups })
}
