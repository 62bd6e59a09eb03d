//! Grouping labeled entries into one chart per test

use serde::Serialize;
use std::collections::BTreeMap;

use crate::colors::{ColorSource, ColorTable};
use crate::data::{BenchEntry, BenchKey, BenchPlatform};

/// What is being compared: the two revisions and their platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonHeader {
    pub key1: BenchKey,
    pub key2: BenchKey,
    pub platform1: BenchPlatform,
    pub platform2: BenchPlatform,
}

impl ComparisonHeader {
    /// The compiler, or `{compiler1 vs. compiler2}` when they differ
    pub fn compiler_part(&self) -> String {
        if self.platform1.compiler == self.platform2.compiler {
            self.platform1.compiler.clone()
        } else {
            format!(
                "{{{} vs. {}}}",
                self.platform1.compiler, self.platform2.compiler
            )
        }
    }

    /// `<name> − {b1@c1} vs. {b2@c2} - <compiler part>`
    pub fn title_for(&self, name: &str) -> String {
        format!(
            "{} \u{2212} {} vs. {} - {}",
            name,
            self.key1.revision_tag(),
            self.key2.revision_tag(),
            self.compiler_part()
        )
    }
}

/// One line on a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    /// Backend label
    pub label: String,
    /// Timings in milliseconds, indexed by frame
    pub data: Vec<f64>,
    /// `#RRGGBB`
    pub color: String,
}

/// One chart: every series recorded for a single test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGroup {
    /// Test name
    pub name: String,
    pub title: String,
    /// X axis, `0..n` where `n` is the first dataset's length
    pub labels: Vec<usize>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartGroup {
    /// Whether some dataset length differs from the x axis
    pub fn is_ragged(&self) -> bool {
        self.datasets.iter().any(|d| d.data.len() != self.labels.len())
    }

    /// Largest timing across all datasets, 0 for an empty chart
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0f64, f64::max)
    }
}

/// Group labeled entries by test name, one chart per test.
///
/// Charts come out sorted by name; entries keep their order inside a chart.
pub fn group_series<S: ColorSource>(
    entries: Vec<BenchEntry>,
    header: &ComparisonHeader,
    colors: &mut ColorTable<S>,
) -> Vec<ChartGroup> {
    let mut by_name: BTreeMap<String, Vec<BenchEntry>> = BTreeMap::new();
    for entry in entries {
        by_name
            .entry(entry.context.name.clone())
            .or_default()
            .push(entry);
    }

    by_name
        .into_iter()
        .map(|(name, entries)| {
            let len = entries.first().map_or(0, |e| e.timings.len());
            let datasets = entries
                .into_iter()
                .map(|entry| ChartDataset {
                    color: colors.color_for(&entry.context.backend),
                    label: entry.context.backend,
                    data: entry.timings,
                })
                .collect();

            let group = ChartGroup {
                title: header.title_for(&name),
                labels: (0..len).collect(),
                datasets,
                name,
            };

            if group.is_ragged() {
                tracing::warn!("Chart {} has series of different lengths", group.name);
            }

            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::tests::FixedColors;
    use crate::label::tests::{entry, key};
    use pretty_assertions::assert_eq;

    fn header(compiler1: &str, compiler2: &str) -> ComparisonHeader {
        ComparisonHeader {
            key1: key("master", "c1", 1),
            key2: key("simd", "c2", 2),
            platform1: BenchPlatform {
                compiler: compiler1.to_string(),
            },
            platform2: BenchPlatform {
                compiler: compiler2.to_string(),
            },
        }
    }

    #[test]
    fn test_title_same_compiler() {
        let h = header("rustc 1.47.0", "rustc 1.47.0");
        assert_eq!(
            h.title_for("balls"),
            "balls \u{2212} {master@c1} vs. {simd@c2} - rustc 1.47.0"
        );
    }

    #[test]
    fn test_title_different_compilers() {
        let h = header("rustc 1.47.0", "rustc 1.48.0");
        assert_eq!(
            h.title_for("balls"),
            "balls \u{2212} {master@c1} vs. {simd@c2} - {rustc 1.47.0 vs. rustc 1.48.0}"
        );
    }

    #[test]
    fn test_group_by_name() {
        let h = header("rustc", "rustc");
        let k = h.key1.clone();
        let entries = vec![
            entry(&k, "rustc", "rapier {master@c1}", "pyramid", &[1.0, 2.0, 3.0]),
            entry(&k, "rustc", "physx", "balls", &[4.0, 5.0]),
            entry(&k, "rustc", "rapier {master@c1}", "balls", &[6.0, 7.0]),
        ];
        let mut colors = ColorTable::with_source(FixedColors::new(&["#AAAAAA", "#BBBBBB"]));

        let groups = group_series(entries, &h, &mut colors);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "balls");
        assert_eq!(groups[0].labels, vec![0, 1]);
        assert_eq!(
            groups[0].datasets,
            vec![
                ChartDataset {
                    label: "physx".to_string(),
                    data: vec![4.0, 5.0],
                    color: "#AAAAAA".to_string(),
                },
                ChartDataset {
                    label: "rapier {master@c1}".to_string(),
                    data: vec![6.0, 7.0],
                    color: "#BBBBBB".to_string(),
                },
            ]
        );
        assert_eq!(groups[1].name, "pyramid");
        assert_eq!(groups[1].labels, vec![0, 1, 2]);
        assert_eq!(groups[1].datasets[0].color, "#BBBBBB");
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let h = header("rustc", "rustc");
        let k = h.key1.clone();
        let entries = vec![
            entry(&k, "rustc", "a", "t1", &[1.0]),
            entry(&k, "rustc", "b", "t2", &[2.0]),
            entry(&k, "rustc", "c", "t1", &[3.0]),
            entry(&k, "rustc", "d", "t3", &[4.0]),
        ];
        let mut colors = ColorTable::new();

        let groups = group_series(entries.clone(), &h, &mut colors);

        let mut flattened: Vec<(String, String, Vec<f64>)> = groups
            .iter()
            .flat_map(|g| {
                g.datasets
                    .iter()
                    .map(|d| (g.name.clone(), d.label.clone(), d.data.clone()))
            })
            .collect();
        let mut original: Vec<(String, String, Vec<f64>)> = entries
            .iter()
            .map(|e| (e.context.name.clone(), e.context.backend.clone(), e.timings.clone()))
            .collect();
        flattened.sort_by(|a, b| a.1.cmp(&b.1));
        original.sort_by(|a, b| a.1.cmp(&b.1));

        assert_eq!(flattened, original);
    }

    #[test]
    fn test_ragged_group_still_rendered() {
        let h = header("rustc", "rustc");
        let k = h.key1.clone();
        let entries = vec![
            entry(&k, "rustc", "a", "t", &[1.0, 2.0]),
            entry(&k, "rustc", "b", "t", &[1.0, 2.0, 9.0]),
        ];
        let mut colors = ColorTable::new();

        let groups = group_series(entries, &h, &mut colors);

        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_ragged());
        assert_eq!(groups[0].labels, vec![0, 1]);
        assert_eq!(groups[0].max_value(), 9.0);
    }

    #[test]
    fn test_same_revision_keeps_both_series() {
        let h = ComparisonHeader {
            key2: key("master", "c1", 1),
            ..header("rustc", "rustc")
        };
        let k = h.key1.clone();
        let entries = crate::label::label_entries(
            vec![entry(&k, "rustc", "rapier", "t", &[1.0])],
            vec![entry(&k, "rustc", "rapier", "t", &[2.0])],
            &h.key1,
            &h.key2,
        );
        let mut colors = ColorTable::with_source(FixedColors::new(&["#AAAAAA"]));

        let groups = group_series(entries, &h, &mut colors);

        let datasets = &groups[0].datasets;
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].label, datasets[1].label);
        assert_eq!(datasets[0].color, datasets[1].color);
        assert_eq!(datasets[0].data, vec![1.0]);
        assert_eq!(datasets[1].data, vec![2.0]);
    }

    #[test]
    fn test_empty_input() {
        let h = header("rustc", "rustc");
        let mut colors = ColorTable::new();
        assert!(group_series(vec![], &h, &mut colors).is_empty());
        assert!(colors.is_empty());
    }
}
