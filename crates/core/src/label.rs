//! Backend relabeling for two-revision comparisons
//!
//! Both revisions report their rapier series under the same `"rapier"`
//! backend, so the labels are rewritten to carry the revision. Other engines
//! are only shown once, from the first revision: their numbers do not depend
//! on which rapier commit was benchmarked.

use crate::data::{BenchEntry, BenchKey};

/// Backend name of the engine under test
pub const PRIMARY_BACKEND: &str = "rapier";

/// Label for the primary engine at a given revision, e.g. `rapier {master@abc}`
pub fn primary_label(key: &BenchKey) -> String {
    format!("{} {}", PRIMARY_BACKEND, key.revision_tag())
}

/// Relabel and combine both sides of a comparison.
///
/// Every entry of `entries1` is kept, with `"rapier"` relabeled for `key1`.
/// Only the `"rapier"` entries of `entries2` are kept, relabeled for `key2`.
/// The result is `entries1` followed by what survives of `entries2`.
pub fn label_entries(
    mut entries1: Vec<BenchEntry>,
    entries2: Vec<BenchEntry>,
    key1: &BenchKey,
    key2: &BenchKey,
) -> Vec<BenchEntry> {
    let label1 = primary_label(key1);
    let label2 = primary_label(key2);

    for entry in &mut entries1 {
        if entry.context.backend == PRIMARY_BACKEND {
            entry.context.backend = label1.clone();
        }
    }

    let before = entries2.len();
    let filtered2: Vec<_> = entries2
        .into_iter()
        .filter(|e| e.context.backend == PRIMARY_BACKEND)
        .map(|mut e| {
            e.context.backend = label2.clone();
            e
        })
        .collect();

    tracing::debug!(
        "Dropped {} non-{} entries from the second revision",
        before - filtered2.len(),
        PRIMARY_BACKEND
    );

    entries1.extend(filtered2);
    entries1
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::{BenchContext, BenchDate, BenchPlatform};
    use pretty_assertions::assert_eq;

    pub(crate) fn key(branch: &str, commit: &str, millis: i64) -> BenchKey {
        BenchKey {
            commit: commit.to_string(),
            branch: branch.to_string(),
            date: BenchDate::from_millis(millis),
        }
    }

    pub(crate) fn entry(
        key: &BenchKey,
        compiler: &str,
        backend: &str,
        name: &str,
        timings: &[f64],
    ) -> BenchEntry {
        BenchEntry {
            key: key.clone(),
            context: BenchContext {
                name: name.to_string(),
                backend: backend.to_string(),
            },
            platform: BenchPlatform {
                compiler: compiler.to_string(),
            },
            timings: timings.to_vec(),
        }
    }

    fn backends(entries: &[BenchEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.context.backend.as_str()).collect()
    }

    #[test]
    fn test_ball_scenario() {
        let k1 = key("branch1", "c1", 1);
        let k2 = key("branch2", "c2", 2);
        let entries1 = vec![
            entry(&k1, "rustc", "rapier", "ball", &[1.0, 2.0]),
            entry(&k1, "rustc", "box2d", "ball", &[3.0, 4.0]),
        ];
        let entries2 = vec![
            entry(&k2, "rustc", "rapier", "ball", &[5.0, 6.0]),
            entry(&k2, "rustc", "box2d", "ball", &[9.0, 9.0]),
        ];

        let combined = label_entries(entries1, entries2, &k1, &k2);

        assert_eq!(
            backends(&combined),
            vec!["rapier {branch1@c1}", "box2d", "rapier {branch2@c2}"]
        );
        assert_eq!(combined[0].timings, vec![1.0, 2.0]);
        assert_eq!(combined[1].timings, vec![3.0, 4.0]);
        assert_eq!(combined[2].timings, vec![5.0, 6.0]);
    }

    #[test]
    fn test_other_engines_in_first_revision_untouched() {
        let k1 = key("master", "aaa", 1);
        let k2 = key("master", "bbb", 2);
        let physx = entry(&k1, "rustc", "physx", "pyramid", &[7.0]);
        let nphysics = entry(&k1, "rustc", "nphysics", "pyramid", &[8.0]);

        let combined = label_entries(vec![physx.clone(), nphysics.clone()], vec![], &k1, &k2);

        assert_eq!(combined, vec![physx, nphysics]);
    }

    #[test]
    fn test_second_revision_keeps_only_primary() {
        let k1 = key("master", "aaa", 1);
        let k2 = key("master", "bbb", 2);
        let entries2 = vec![
            entry(&k2, "rustc", "physx", "pyramid", &[1.0]),
            entry(&k2, "rustc", "rapier", "pyramid", &[2.0]),
            entry(&k2, "rustc", "rapier-simd", "pyramid", &[3.0]),
        ];

        let combined = label_entries(vec![], entries2, &k1, &k2);

        assert_eq!(backends(&combined), vec!["rapier {master@bbb}"]);
        assert_eq!(combined[0].timings, vec![2.0]);
    }

    #[test]
    fn test_same_revision_on_both_sides() {
        let k = key("master", "aaa", 1);
        let combined = label_entries(
            vec![entry(&k, "rustc", "rapier", "balls", &[1.0])],
            vec![entry(&k, "rustc", "rapier", "balls", &[1.0])],
            &k,
            &k,
        );
        assert_eq!(
            backends(&combined),
            vec!["rapier {master@aaa}", "rapier {master@aaa}"]
        );
    }
}
