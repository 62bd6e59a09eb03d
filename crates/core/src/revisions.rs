//! Revision listing and selection

use chrono::SecondsFormat;
use url::form_urlencoded;

use crate::data::{BenchDate, BenchKey};

/// Sort keys newest first, comparing timestamps as numbers
pub fn sort_newest_first(keys: &mut [BenchKey]) {
    keys.sort_by(|a, b| b.date.cmp(&a.date));
}

/// `branch@commit | 2020-09-13T12:26:40.000Z`
pub fn option_label(key: &BenchKey) -> String {
    let when = key
        .date
        .to_datetime()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| key.date.to_string());
    format!("{} | {}", key.revision(), when)
}

/// Revisions asked for through the page URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedDates {
    pub date1: Option<String>,
    pub date2: Option<String>,
}

impl RequestedDates {
    /// Read `date1`/`date2` from a query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut requested = Self::default();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                "date1" => requested.date1 = Some(value.into_owned()),
                "date2" => requested.date2 = Some(value.into_owned()),
                _ => {}
            }
        }
        requested
    }
}

/// The two revisions being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionSelection {
    pub date1: BenchDate,
    pub date2: BenchDate,
}

/// `requested` if it names an available revision
fn resolve(requested: Option<&str>, keys: &[BenchKey]) -> Option<BenchDate> {
    let date: BenchDate = requested?.parse().ok()?;
    keys.iter().any(|k| k.date == date).then_some(date)
}

/// Pick the revisions to show on first load.
///
/// `keys` must already be sorted newest first. Requested dates win when they
/// match an available revision; otherwise the second newest revision is
/// compared against the newest. Returns `None` when nothing is available.
pub fn initial_selection(keys: &[BenchKey], requested: &RequestedDates) -> Option<RevisionSelection> {
    let newest = keys.first()?.date;
    let previous = keys.get(1).map_or(newest, |k| k.date);

    let date1 = resolve(requested.date1.as_deref(), keys).unwrap_or(previous);
    let date2 = resolve(requested.date2.as_deref(), keys).unwrap_or(newest);

    Some(RevisionSelection { date1, date2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::tests::key;
    use pretty_assertions::assert_eq;

    fn millis(keys: &[BenchKey]) -> Vec<i64> {
        keys.iter().map(|k| k.date.millis()).collect()
    }

    #[test]
    fn test_sort_is_numeric() {
        let mut keys = vec![key("a", "1", 1000), key("b", "2", 20), key("c", "3", 300)];
        sort_newest_first(&mut keys);
        assert_eq!(millis(&keys), vec![1000, 300, 20]);
    }

    #[test]
    fn test_option_label() {
        let k = key("master", "abc123", 1_600_000_000_000);
        assert_eq!(option_label(&k), "master@abc123 | 2020-09-13T12:26:40.000Z");
    }

    #[test]
    fn test_requested_from_query() {
        let requested = RequestedDates::from_query("?date1=1000&foo=bar&date2=2000");
        assert_eq!(requested.date1.as_deref(), Some("1000"));
        assert_eq!(requested.date2.as_deref(), Some("2000"));

        assert_eq!(RequestedDates::from_query(""), RequestedDates::default());
    }

    #[test]
    fn test_default_selection() {
        let keys = vec![key("m", "new", 3000), key("m", "mid", 2000), key("m", "old", 1000)];

        let selection = initial_selection(&keys, &RequestedDates::default()).unwrap();

        assert_eq!(selection.date1.millis(), 2000);
        assert_eq!(selection.date2.millis(), 3000);
    }

    #[test]
    fn test_requested_selection() {
        let keys = vec![key("m", "new", 3000), key("m", "mid", 2000), key("m", "old", 1000)];
        let requested = RequestedDates::from_query("date1=1000&date2=2000");

        let selection = initial_selection(&keys, &requested).unwrap();

        assert_eq!(selection.date1.millis(), 1000);
        assert_eq!(selection.date2.millis(), 2000);
    }

    #[test]
    fn test_invalid_request_falls_back() {
        let keys = vec![key("m", "new", 3000), key("m", "mid", 2000)];
        let requested = RequestedDates::from_query("date1=undefined&date2=42");

        let selection = initial_selection(&keys, &requested).unwrap();

        assert_eq!(selection.date1.millis(), 2000);
        assert_eq!(selection.date2.millis(), 3000);
    }

    #[test]
    fn test_single_revision() {
        let keys = vec![key("m", "only", 5)];
        let selection = initial_selection(&keys, &RequestedDates::default()).unwrap();
        assert_eq!(selection.date1, selection.date2);
    }

    #[test]
    fn test_no_revisions() {
        let requested = RequestedDates::from_query("date1=1&date2=2");
        assert_eq!(initial_selection(&[], &requested), None);
    }
}
