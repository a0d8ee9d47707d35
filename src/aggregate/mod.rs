//! Distribution Aggregator
//!
//! Turns a list of company records into count series for the dashboard
//! charts:
//!
//! - **series**: `count_by` / `aggregate` and the `Series` type
//! - **cache**: Memo keyed on record-list snapshot identity
//! - **chart**: Chart-ready bar and pie models built from series
//!
//! # Ordering
//!
//! ```text
//! records → count in first-encounter order → stable sort by count desc
//! ```
//!
//! Equal counts keep the order in which their keys first appeared, so the
//! same input always renders the same way.
//!
//! # Example
//!
//! ```rust
//! use pantopia::aggregate::{aggregate, GroupBy};
//! use pantopia::company::Company;
//!
//! let records = vec![
//!     Company::new("Acme", "Tech", "Active"),
//!     Company::new("Initech", "Tech", "Lead"),
//!     Company::new("Globex", "Finance", "Active"),
//! ];
//!
//! let series = aggregate(&records, GroupBy::Industry);
//! assert_eq!(series.entries()[0].key, "Tech");
//! assert_eq!(series.entries()[0].count, 2);
//! assert_eq!(series.total(), records.len());
//! ```

pub mod cache;
pub mod chart;

pub use cache::{CacheStats, DistributionCache};
pub use chart::{BarChart, ChartPoint, ChartsView, PieChart, PieSlice, PIE_COLORS};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::company::Company;

/// Attribute a series is grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Industry,
    Status,
}

impl GroupBy {
    /// Both dimensions, in dashboard order
    pub fn all() -> &'static [GroupBy] {
        &[GroupBy::Industry, GroupBy::Status]
    }

    /// Read the grouping attribute from a record
    pub fn select<'a>(&self, company: &'a Company) -> &'a str {
        match self {
            GroupBy::Industry => &company.industry,
            GroupBy::Status => &company.status,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupBy::Industry => write!(f, "industry"),
            GroupBy::Status => write!(f, "status"),
        }
    }
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "industry" => Ok(GroupBy::Industry),
            "status" => Ok(GroupBy::Status),
            other => Err(format!(
                "Invalid grouping: {}. Use industry or status",
                other
            )),
        }
    }
}

/// One bar / slice of a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub key: String,
    /// Always at least 1; absent keys are omitted
    pub count: usize,
}

/// Count series ordered by count, highest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    entries: Vec<SeriesEntry>,
}

impl Series {
    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of aggregated records
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for a key, if present
    pub fn count_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }

    /// Keys in series order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Convert to the `{label, value}` shape chart widgets consume
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.entries
            .iter()
            .map(|e| ChartPoint {
                label: e.key.clone(),
                value: e.count as u64,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesEntry;
    type IntoIter = std::slice::Iter<'a, SeriesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count records by an arbitrary string key.
///
/// Keys are used verbatim, including the empty string. The result is
/// sorted by count descending with a stable sort, so ties keep their
/// first-encounter order.
pub fn count_by<'a, T, I, F>(records: I, key_fn: F) -> Series
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a str,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut entries: Vec<SeriesEntry> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match positions.get(key) {
            Some(&idx) => entries[idx].count += 1,
            None => {
                positions.insert(key, entries.len());
                entries.push(SeriesEntry {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Series { entries }
}

/// Count companies by industry or status
pub fn aggregate(records: &[Company], group_by: GroupBy) -> Series {
    count_by(records, |c| group_by.select(c))
}

/// Both dashboard series for one record list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Number of records aggregated
    pub total: usize,
    pub industry: Series,
    pub status: Series,
}

impl Distribution {
    pub fn from_records(records: &[Company]) -> Self {
        Self {
            total: records.len(),
            industry: aggregate(records, GroupBy::Industry),
            status: aggregate(records, GroupBy::Status),
        }
    }

    /// Series for one dimension
    pub fn series(&self, group_by: GroupBy) -> &Series {
        match group_by {
            GroupBy::Industry => &self.industry,
            GroupBy::Status => &self.status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn company(industry: &str, status: &str) -> Company {
        Company::new("Test Co", industry, status)
    }

    fn sample() -> Vec<Company> {
        vec![
            company("Tech", "Active"),
            company("Tech", "Lead"),
            company("Finance", "Active"),
        ]
    }

    fn mixed() -> Vec<Company> {
        vec![
            company("Retail", "Lead"),
            company("Tech", "Active"),
            company("Health", "Churned"),
            company("Tech", "Active"),
            company("", "Lead"),
            company("Retail", "Active"),
            company("Tech", "Prospect"),
            company("Energy", "Lead"),
        ]
    }

    fn entries(series: &Series) -> Vec<(&str, usize)> {
        series.iter().map(|e| (e.key.as_str(), e.count)).collect()
    }

    #[test]
    fn test_scenario_industry_and_status() {
        let records = sample();

        let industry = aggregate(&records, GroupBy::Industry);
        assert_eq!(entries(&industry), vec![("Tech", 2), ("Finance", 1)]);

        let status = aggregate(&records, GroupBy::Status);
        assert_eq!(entries(&status), vec![("Active", 2), ("Lead", 1)]);
    }

    #[test]
    fn test_empty_input() {
        let dist = Distribution::from_records(&[]);
        assert!(dist.is_empty());
        assert!(dist.industry.is_empty());
        assert!(dist.status.is_empty());
        assert_eq!(dist.industry.total(), 0);
    }

    #[test]
    fn test_totals_match_record_count() {
        let records = mixed();
        for group_by in GroupBy::all() {
            let series = aggregate(&records, *group_by);
            assert_eq!(series.total(), records.len(), "total for {}", group_by);
            assert!(series.iter().all(|e| e.count >= 1));
        }
    }

    #[test]
    fn test_keys_are_the_distinct_values() {
        let records = mixed();
        let series = aggregate(&records, GroupBy::Industry);

        let keys: HashSet<&str> = series.keys().collect();
        let distinct: HashSet<&str> = records.iter().map(|c| c.industry.as_str()).collect();
        assert_eq!(keys, distinct);
        assert_eq!(keys.len(), series.len());
    }

    #[test]
    fn test_sorted_descending() {
        let series = aggregate(&mixed(), GroupBy::Status);
        for pair in series.entries().windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let records = mixed();
        let industry = aggregate(&records, GroupBy::Industry);
        // Tech=3, Retail=2, then Health, "", Energy each 1 in encounter order
        assert_eq!(
            entries(&industry),
            vec![("Tech", 3), ("Retail", 2), ("Health", 1), ("", 1), ("Energy", 1)]
        );
    }

    #[test]
    fn test_empty_string_is_its_own_key() {
        let records = vec![company("", "Active"), company("", "Active"), company("Tech", "")];
        let industry = aggregate(&records, GroupBy::Industry);
        assert_eq!(industry.count_of(""), Some(2));
        assert_eq!(industry.count_of("Tech"), Some(1));

        let status = aggregate(&records, GroupBy::Status);
        assert_eq!(status.count_of(""), Some(1));
        assert_eq!(status.total(), 3);
    }

    #[test]
    fn test_idempotent() {
        let records = mixed();
        let first = Distribution::from_records(&records);
        let second = Distribution::from_records(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_by_generic_key() {
        let words = ["a", "b", "a", "c", "b", "a"];
        let series = count_by(words.iter(), |w| *w);
        assert_eq!(entries(&series), vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_chart_points() {
        let series = aggregate(&sample(), GroupBy::Industry);
        let points = series.chart_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Tech");
        assert_eq!(points[0].value, 2);
    }

    #[test]
    fn test_group_by_parse() {
        assert_eq!("industry".parse::<GroupBy>(), Ok(GroupBy::Industry));
        assert_eq!(" STATUS ".parse::<GroupBy>(), Ok(GroupBy::Status));
        assert!("region".parse::<GroupBy>().is_err());
    }

    #[test]
    fn test_series_serializes_as_list() {
        let series = aggregate(&sample(), GroupBy::Status);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"key": "Active", "count": 2}, {"key": "Lead", "count": 1}])
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn value() -> impl Strategy<Value = String> {
            prop_oneof![Just(String::new()), "[ab]", "[a-d]{1,3}"]
        }

        fn records() -> impl Strategy<Value = Vec<Company>> {
            prop::collection::vec((value(), value()), 0..60).prop_map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(industry, status)| company(&industry, &status))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn test_counts_sum_to_record_count(records in records()) {
                for group_by in GroupBy::all() {
                    let series = aggregate(&records, *group_by);
                    prop_assert_eq!(series.total(), records.len());
                    prop_assert!(series.iter().all(|e| e.count >= 1));
                }
            }

            #[test]
            fn test_keys_match_distinct_values(records in records()) {
                for group_by in GroupBy::all() {
                    let series = aggregate(&records, *group_by);
                    let keys: HashSet<&str> = series.keys().collect();
                    let distinct: HashSet<&str> =
                        records.iter().map(|c| group_by.select(c)).collect();
                    prop_assert_eq!(keys.len(), series.len());
                    prop_assert_eq!(keys, distinct);
                }
            }

            #[test]
            fn test_counts_never_increase(records in records()) {
                for group_by in GroupBy::all() {
                    let series = aggregate(&records, *group_by);
                    for pair in series.entries().windows(2) {
                        prop_assert!(pair[0].count >= pair[1].count);
                    }
                }
            }

            #[test]
            fn test_aggregate_is_idempotent(records in records()) {
                for group_by in GroupBy::all() {
                    prop_assert_eq!(aggregate(&records, *group_by), aggregate(&records, *group_by));
                }
            }

            #[test]
            fn test_equal_counts_follow_first_appearance(records in records()) {
                for group_by in GroupBy::all() {
                    let series = aggregate(&records, *group_by);
                    let first_seen = |key: &str| {
                        records.iter().position(|c| group_by.select(c) == key)
                    };
                    for pair in series.entries().windows(2) {
                        if pair[0].count == pair[1].count {
                            prop_assert!(first_seen(&pair[0].key) < first_seen(&pair[1].key));
                        }
                    }
                }
            }
        }
    }
}
