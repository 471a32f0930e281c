//! Grouping, filtering and summary statistics over advisor records.
//!
//! All operations borrow the input slice and never modify it. Groupings hand
//! back references, so the same record can appear in several views without
//! being copied.

use crate::models::Advisor;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Records grouped by specialty, keys in first-seen order.
pub type SpecialtyGroups<'a> = IndexMap<&'a str, Vec<&'a Advisor>>;

/// Statistics for one specialty group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyStats {
    /// The specialty this group represents
    pub specialty: String,

    /// Number of records in the group
    pub count: usize,

    /// Specialty histogram computed over the group's own records.
    ///
    /// Because a group only holds one specialty, this always has a single
    /// entry equal to `count`.
    pub specialty_distribution: BTreeMap<String, u64>,
}

/// Dataset-wide summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records summarized, including those without a specialty
    pub total_count: usize,

    /// Specialties present in the dataset
    pub distinct_specialties: BTreeSet<String>,

    /// Number of records per specialty
    pub specialty_counts: BTreeMap<String, u64>,
}

/// Aggregation operations over advisor records.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsService;

impl StatisticsService {
    pub fn new() -> Self {
        Self
    }

    /// Group records by exact specialty value.
    ///
    /// Records without a specialty are left out of every group. Records keep
    /// their input order inside each group.
    pub fn group_by_specialty<'a>(&self, advisors: &'a [Advisor]) -> SpecialtyGroups<'a> {
        let mut groups: SpecialtyGroups<'a> = IndexMap::new();
        for advisor in advisors {
            if let Some(specialty) = advisor.specialty() {
                groups.entry(specialty).or_default().push(advisor);
            }
        }
        groups
    }

    /// Per-specialty count and distribution.
    pub fn per_specialty_statistics(&self, advisors: &[Advisor]) -> IndexMap<String, SpecialtyStats> {
        self.group_by_specialty(advisors)
            .into_iter()
            .map(|(specialty, members)| {
                let stats = SpecialtyStats {
                    specialty: specialty.to_string(),
                    count: members.len(),
                    specialty_distribution: specialty_histogram(members.iter().copied()),
                };
                (specialty.to_string(), stats)
            })
            .collect()
    }

    /// Records matching every supplied criterion.
    ///
    /// Criteria compare case-insensitively against the whole field value.
    /// Absent or blank criteria match everything.
    pub fn filter<'a>(
        &self,
        advisors: &'a [Advisor],
        specialty: Option<&str>,
        location: Option<&str>,
    ) -> Vec<&'a Advisor> {
        let specialty = criterion(specialty);
        let location = criterion(location);

        advisors
            .iter()
            .filter(|advisor| {
                specialty.as_deref().map_or(true, |wanted| {
                    matches_ignore_case(advisor.specialty(), wanted)
                })
            })
            .filter(|advisor| {
                location.as_deref().map_or(true, |wanted| {
                    matches_ignore_case(advisor.location(), wanted)
                })
            })
            .collect()
    }

    /// The first `n` records ordered by specialty name.
    ///
    /// The sort is stable, so ties keep input order. Records without a
    /// specialty sort after all others.
    pub fn top_by_specialty<'a>(&self, advisors: &'a [Advisor], n: usize) -> Vec<&'a Advisor> {
        let mut sorted: Vec<&Advisor> = advisors.iter().collect();
        sorted.sort_by(|a, b| match (a.specialty(), b.specialty()) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        sorted.truncate(n);
        sorted
    }

    /// Dataset-wide totals and specialty histogram.
    pub fn summary(&self, advisors: &[Advisor]) -> Summary {
        let specialty_counts = specialty_histogram(advisors.iter());
        Summary {
            total_count: advisors.len(),
            distinct_specialties: specialty_counts.keys().cloned().collect(),
            specialty_counts,
        }
    }
}

fn specialty_histogram<'a>(advisors: impl Iterator<Item = &'a Advisor>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for specialty in advisors.filter_map(Advisor::specialty) {
        *counts.entry(specialty.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Lower-cased criterion, or `None` when it imposes no constraint.
fn criterion(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_lowercase)
}

fn matches_ignore_case(value: Option<&str>, wanted_lower: &str) -> bool {
    value.map_or(false, |v| v.to_lowercase() == wanted_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor(id: i64, specialty: Option<&str>, location: &str) -> Advisor {
        Advisor {
            id: Some(id),
            specialty: specialty.map(str::to_string),
            location: Some(location.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Advisor> {
        vec![
            advisor(1, Some("Ventas"), "Madrid"),
            advisor(2, Some("Finanzas"), "Sevilla"),
            advisor(3, None, "Madrid"),
            advisor(4, Some("Ventas"), "Bilbao"),
            advisor(5, Some("Finanzas"), "Madrid"),
            advisor(6, Some("Ventas"), "madrid"),
        ]
    }

    fn ids(advisors: &[&Advisor]) -> Vec<i64> {
        advisors.iter().filter_map(|a| a.id).collect()
    }

    #[test]
    fn test_group_by_specialty_keeps_order() {
        let data = sample();
        let groups = StatisticsService::new().group_by_specialty(&data);

        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Ventas", "Finanzas"]);
        assert_eq!(ids(&groups["Ventas"]), vec![1, 4, 6]);
        assert_eq!(ids(&groups["Finanzas"]), vec![2, 5]);
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let data = vec![
            advisor(1, Some("Ventas"), "Madrid"),
            advisor(2, Some("ventas"), "Madrid"),
        ];
        let groups = StatisticsService::new().group_by_specialty(&data);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_per_specialty_distribution_is_group_local() {
        let data = sample();
        let stats = StatisticsService::new().per_specialty_statistics(&data);

        let ventas = &stats["Ventas"];
        assert_eq!(ventas.count, 3);
        assert_eq!(
            ventas.specialty_distribution,
            BTreeMap::from([("Ventas".to_string(), 3)])
        );
        assert_eq!(stats["Finanzas"].specialty_distribution.len(), 1);
    }

    #[test]
    fn test_filter_by_specialty_and_location() {
        let data = sample();
        let service = StatisticsService::new();

        assert_eq!(ids(&service.filter(&data, Some("VENTAS"), None)), vec![1, 4, 6]);
        assert_eq!(
            ids(&service.filter(&data, Some("ventas"), Some("MADRID"))),
            vec![1, 6]
        );
        assert_eq!(ids(&service.filter(&data, None, Some("madrid"))), vec![1, 3, 5, 6]);
        assert_eq!(service.filter(&data, Some("  "), None).len(), data.len());
        assert_eq!(service.filter(&data, None, None).len(), data.len());
        assert!(service.filter(&data, Some("Vent"), None).is_empty());
    }

    #[test]
    fn test_top_by_specialty() {
        let data = sample();
        let service = StatisticsService::new();

        assert_eq!(ids(&service.top_by_specialty(&data, 3)), vec![2, 5, 1]);
        assert_eq!(ids(&service.top_by_specialty(&data, 100)), vec![2, 5, 1, 4, 6, 3]);
        assert!(service.top_by_specialty(&data, 0).is_empty());
    }

    #[test]
    fn test_summary() {
        let data = sample();
        let summary = StatisticsService::new().summary(&data);

        assert_eq!(summary.total_count, 6);
        assert_eq!(
            summary.distinct_specialties,
            BTreeSet::from(["Finanzas".to_string(), "Ventas".to_string()])
        );
        assert_eq!(summary.specialty_counts["Ventas"], 3);
        assert_eq!(summary.specialty_counts["Finanzas"], 2);
        // one record has no specialty
        assert_eq!(summary.specialty_counts.values().sum::<u64>(), 5);
    }

    #[test]
    fn test_summary_of_empty_input() {
        let summary = StatisticsService::new().summary(&[]);
        assert_eq!(summary.total_count, 0);
        assert!(summary.distinct_specialties.is_empty());
        assert!(summary.specialty_counts.is_empty());
    }
}
