//! Read-only queries over a slice of person records.
//!
//! Both queries are single linear passes. They never reorder: results
//! come back in the same order as the input slice.

use rolodex_types::{PeopleStats, Person};

/// Return every record whose name contains `needle`, ignoring case.
///
/// Matching is a plain substring test on the lower-cased name, not a
/// prefix or token match. An empty needle matches every record; callers
/// that treat an empty query as invalid must reject it before calling.
pub fn search(records: &[Person], needle: &str) -> Vec<Person> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Summarize the collection: record count, average age, and the records.
///
/// The average is `sum / total` with integer division, which truncates
/// toward zero. An empty collection averages to `0`. The age sum
/// saturates rather than overflowing.
pub fn stats(records: &[Person]) -> PeopleStats {
    let total = records.len();
    let sum = records
        .iter()
        .fold(0_i64, |acc, p| acc.saturating_add(p.age));

    let average_age = i64::try_from(total)
        .ok()
        .and_then(|count| sum.checked_div(count))
        .unwrap_or(0);

    PeopleStats {
        total,
        average_age,
        person_sample: records.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use rolodex_types::PersonId;

    use super::*;

    fn people(entries: &[(&str, i64)]) -> Vec<Person> {
        entries
            .iter()
            .zip(1_u64..)
            .map(|(&(name, age), id)| Person {
                id: PersonId(id),
                name: name.to_owned(),
                age,
                phone: String::new(),
            })
            .collect()
    }

    fn names(found: &[Person]) -> Vec<&str> {
        found.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = people(&[("Diony", 24), ("Alice", 30)]);

        assert_eq!(names(&search(&records, "ion")), vec!["Diony"]);
        assert_eq!(names(&search(&records, "DIONY")), vec!["Diony"]);
        assert_eq!(names(&search(&records, "diony")), vec!["Diony"]);
        assert!(search(&records, "zed").is_empty());
    }

    #[test]
    fn search_keeps_insertion_order() {
        let records = people(&[("Anna", 1), ("Bob", 2), ("Hanna", 3)]);
        assert_eq!(names(&search(&records, "ANN")), vec!["Anna", "Hanna"]);
    }

    #[test]
    fn search_with_empty_needle_matches_everything() {
        let records = people(&[("A", 1), ("B", 2)]);
        assert_eq!(search(&records, "").len(), 2);
    }

    #[test]
    fn stats_averages_ages() {
        let summary = stats(&people(&[("A", 20), ("B", 30)]));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.average_age, 25);
        assert_eq!(names(&summary.person_sample), vec!["A", "B"]);
    }

    #[test]
    fn stats_truncates_average() {
        let summary = stats(&people(&[("A", 20), ("B", 25)]));
        assert_eq!(summary.average_age, 22);
    }

    #[test]
    fn stats_on_empty_collection_is_zero() {
        let summary = stats(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_age, 0);
        assert!(summary.person_sample.is_empty());
    }

    #[test]
    fn stats_sum_saturates() {
        let summary = stats(&people(&[("A", i64::MAX), ("B", i64::MAX)]));
        assert_eq!(summary.average_age, i64::MAX / 2);
    }
}
