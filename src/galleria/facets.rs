//! Facet extraction: one pass over the collection at startup.

use crate::model::{FacetSet, Item};
use std::collections::BTreeSet;

/// Derives the distinct values of each facet from `items`.
///
/// Blank values are skipped. Mediums and series come back in ascending order,
/// years newest first.
pub fn extract_facets(items: &[Item]) -> FacetSet {
    let mut mediums = BTreeSet::new();
    let mut years = BTreeSet::new();
    let mut series = BTreeSet::new();

    for item in items {
        insert_non_blank(&mut mediums, &item.medium);
        insert_non_blank(&mut years, &item.year);
        insert_non_blank(&mut series, &item.series);
    }

    tracing::debug!(
        items = items.len(),
        mediums = mediums.len(),
        years = years.len(),
        series = series.len(),
        "extracted facets"
    );

    FacetSet {
        mediums: mediums.into_iter().collect(),
        years: years.into_iter().rev().collect(),
        series: series.into_iter().collect(),
    }
}

fn insert_non_blank(set: &mut BTreeSet<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(medium: &str, year: &str, series: &str) -> Item {
        Item::new("t", "d", medium, year, series)
    }

    #[test]
    fn derives_sorted_distinct_values() {
        let items = vec![
            item("Oil", "2020", ""),
            item("Oil", "2019", "Storm"),
            item("Ink", "2019", ""),
        ];

        let facets = extract_facets(&items);
        assert_eq!(facets.mediums, vec!["Ink", "Oil"]);
        assert_eq!(facets.years, vec!["2020", "2019"]);
        assert_eq!(facets.series, vec!["Storm"]);
    }

    #[test]
    fn empty_collection_has_no_facets() {
        let facets = extract_facets(&[]);
        assert!(facets.is_empty());
    }

    #[test]
    fn whitespace_only_values_are_skipped() {
        let items = vec![Item {
            title: "t".into(),
            description: String::new(),
            medium: "   ".into(),
            year: "\t".into(),
            series: " Storm ".into(),
        }];

        let facets = extract_facets(&items);
        assert!(facets.mediums.is_empty());
        assert!(facets.years.is_empty());
        assert_eq!(facets.series, vec!["Storm"]);
    }

    #[test]
    fn years_sort_newest_first() {
        let items = vec![
            item("", "1998", ""),
            item("", "2021", ""),
            item("", "2004", ""),
        ];
        assert_eq!(extract_facets(&items).years, vec!["2021", "2004", "1998"]);
    }
}
