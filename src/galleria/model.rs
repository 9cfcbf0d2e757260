use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default noun used in the status line ("Showing all 3 artworks").
pub const DEFAULT_NOUN: &str = "artworks";

/// One artwork card as rendered on the gallery page.
///
/// Every attribute is read-only to the engine. Facet attributes are trimmed on
/// construction so they compare equal to the values offered by the selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub medium: String,
    pub year: String,
    pub series: String,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        medium: impl Into<String>,
        year: impl Into<String>,
        series: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            medium: medium.into().trim().to_string(),
            year: year.into().trim().to_string(),
            series: series.into().trim().to_string(),
        }
    }

    /// Builds an item from an element's attribute bag.
    ///
    /// Keys are looked up both bare (`medium`) and with the dataset prefix
    /// (`data-medium`). Absent attributes read as empty strings.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Self {
        let lookup = |name: &str| -> String {
            attrs
                .get(&format!("data-{}", name))
                .or_else(|| attrs.get(name))
                .cloned()
                .unwrap_or_default()
        };

        Self::new(
            lookup("title"),
            lookup("description"),
            lookup("medium"),
            lookup("year"),
            lookup("series"),
        )
    }

    /// Value of the given facet attribute on this item.
    pub fn facet_value(&self, facet: Facet) -> &str {
        match facet {
            Facet::Medium => &self.medium,
            Facet::Year => &self.year,
            Facet::Series => &self.series,
        }
    }
}

/// A filterable dimension whose values are derived from the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Medium,
    Year,
    Series,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Medium, Facet::Year, Facet::Series];

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Medium => "Medium",
            Facet::Year => "Year",
            Facet::Series => "Series",
        }
    }

    /// Label of the leading "no constraint" selector option.
    pub fn any_label(&self) -> &'static str {
        match self {
            Facet::Medium => "All Mediums",
            Facet::Year => "All Years",
            Facet::Series => "All Series",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            Facet::Medium => "Filter by medium",
            Facet::Year => "Filter by year",
            Facet::Series => "Filter by series",
        }
    }

    pub fn parse(s: &str) -> Option<Facet> {
        match s.to_ascii_lowercase().as_str() {
            "medium" => Some(Facet::Medium),
            "year" => Some(Facet::Year),
            "series" => Some(Facet::Series),
            _ => None,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Distinct values per facet, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSet {
    pub mediums: Vec<String>,
    pub years: Vec<String>,
    pub series: Vec<String>,
}

impl FacetSet {
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Medium => &self.mediums,
            Facet::Year => &self.years,
            Facet::Series => &self.series,
        }
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.mediums.is_empty() && self.years.is_empty() && self.series.is_empty()
    }

    /// Selections in `state` that name a value no item carries.
    ///
    /// Such a state is still valid and simply matches nothing.
    pub fn unknown_selections(&self, state: &FilterState) -> Vec<(Facet, String)> {
        Facet::ALL
            .iter()
            .filter_map(|&facet| {
                let selected = state.selected(facet);
                if selected.is_empty() || self.contains(facet, selected) {
                    None
                } else {
                    Some((facet, selected.to_string()))
                }
            })
            .collect()
    }
}

/// The current query. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub selected_medium: String,
    pub selected_year: String,
    pub selected_series: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        self.set_search_text(raw);
        self
    }

    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set_facet(facet, value);
        self
    }

    /// Stores the search text lower-cased and trimmed.
    pub fn set_search_text(&mut self, raw: &str) {
        self.search_text = raw.trim().to_lowercase();
    }

    pub fn set_facet(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        match facet {
            Facet::Medium => self.selected_medium = value,
            Facet::Year => self.selected_year = value,
            Facet::Series => self.selected_series = value,
        }
    }

    pub fn selected(&self, facet: Facet) -> &str {
        match facet {
            Facet::Medium => &self.selected_medium,
            Facet::Year => &self.selected_year,
            Facet::Series => &self.selected_series,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Visible/total counts from one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub visible_count: usize,
    pub total_count: usize,
}

impl ResultSummary {
    pub fn all_visible(&self) -> bool {
        self.visible_count == self.total_count
    }

    /// Status line using a custom noun in place of "artworks".
    pub fn status_text(&self, noun: &str) -> String {
        if self.all_visible() {
            format!("Showing all {} {}", self.total_count, noun)
        } else {
            format!(
                "Showing {} of {} {}",
                self.visible_count, self.total_count, noun
            )
        }
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_text(DEFAULT_NOUN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_attributes_accepts_both_key_forms() {
        let mut attrs = HashMap::new();
        attrs.insert("data-title".to_string(), "Red Dawn".to_string());
        attrs.insert("medium".to_string(), " Oil ".to_string());

        let item = Item::from_attributes(&attrs);
        assert_eq!(item.title, "Red Dawn");
        assert_eq!(item.medium, "Oil");
        assert_eq!(item.year, "");
        assert_eq!(item.series, "");
    }

    #[test]
    fn search_text_is_lowercased_and_trimmed() {
        let state = FilterState::new().with_search("  Red DAWN ");
        assert_eq!(state.search_text, "red dawn");
    }

    #[test]
    fn summary_literal_forms() {
        let all = ResultSummary {
            visible_count: 3,
            total_count: 3,
        };
        let some = ResultSummary {
            visible_count: 1,
            total_count: 3,
        };
        assert_eq!(all.to_string(), "Showing all 3 artworks");
        assert_eq!(some.to_string(), "Showing 1 of 3 artworks");
        assert_eq!(some.status_text("prints"), "Showing 1 of 3 prints");
    }

    #[test]
    fn empty_collection_reads_as_all_visible() {
        let summary = ResultSummary {
            visible_count: 0,
            total_count: 0,
        };
        assert_eq!(summary.to_string(), "Showing all 0 artworks");
    }

    #[test]
    fn unknown_selections_ignore_empty_and_known_values() {
        let facets = FacetSet {
            mediums: vec!["Oil".into()],
            years: vec!["2020".into()],
            series: vec![],
        };
        let state = FilterState::new()
            .with_facet(Facet::Medium, "Oil")
            .with_facet(Facet::Series, "Gone");

        assert_eq!(
            facets.unknown_selections(&state),
            vec![(Facet::Series, "Gone".to_string())]
        );
    }

    #[test]
    fn facet_parse_is_case_insensitive() {
        assert_eq!(Facet::parse("Medium"), Some(Facet::Medium));
        assert_eq!(Facet::parse("YEAR"), Some(Facet::Year));
        assert_eq!(Facet::parse("colour"), None);
    }
}
