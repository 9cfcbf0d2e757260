//! # Match Evaluator
//!
//! Pure visibility computation. Given the items and the current
//! [`FilterState`], decides which items are shown and counts them. Applying the
//! result to a rendering surface is a separate step (see [`crate::surface`]),
//! so everything here can be tested without any UI.
//!
//! An item is visible iff every predicate holds:
//!
//! 1. the search text is empty, or is a substring of the lower-cased title or
//!    of the lower-cased description;
//! 2. each selected facet is empty, or equals the item's value exactly.
//!
//! There is no ranking and no reordering; the output is position-aligned with
//! the input. Evaluation cannot fail.

use crate::model::{Facet, FilterState, Item, ResultSummary};

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One flag per item, in collection order.
    pub visible: Vec<bool>,
    pub summary: ResultSummary,
}

impl Evaluation {
    /// Positions of the visible items.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
            .collect()
    }
}

pub fn evaluate(items: &[Item], state: &FilterState) -> Evaluation {
    let visible: Vec<bool> = items.iter().map(|item| matches(item, state)).collect();
    let visible_count = visible.iter().filter(|&&v| v).count();
    let summary = ResultSummary {
        visible_count,
        total_count: items.len(),
    };

    tracing::debug!(
        visible = summary.visible_count,
        total = summary.total_count,
        search = %state.search_text,
        "evaluated filters"
    );

    Evaluation { visible, summary }
}

/// Whether a single item satisfies all four predicates.
pub fn matches(item: &Item, state: &FilterState) -> bool {
    matches_search(item, &state.search_text)
        && Facet::ALL
            .iter()
            .all(|&facet| matches_facet(item.facet_value(facet), state.selected(facet)))
}

fn matches_search(item: &Item, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(term) || item.description.to_lowercase().contains(term)
}

fn matches_facet(value: &str, selected: &str) -> bool {
    selected.is_empty() || value == selected
}
