//! # Control Surface
//!
//! [`GalleryEngine`] ties the stages together. It is built once from the
//! item collection (running facet extraction), owns the current
//! [`FilterState`], and turns UI events into evaluations:
//!
//! | Event                      | Evaluation                          |
//! |----------------------------|-------------------------------------|
//! | search text changed        | debounced, fires from [`tick`]      |
//! | facet selection changed    | immediate                           |
//! | reset                      | immediate                           |
//!
//! The engine is in one of two phases, [`Phase::Idle`] or
//! [`Phase::PendingEvaluation`], depending on whether the search debounce
//! timer is armed. Facet changes and resets leave an armed timer alone: the
//! pending search evaluation still fires afterwards and evaluates whatever the
//! state is at that moment.
//!
//! [`tick`]: GalleryEngine::tick

use crate::debounce::{Clock, Debouncer, DEFAULT_WINDOW};
use crate::evaluate::{evaluate, Evaluation};
use crate::facets::extract_facets;
use crate::model::{Facet, FacetSet, FilterState, Item, ResultSummary, DEFAULT_NOUN};
use crate::surface::{render, GallerySurface};
use serde::Serialize;
use std::time::Duration;

pub const SEARCH_PLACEHOLDER: &str = "Search artwork...";
pub const SEARCH_ARIA_LABEL: &str = "Search artwork by title or description";
pub const RESET_LABEL: &str = "Reset Filters";
pub const RESET_ARIA_LABEL: &str = "Reset all filters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingEvaluation,
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub debounce_window: Duration,
    pub noun: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_WINDOW,
            noun: DEFAULT_NOUN.to_string(),
        }
    }
}

pub struct GalleryEngine<C: Clock, S: GallerySurface> {
    items: Vec<Item>,
    facets: FacetSet,
    state: FilterState,
    search_input: String,
    search_timer: Debouncer<()>,
    clock: C,
    surface: S,
    noun: String,
    last: Evaluation,
    evaluations: usize,
}

impl<C: Clock, S: GallerySurface> GalleryEngine<C, S> {
    /// Builds the engine for a page.
    ///
    /// `gallery` is `None` when the page has no gallery container; the feature
    /// is then disabled and no engine is created.
    pub fn init(
        gallery: Option<Vec<Item>>,
        clock: C,
        surface: S,
        options: EngineOptions,
    ) -> Option<Self> {
        let Some(items) = gallery else {
            tracing::debug!("no gallery container, filtering disabled");
            return None;
        };

        let facets = extract_facets(&items);
        let last = Evaluation {
            visible: vec![true; items.len()],
            summary: ResultSummary {
                visible_count: items.len(),
                total_count: items.len(),
            },
        };

        Some(Self {
            items,
            facets,
            state: FilterState::default(),
            search_input: String::new(),
            search_timer: Debouncer::new(options.debounce_window),
            clock,
            surface,
            noun: options.noun,
            last,
            evaluations: 0,
        })
    }

    /// Stores the new search text and (re)arms the debounce timer.
    ///
    /// Matching uses the normalized copy in [`FilterState`]; the text as typed
    /// is kept for [`GalleryEngine::controls`].
    pub fn on_search_text_changed(&mut self, raw: &str) {
        self.search_input = raw.to_string();
        self.state.set_search_text(raw);
        let now = self.clock.now();
        self.search_timer.schedule((), now);
    }

    /// Stores a facet selection and evaluates immediately.
    pub fn on_facet_changed(&mut self, facet: Facet, value: &str) -> ResultSummary {
        self.state.set_facet(facet, value);
        self.apply()
    }

    /// Clears every field back to the startup state and evaluates.
    pub fn reset(&mut self) -> ResultSummary {
        self.state = FilterState::default();
        self.search_input.clear();
        self.apply()
    }

    /// Runs the pending search evaluation if its window has elapsed.
    pub fn tick(&mut self) -> Option<ResultSummary> {
        let now = self.clock.now();
        self.search_timer.fire_due(now).map(|()| self.apply())
    }

    pub fn phase(&self) -> Phase {
        if self.search_timer.is_armed() {
            Phase::PendingEvaluation
        } else {
            Phase::Idle
        }
    }

    /// When the pending search evaluation is due, if one is armed.
    pub fn pending_deadline(&self) -> Option<Duration> {
        self.search_timer.deadline()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn last_evaluation(&self) -> &Evaluation {
        &self.last
    }

    /// Number of evaluations run since init.
    pub fn evaluation_count(&self) -> usize {
        self.evaluations
    }

    pub fn status_text(&self) -> String {
        self.last.summary.status_text(&self.noun)
    }

    /// Render model of the filter controls for the current state.
    pub fn controls(&self) -> ControlsView {
        let selectors = Facet::ALL
            .iter()
            .map(|&facet| FacetSelector::build(facet, &self.facets, self.state.selected(facet)))
            .collect();

        ControlsView {
            search: SearchControl {
                value: self.search_input.clone(),
                placeholder: SEARCH_PLACEHOLDER,
                aria_label: SEARCH_ARIA_LABEL,
            },
            selectors,
            reset: ResetControl {
                label: RESET_LABEL,
                aria_label: RESET_ARIA_LABEL,
            },
            status: self.status_text(),
        }
    }

    fn apply(&mut self) -> ResultSummary {
        let evaluation = evaluate(&self.items, &self.state);
        let status = evaluation.summary.status_text(&self.noun);
        render(&mut self.surface, &evaluation, &status);
        self.evaluations += 1;
        self.last = evaluation;
        self.last.summary
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlsView {
    pub search: SearchControl,
    pub selectors: Vec<FacetSelector>,
    pub reset: ResetControl,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchControl {
    pub value: String,
    pub placeholder: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetControl {
    pub label: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetSelector {
    pub facet: Facet,
    pub label: &'static str,
    pub aria_label: &'static str,
    pub options: Vec<SelectOption>,
}

impl FacetSelector {
    fn build(facet: Facet, facets: &FacetSet, selected: &str) -> Self {
        let mut options = Vec::with_capacity(facets.values(facet).len() + 1);
        options.push(SelectOption {
            value: String::new(),
            label: facet.any_label().to_string(),
            selected: selected.is_empty(),
        });
        options.extend(facets.values(facet).iter().map(|value| SelectOption {
            value: value.clone(),
            label: value.clone(),
            selected: value == selected,
        }));

        Self {
            facet,
            label: facet.label(),
            aria_label: facet.aria_label(),
            options,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::{ManualClock, SystemClock};
    use crate::surface::MemorySurface;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scenario_items() -> Vec<Item> {
        vec![
            Item::new("Red Dawn", "", "Oil", "2020", "Storm"),
            Item::new("Blue Dusk", "", "Ink", "2019", ""),
            Item::new("Red Tide", "", "Oil", "2019", "Storm"),
        ]
    }

    fn engine() -> (GalleryEngine<ManualClock, MemorySurface>, ManualClock) {
        let clock = ManualClock::new();
        let engine = GalleryEngine::init(
            Some(scenario_items()),
            clock.clone(),
            MemorySurface::with_items(3),
            EngineOptions::default(),
        )
        .unwrap();
        (engine, clock)
    }

    #[test]
    fn missing_container_disables_the_feature() {
        let engine = GalleryEngine::init(
            None,
            ManualClock::new(),
            MemorySurface::new(),
            EngineOptions::default(),
        );
        assert!(engine.is_none());
    }

    #[test]
    fn end_to_end_scenario() {
        let (mut engine, clock) = engine();

        engine.on_search_text_changed("red");
        clock.advance(ms(300));
        let summary = engine.tick().unwrap();
        assert_eq!(engine.surface().visible_indices(), vec![0, 2]);
        assert_eq!(summary.to_string(), "Showing 2 of 3 artworks");

        engine.on_facet_changed(Facet::Medium, "Oil");
        assert_eq!(engine.surface().visible_indices(), vec![0, 2]);

        engine.on_facet_changed(Facet::Year, "2019");
        assert_eq!(engine.surface().visible_indices(), vec![2]);
        assert_eq!(engine.surface().last_status(), Some("Showing 1 of 3 artworks"));

        engine.reset();
        assert_eq!(engine.surface().visible_indices(), vec![0, 1, 2]);
        assert_eq!(engine.surface().last_status(), Some("Showing all 3 artworks"));
    }

    #[test]
    fn fast_typing_coalesces_into_one_evaluation() {
        let (mut engine, clock) = engine();

        for (i, text) in ["b", "bl", "blu", "blue"].iter().enumerate() {
            if i > 0 {
                clock.advance(ms(100));
            }
            engine.on_search_text_changed(text);
            assert_eq!(engine.tick(), None);
        }
        assert_eq!(engine.phase(), Phase::PendingEvaluation);
        assert_eq!(engine.evaluation_count(), 0);

        clock.advance(ms(299));
        assert_eq!(engine.tick(), None);
        clock.advance(ms(1));
        assert!(engine.tick().is_some());

        assert_eq!(engine.evaluation_count(), 1);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.surface().visible_indices(), vec![1]);
        assert_eq!(engine.surface().statuses().len(), 1);
    }

    #[test]
    fn reset_restores_startup_state() {
        let (mut engine, _clock) = engine();
        engine.on_search_text_changed("tide");
        engine.on_facet_changed(Facet::Series, "Storm");
        engine.on_facet_changed(Facet::Year, "1900");

        let summary = engine.reset();
        assert_eq!(engine.state(), &FilterState::default());
        assert!(engine.state().is_unconstrained());
        assert!(summary.all_visible());

        engine.reset();
        assert_eq!(engine.state(), &FilterState::default());
    }

    #[test]
    fn facet_change_does_not_cancel_pending_search() {
        let (mut engine, clock) = engine();

        engine.on_search_text_changed("red");
        clock.advance(ms(100));
        let immediate = engine.on_facet_changed(Facet::Year, "2019");
        // The stored search text already applies to the immediate evaluation.
        assert_eq!(immediate.visible_count, 1);
        assert_eq!(engine.phase(), Phase::PendingEvaluation);

        engine.on_facet_changed(Facet::Year, "");
        clock.advance(ms(200));
        let stale = engine.tick().unwrap();
        assert_eq!(stale.visible_count, 2);
        assert_eq!(engine.evaluation_count(), 3);
    }

    #[test]
    fn reset_leaves_pending_search_armed() {
        let (mut engine, clock) = engine();
        engine.on_search_text_changed("blue");
        engine.reset();
        assert_eq!(engine.phase(), Phase::PendingEvaluation);

        clock.advance(ms(300));
        let summary = engine.tick().unwrap();
        assert!(summary.all_visible());
    }

    #[test]
    fn controls_list_no_constraint_option_first() {
        let (mut engine, _clock) = engine();
        engine.on_facet_changed(Facet::Year, "2019");

        let view = engine.controls();
        let years = &view.selectors[1];
        assert_eq!(years.facet, Facet::Year);
        let labels: Vec<_> = years.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Years", "2020", "2019"]);
        assert!(years.options[2].selected);
        assert!(!years.options[0].selected);

        let series = &view.selectors[2];
        assert_eq!(series.options.len(), 2);
        assert!(series.options[0].selected);
        assert_eq!(view.status, "Showing 1 of 3 artworks");
    }

    #[test]
    fn search_control_keeps_text_as_typed() {
        let (mut engine, clock) = engine();
        engine.on_search_text_changed("Red ");
        assert_eq!(engine.controls().search.value, "Red ");
        assert_eq!(engine.state().search_text, "red");

        clock.advance(ms(300));
        assert_eq!(engine.tick().unwrap().visible_count, 2);

        engine.reset();
        assert_eq!(engine.controls().search.value, "");
    }

    #[test]
    fn system_clock_fires_after_real_window() {
        let mut engine = GalleryEngine::init(
            Some(scenario_items()),
            SystemClock::new(),
            MemorySurface::with_items(3),
            EngineOptions {
                debounce_window: ms(20),
                ..EngineOptions::default()
            },
        )
        .unwrap();

        engine.on_search_text_changed("tide");
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.phase(), Phase::PendingEvaluation);

        std::thread::sleep(ms(40));
        let summary = engine.tick().unwrap();
        assert_eq!(summary.visible_count, 1);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn custom_noun_flows_into_status() {
        let mut engine = GalleryEngine::init(
            Some(scenario_items()),
            ManualClock::new(),
            MemorySurface::new(),
            EngineOptions {
                debounce_window: ms(50),
                noun: "prints".into(),
            },
        )
        .unwrap();
        engine.on_facet_changed(Facet::Medium, "Ink");
        assert_eq!(engine.surface().last_status(), Some("Showing 1 of 3 prints"));
    }
}
