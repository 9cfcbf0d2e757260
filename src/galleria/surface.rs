//! # Render Adapter
//!
//! The engine never touches a rendering toolkit directly. After every
//! evaluation it pushes the outcome through a [`GallerySurface`]: one
//! visibility flag per item and the status line. A browser binding would toggle
//! `display` and the `filter-visible` class on each card; the CLI and the tests
//! use [`MemorySurface`].

use crate::evaluate::Evaluation;

pub trait GallerySurface {
    /// Show or hide the item at `index`.
    fn apply_visibility(&mut self, index: usize, visible: bool);

    /// Replace the text of the status region.
    fn publish_status(&mut self, text: &str);
}

/// Applies a full evaluation to `surface`, then publishes `status`.
pub fn render<S: GallerySurface + ?Sized>(surface: &mut S, evaluation: &Evaluation, status: &str) {
    for (index, &visible) in evaluation.visible.iter().enumerate() {
        surface.apply_visibility(index, visible);
    }
    surface.publish_status(status);
}

/// Surface that records what it was told, for tests and non-visual hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    visible: Vec<bool>,
    statuses: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(count: usize) -> Self {
        Self {
            visible: vec![true; count],
            statuses: Vec::new(),
        }
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
            .collect()
    }

    /// Every status published so far, oldest first.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

impl GallerySurface for MemorySurface {
    fn apply_visibility(&mut self, index: usize, visible: bool) {
        if index >= self.visible.len() {
            self.visible.resize(index + 1, true);
        }
        self.visible[index] = visible;
    }

    fn publish_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultSummary;

    #[test]
    fn render_applies_every_flag_then_status() {
        let mut surface = MemorySurface::with_items(3);
        let evaluation = Evaluation {
            visible: vec![false, true, false],
            summary: ResultSummary {
                visible_count: 1,
                total_count: 3,
            },
        };

        render(&mut surface, &evaluation, "Showing 1 of 3 artworks");
        assert_eq!(surface.visible_indices(), vec![1]);
        assert_eq!(surface.last_status(), Some("Showing 1 of 3 artworks"));
    }

    #[test]
    fn grows_when_indexed_past_the_end() {
        let mut surface = MemorySurface::new();
        surface.apply_visibility(2, false);
        assert_eq!(surface.visible(), &[true, true, false]);
    }
}
