//! Step navigation.
//!
//! The step index is a plain linear cursor over the panels: transitions are
//! `+1` / `-1`, gated from the outside by validation. Both directions saturate
//! so the index stays inside `[0, N-1]` for every call sequence.

use tracing::debug;

use crate::view::FormView;

/// Mark panel `index` active and marker `index` current, every other one off.
///
/// Recomputes the whole projection each time; an out-of-range index leaves
/// everything inactive.
pub fn synchronize_visuals<V: FormView + ?Sized>(view: &mut V, index: usize) {
    for position in 0..view.panel_count() {
        view.set_panel_active(position, position == index);
    }
    for position in 0..view.marker_count() {
        view.set_marker_current(position, position == index);
    }
}

/// Owns the current step index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: usize,
    len: usize,
}

impl StepController {
    /// `len` is the fixed number of steps; it is clamped to at least one.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Move one step forward and resync the view. The caller has already
    /// validated the current step.
    pub fn advance<V: FormView + ?Sized>(&mut self, view: &mut V) -> usize {
        if self.is_last() {
            debug!(step = self.current, "advance ignored on last step");
        } else {
            self.current += 1;
            debug!(step = self.current, "advanced");
        }
        self.synchronize_visuals(view);
        self.current
    }

    /// Move one step back and resync the view. No validation runs.
    pub fn retreat<V: FormView + ?Sized>(&mut self, view: &mut V) -> usize {
        if self.is_first() {
            debug!("retreat ignored on first step");
        } else {
            self.current -= 1;
            debug!(step = self.current, "retreated");
        }
        self.synchronize_visuals(view);
        self.current
    }

    pub fn synchronize_visuals<V: FormView + ?Sized>(&self, view: &mut V) {
        synchronize_visuals(view, self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FormDocument;

    fn doc() -> FormDocument {
        FormDocument::standard(["A"], ["B"]).expect("standard layout")
    }

    fn assert_exclusive(doc: &FormDocument, index: usize) {
        let active: Vec<usize> = doc
            .panels()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| i)
            .collect();
        let current: Vec<usize> = doc
            .markers()
            .iter()
            .enumerate()
            .filter(|(_, m)| m.current)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![index]);
        assert_eq!(current, vec![index]);
    }

    #[test]
    fn every_position_is_exclusive_after_sync() {
        let mut doc = doc();
        let mut steps = StepController::new(doc.panel_count());
        steps.synchronize_visuals(&mut doc);
        assert_exclusive(&doc, 0);
        for expected in 1..steps.step_count() {
            assert_eq!(steps.advance(&mut doc), expected);
            assert_exclusive(&doc, expected);
        }
        for expected in (0..steps.step_count() - 1).rev() {
            assert_eq!(steps.retreat(&mut doc), expected);
            assert_exclusive(&doc, expected);
        }
    }

    #[test]
    fn retreat_saturates_at_first_step() {
        let mut doc = doc();
        let mut steps = StepController::new(doc.panel_count());
        assert_eq!(steps.retreat(&mut doc), 0);
        assert_eq!(steps.retreat(&mut doc), 0);
        assert_exclusive(&doc, 0);
    }

    #[test]
    fn advance_saturates_at_last_step() {
        let mut doc = doc();
        let mut steps = StepController::new(doc.panel_count());
        for _ in 0..10 {
            steps.advance(&mut doc);
        }
        assert_eq!(steps.current_step(), 3);
        assert!(steps.is_last());
        assert_exclusive(&doc, 3);
    }

    #[test]
    fn out_of_range_projection_clears_everything() {
        let mut doc = doc();
        synchronize_visuals(&mut doc, 99);
        assert!(doc.panels().iter().all(|p| !p.active));
        assert!(doc.markers().iter().all(|m| !m.current));
    }

    #[test]
    fn zero_steps_still_has_one() {
        let steps = StepController::new(0);
        assert_eq!(steps.step_count(), 1);
        assert!(steps.is_first() && steps.is_last());
    }
}
