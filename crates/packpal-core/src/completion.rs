//! Completion Watcher
//!
//! Edge-triggered "all packed" detection. A tracker fires once when its
//! scope becomes fully packed and stays quiet until it is re-armed, either
//! by new items arriving (total grows) or by packing starting over
//! (nothing packed). Toggling an item off and on again does not re-arm it.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::ids::CategoryId;
use crate::progress::Progress;

/// Edge trigger over one progress scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionTracker {
    armed: bool,
    last_total: usize,
}

impl CompletionTracker {
    /// Start tracking from `initial`; an already complete scope does not
    /// fire until it is re-armed.
    pub fn new(initial: Progress) -> Self {
        Self {
            armed: !initial.is_complete(),
            last_total: initial.total_items,
        }
    }

    /// Feed the latest progress; returns true on the completing edge
    pub fn observe(&mut self, progress: Progress) -> bool {
        if progress.total_items > self.last_total || progress.packed_items == 0 {
            self.armed = true;
        }
        self.last_total = progress.total_items;

        if self.armed && progress.is_complete() {
            self.armed = false;
            return true;
        }
        false
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Completion edge reported by `CompletionWatcher`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEvent {
    /// One category became fully packed
    CategoryPacked(CategoryId),
    /// The whole catalog became fully packed
    AllPacked,
}

/// Trackers for the whole catalog and for each of its categories
#[derive(Debug, Clone)]
pub struct CompletionWatcher {
    catalog: CompletionTracker,
    categories: HashMap<CategoryId, CompletionTracker>,
}

impl CompletionWatcher {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            catalog: CompletionTracker::new(catalog.progress()),
            categories: catalog
                .categories()
                .iter()
                .map(|c| (c.id.clone(), CompletionTracker::new(c.progress())))
                .collect(),
        }
    }

    /// Compare against the latest catalog.
    ///
    /// Category events come first, in catalog order, followed by
    /// `AllPacked`. Categories seen for the first time are tracked from
    /// empty; trackers of removed categories are dropped.
    pub fn observe(&mut self, catalog: &Catalog) -> Vec<CompletionEvent> {
        let mut events = Vec::new();

        self.categories
            .retain(|id, _| catalog.category(id).is_some());

        for category in catalog.categories() {
            let progress = category.progress();
            let tracker = self
                .categories
                .entry(category.id.clone())
                .or_insert_with(|| CompletionTracker::new(Progress::new(0, 0)));
            if tracker.observe(progress) {
                events.push(CompletionEvent::CategoryPacked(category.id.clone()));
            }
        }

        if self.catalog.observe(catalog.progress()) {
            events.push(CompletionEvent::AllPacked);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_on_edge() {
        let mut tracker = CompletionTracker::new(Progress::new(0, 2));
        assert!(!tracker.observe(Progress::new(1, 2)));
        assert!(tracker.observe(Progress::new(2, 2)));
        assert!(!tracker.observe(Progress::new(2, 2)));
    }

    #[test]
    fn test_toggle_off_and_on_does_not_refire() {
        let mut tracker = CompletionTracker::new(Progress::new(0, 2));
        assert!(tracker.observe(Progress::new(2, 2)));
        assert!(!tracker.observe(Progress::new(1, 2)));
        assert!(!tracker.observe(Progress::new(2, 2)));
    }

    #[test]
    fn test_shrinking_total_does_not_refire() {
        let mut tracker = CompletionTracker::new(Progress::new(0, 5));
        assert!(tracker.observe(Progress::new(5, 5)));
        // A fully packed category disappears
        assert!(!tracker.observe(Progress::new(3, 3)));
    }

    #[test]
    fn test_growing_total_rearms() {
        let mut tracker = CompletionTracker::new(Progress::new(0, 2));
        assert!(tracker.observe(Progress::new(2, 2)));
        assert!(!tracker.observe(Progress::new(2, 3)));
        assert!(tracker.is_armed());
        assert!(tracker.observe(Progress::new(3, 3)));
    }

    #[test]
    fn test_reset_rearms() {
        let mut tracker = CompletionTracker::new(Progress::new(0, 2));
        assert!(tracker.observe(Progress::new(2, 2)));
        assert!(!tracker.observe(Progress::new(0, 2)));
        assert!(tracker.observe(Progress::new(2, 2)));
    }

    #[test]
    fn test_initially_complete_starts_disarmed() {
        let mut tracker = CompletionTracker::new(Progress::new(2, 2));
        assert!(!tracker.is_armed());
        assert!(!tracker.observe(Progress::new(2, 2)));
    }

    #[test]
    fn test_empty_scope_never_fires() {
        let mut tracker = CompletionTracker::new(Progress::default());
        assert!(!tracker.observe(Progress::default()));
    }
}
