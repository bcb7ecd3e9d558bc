//! Visualization steps over linear containers
//!
//! A [`Step`] is one immutable frame of an operation's replay: a full
//! snapshot of the container, the highlight roles for that moment, and a
//! human-readable description. Steps embed complete snapshots rather than
//! diffs, so any step can be rendered standalone without replaying the ones
//! before it.
//!
//! Producers mutate a single working buffer for efficiency and emit through a
//! [`StepRecorder`], which clones the buffer at emit time. That emit-time copy
//! is the central correctness invariant of the engine: once a step has been
//! recorded, no later mutation can retroactively change it.

use super::element::{Element, Slot};

/// Highlight roles attached to positions within one step
///
/// Roles are not mutually exclusive; renderers resolve overlaps by checking
/// them in priority order (success first, then primary, secondary, pointers,
/// eliminated, sorted). Index roles hold any number of positions; pointer
/// roles mark at most one algorithmic cursor each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub primary: Vec<usize>,
    pub secondary: Vec<usize>,
    pub success: Vec<usize>,
    pub sorted: Vec<usize>,
    pub unsorted: Vec<usize>,
    /// Positions discarded from a binary search range
    pub eliminated: Vec<usize>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub mid: Option<usize>,
    pub pointer: Option<usize>,
}

impl Highlights {
    /// No highlights at all
    pub fn none() -> Self {
        Self::default()
    }

    /// True if no role marks any position
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Running operation counters carried by sorting steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMetadata {
    pub comparisons: usize,
    pub swaps: usize,
    pub pass: usize,
}

/// One immutable visualization frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Full snapshot of the container at this moment
    pub array: Vec<Slot>,
    pub highlights: Highlights,
    pub description: String,
    /// 0-based position within the sequence, strictly increasing
    pub step_index: usize,
    pub metadata: Option<StepMetadata>,
}

/// Collects steps for one operation, assigning indices and copying snapshots
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Record a step over a slot snapshot
    pub fn record(&mut self, snapshot: &[Slot], highlights: Highlights, description: impl Into<String>) {
        self.push(snapshot.to_vec(), highlights, description.into(), None);
    }

    /// Record a step over a slot snapshot, with sort counters attached
    pub fn record_with(
        &mut self,
        snapshot: &[Slot],
        highlights: Highlights,
        description: impl Into<String>,
        metadata: StepMetadata,
    ) {
        self.push(snapshot.to_vec(), highlights, description.into(), Some(metadata));
    }

    /// Record a step over a dense element snapshot (no placeholders)
    pub fn record_dense(
        &mut self,
        elements: &[Element],
        highlights: Highlights,
        description: impl Into<String>,
    ) {
        self.push(dense_snapshot(elements), highlights, description.into(), None);
    }

    /// Record a dense step with sort counters attached
    pub fn record_dense_with(
        &mut self,
        elements: &[Element],
        highlights: Highlights,
        description: impl Into<String>,
        metadata: StepMetadata,
    ) {
        self.push(dense_snapshot(elements), highlights, description.into(), Some(metadata));
    }

    fn push(
        &mut self,
        array: Vec<Slot>,
        highlights: Highlights,
        description: String,
        metadata: Option<StepMetadata>,
    ) {
        let step_index = self.steps.len();
        self.steps.push(Step {
            array,
            highlights,
            description,
            step_index,
            metadata,
        });
    }

    /// Consume the recorder, yielding the ordered step sequence
    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

fn dense_snapshot(elements: &[Element]) -> Vec<Slot> {
    elements.iter().copied().map(Some).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdGen;

    #[test]
    fn step_indices_start_at_zero_and_increase() {
        let mut ids = IdGen::new();
        let snapshot = vec![Some(ids.element(1)), None];
        let mut rec = StepRecorder::new();
        rec.record(&snapshot, Highlights::none(), "first");
        rec.record(&snapshot, Highlights::none(), "second");
        rec.record(&snapshot, Highlights::none(), "third");
        let steps = rec.finish();
        let indices: Vec<usize> = steps.iter().map(|s| s.step_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn recorded_snapshots_are_independent_of_later_mutation() {
        let mut ids = IdGen::new();
        let mut working = vec![Some(ids.element(3)), Some(ids.element(1))];
        let mut rec = StepRecorder::new();
        rec.record(&working, Highlights::none(), "before swap");
        working.swap(0, 1);
        rec.record(&working, Highlights::none(), "after swap");

        let steps = rec.finish();
        let before: Vec<i64> = steps[0].array.iter().flatten().map(|e| e.value).collect();
        let after: Vec<i64> = steps[1].array.iter().flatten().map(|e| e.value).collect();
        assert_eq!(before, vec![3, 1]);
        assert_eq!(after, vec![1, 3]);
    }
}
