//! Visualization steps over 2D containers
//!
//! The 2D counterpart of [`crate::model::step`]: matrices are always dense
//! (every cell holds an element), positions are `(row, col)` pairs, and the
//! `spotlight` role illuminates a full row/column cross before an operation
//! narrows to a single cell.

use super::element::Element;

/// A dense matrix of elements
pub type Grid = Vec<Vec<Element>>;

/// Highlight roles attached to cells within one grid step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridHighlights {
    pub primary: Vec<(usize, usize)>,
    pub secondary: Vec<(usize, usize)>,
    pub success: Vec<(usize, usize)>,
    /// Illuminates the full row and column crossing at this cell
    pub spotlight: Option<(usize, usize)>,
}

impl GridHighlights {
    pub fn none() -> Self {
        Self::default()
    }
}

/// One immutable visualization frame over a matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStep {
    /// Full snapshot of the matrix at this moment
    pub grid: Grid,
    pub highlights: GridHighlights,
    pub description: String,
    /// 0-based position within the sequence, strictly increasing
    pub step_index: usize,
}

/// Collects grid steps, assigning indices and copying snapshots at emit time
#[derive(Debug, Default)]
pub struct GridRecorder {
    steps: Vec<GridStep>,
}

impl GridRecorder {
    pub fn new() -> Self {
        GridRecorder { steps: Vec::new() }
    }

    pub fn record(&mut self, grid: &Grid, highlights: GridHighlights, description: impl Into<String>) {
        let step_index = self.steps.len();
        self.steps.push(GridStep {
            grid: grid.clone(),
            highlights,
            description: description.into(),
            step_index,
        });
    }

    pub fn finish(self) -> Vec<GridStep> {
        self.steps
    }
}
