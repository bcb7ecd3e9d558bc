//! The orchestrator
//!
//! Dispatches a named algorithm or data structure operation, plus the current
//! container state and arguments, to the right producer and returns its step
//! sequence. Dispatch is over enums ([`Algorithm`], [`ArrayOp`], [`MatrixOp`],
//! [`StackOp`]) so a missing arm is a compile error, not a runtime miss.
//!
//! The one composite here is [`ArrayOp::Sort`]: the fixed-capacity array's
//! sort filters out placeholder padding, delegates to the named sorting
//! algorithm, re-pads every emitted snapshot back to the original capacity,
//! and wraps the whole run with starting/complete bookend steps.

pub mod catalog;
pub mod constants;
pub mod errors;

pub use catalog::{Algorithm, Category, Complexity};
pub use errors::CatalogError;

use rand::Rng;

use crate::model::{compact, Grid, GridStep, Highlights, IdGen, Slot, Step};
use crate::searching::{binary, linear, problems};
use crate::sorting::{bubble, insertion, merge, quick, selection};
use crate::structures::matrix::Traversal;
use crate::structures::{arrays, matrix, stack};

/// Operations on the fixed-capacity array structure
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayOp {
    Create { values: Vec<i64>, capacity: usize },
    Access { index: usize },
    Update { index: usize, value: i64 },
    Insert { value: i64, index: Option<usize> },
    Delete { index: usize },
    Search { value: i64 },
    Sort { algorithm: Algorithm },
}

/// Operations on the 2D array structure
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixOp {
    Create { rows: usize, cols: usize, custom: Option<String> },
    Access { row: usize, col: usize },
    Update { row: usize, col: usize, value: i64 },
    Search { value: i64 },
    Traverse { strategy: Traversal },
}

/// Operations on the stack structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Push { value: i64 },
    Pop,
    Peek,
    IsEmpty,
}

/// Produce the step sequence for an algorithm over the given snapshot
///
/// Sorting algorithms and binary-search problems run on the compacted view;
/// the two plain searches take the padded snapshot as-is. Search algorithms
/// invoked without a target get a uniform random one drawn from the array's
/// value range. Binary Search additionally expects the caller to have sorted
/// the snapshot (see [`crate::model::get_sorted_array`]).
pub fn algorithm_steps(
    algorithm: Algorithm,
    snapshot: &[Slot],
    target: Option<i64>,
    rng: &mut impl Rng,
) -> Vec<Step> {
    let elements = compact(snapshot);
    match algorithm {
        Algorithm::BubbleSort => bubble::steps(&elements),
        Algorithm::SelectionSort => selection::steps(&elements),
        Algorithm::InsertionSort => insertion::steps(&elements),
        Algorithm::MergeSort => merge::steps(&elements),
        Algorithm::QuickSort => quick::steps(&elements),
        Algorithm::LinearSearch => linear::steps(snapshot, resolve_target(snapshot, target, rng)),
        Algorithm::BinarySearch => binary::steps(snapshot, resolve_target(snapshot, target, rng)),
        Algorithm::FirstOccurrence => {
            problems::first_occurrence(&elements, resolve_target(snapshot, target, rng))
        }
        Algorithm::LastOccurrence => {
            problems::last_occurrence(&elements, resolve_target(snapshot, target, rng))
        }
        Algorithm::PeakElement => problems::peak_element(&elements),
        Algorithm::SearchRotatedArray => {
            problems::search_rotated(&elements, resolve_target(snapshot, target, rng))
        }
        Algorithm::FindMinRotatedArray => problems::find_min_rotated(&elements),
        Algorithm::SqrtX => {
            problems::sqrt_steps(&elements, target.unwrap_or(constants::DEFAULT_SQRT_TARGET))
        }
    }
}

/// Produce the step sequence for a fixed-capacity array operation
pub fn array_operation_steps(state: &[Slot], op: ArrayOp, ids: &mut IdGen) -> Vec<Step> {
    match op {
        ArrayOp::Create { values, capacity } => arrays::create(&values, capacity, ids),
        ArrayOp::Access { index } => arrays::access(state, index),
        ArrayOp::Update { index, value } => arrays::update(state, index, value),
        ArrayOp::Insert { value, index } => arrays::insert(state, value, index, ids),
        ArrayOp::Delete { index } => arrays::delete(state, index),
        ArrayOp::Search { value } => arrays::search(state, value),
        ArrayOp::Sort { algorithm } => sort_array(state, algorithm),
    }
}

/// Produce the step sequence for a matrix operation
pub fn matrix_operation_steps(
    grid: &Grid,
    op: MatrixOp,
    ids: &mut IdGen,
    rng: &mut impl Rng,
) -> Vec<GridStep> {
    match op {
        MatrixOp::Create { rows, cols, custom } => {
            matrix::create(rows, cols, custom.as_deref(), ids, rng)
        }
        MatrixOp::Access { row, col } => matrix::access(grid, row, col),
        MatrixOp::Update { row, col, value } => matrix::update(grid, row, col, value),
        MatrixOp::Search { value } => matrix::search(grid, value),
        MatrixOp::Traverse { strategy } => matrix::traverse(grid, strategy),
    }
}

/// Produce the step sequence for a stack operation
pub fn stack_operation_steps(
    state: &[crate::model::Element],
    op: StackOp,
    ids: &mut IdGen,
) -> Vec<Step> {
    match op {
        StackOp::Push { value } => stack::push(state, value, ids),
        StackOp::Pop => stack::pop(state),
        StackOp::Peek => stack::peek(state),
        StackOp::IsEmpty => stack::is_empty(state),
    }
}

/// Sort the live elements of a padded array, preserving its capacity
fn sort_array(state: &[Slot], algorithm: Algorithm) -> Vec<Step> {
    if algorithm.category() != Category::Sorting {
        return vec![Step {
            array: state.to_vec(),
            highlights: Highlights::none(),
            description: format!("Error: {} is not a sorting algorithm.", algorithm),
            step_index: 0,
            metadata: None,
        }];
    }

    let elements = compact(state);
    let capacity = state.len();
    let inner = match algorithm {
        Algorithm::BubbleSort => bubble::steps(&elements),
        Algorithm::SelectionSort => selection::steps(&elements),
        Algorithm::InsertionSort => insertion::steps(&elements),
        Algorithm::MergeSort => merge::steps(&elements),
        Algorithm::QuickSort => quick::steps(&elements),
        // category() == Sorting covers exactly the five arms above
        _ => Vec::new(),
    };

    let mut steps = Vec::with_capacity(inner.len() + 2);
    steps.push(Step {
        array: state.to_vec(),
        highlights: Highlights::none(),
        description: format!("Starting {} on the array elements.", algorithm),
        step_index: 0,
        metadata: None,
    });
    for mut step in inner {
        step.array.resize(capacity, None);
        step.step_index = steps.len();
        steps.push(step);
    }
    let final_array = steps.last().map(|s| s.array.clone()).unwrap_or_default();
    steps.push(Step {
        array: final_array,
        highlights: Highlights::none(),
        description: format!("Array sorting complete using {}.", algorithm),
        step_index: steps.len(),
        metadata: None,
    });
    steps
}

/// A concrete target for a search: the caller's, or a random in-range value
fn resolve_target(snapshot: &[Slot], target: Option<i64>, rng: &mut impl Rng) -> i64 {
    target.unwrap_or_else(|| {
        let max = snapshot
            .iter()
            .copied()
            .flatten()
            .map(|e| e.value)
            .max()
            .unwrap_or(constants::MIN_VALUE)
            .max(1);
        rng.gen_range(1..=max)
    })
}
