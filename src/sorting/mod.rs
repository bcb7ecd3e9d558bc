//! Sorting step producers
//!
//! Each submodule exposes `steps(elements) -> Vec<Step>` over a dense element
//! array (no placeholders) and honors a common contract: a starting step, at
//! least one step per comparison (`primary`/`secondary` on the compared
//! positions), a `success` step per swap showing the post-swap order, and a
//! terminal step with `success` over the full range. Output is deterministic
//! for deterministic input.
//!
//! Bubble, Insertion, and Merge are stable; Selection and Quick are not.
//! Bubble, Selection, and Insertion additionally carry running
//! comparison/swap/pass counters in [`StepMetadata`].
//!
//! [`StepMetadata`]: crate::model::StepMetadata

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::model::{Element, Highlights};

/// Comma-joined values of a run of elements, for step descriptions
pub(crate) fn join_values(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `success` over every position, used by terminal steps
pub(crate) fn fully_sorted(n: usize) -> Highlights {
    Highlights {
        success: (0..n).collect(),
        ..Highlights::default()
    }
}
