//! Fixed-capacity array operations
//!
//! The container is a `Vec<Slot>` whose length (capacity) never changes
//! during an operation: inserts and deletes shift elements and placeholders
//! instead of resizing. Occupied slots always form a contiguous prefix.

use crate::model::{Highlights, IdGen, Slot, Step, StepRecorder};

/// Create a fresh array: custom input truncated/padded to `capacity`
pub fn create(values: &[i64], capacity: usize, ids: &mut IdGen) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut array: Vec<Slot> = vec![None; capacity];
    let kept = values.len().min(capacity);
    for (i, &value) in values.iter().take(capacity).enumerate() {
        array[i] = Some(ids.element(value));
    }
    rec.record(
        &array,
        Highlights::none(),
        format!(
            "Created a new array with {} elements and a capacity of {}.",
            kept, capacity
        ),
    );
    rec.finish()
}

/// Read the element at `index`
pub fn access(state: &[Slot], index: usize) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let Some(element) = state.get(index).copied().flatten() else {
        rec.record(
            state,
            Highlights::none(),
            format!("Error: Index {} is out of bounds or empty.", index),
        );
        return rec.finish();
    };
    rec.record(
        state,
        Highlights {
            primary: vec![index],
            ..Highlights::default()
        },
        format!("Accessed element at index {}. Value is {}.", index, element.value),
    );
    rec.finish()
}

/// Overwrite the value at `index`, keeping the element's id
pub fn update(state: &[Slot], index: usize, value: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    if state.get(index).copied().flatten().is_none() {
        rec.record(
            state,
            Highlights::none(),
            format!("Error: Cannot update at index {}.", index),
        );
        return rec.finish();
    }

    rec.record(
        state,
        Highlights {
            primary: vec![index],
            ..Highlights::default()
        },
        format!("Preparing to update value at index {} to {}.", index, value),
    );

    let mut next = state.to_vec();
    if let Some(slot) = next.get_mut(index) {
        if let Some(element) = slot {
            element.value = value;
        }
    }
    rec.record(
        &next,
        Highlights {
            primary: vec![index],
            success: vec![index],
            ..Highlights::default()
        },
        format!("Successfully updated index {} to {}.", index, value),
    );
    rec.finish()
}

/// Insert `value` at `index`, or append at the first empty slot
///
/// Elements between the insertion point and the first empty slot shift one
/// position right; the trailing placeholder is consumed so capacity is
/// unchanged. Indices past the first empty slot are rejected to keep the
/// occupied prefix contiguous.
pub fn insert(state: &[Slot], value: i64, index: Option<usize>, ids: &mut IdGen) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    let Some(first_empty) = state.iter().position(|s| s.is_none()) else {
        rec.record(
            state,
            Highlights::none(),
            "Error: No capacity to insert. Array is full.",
        );
        return rec.finish();
    };

    let index = index.unwrap_or(first_empty);
    if index > first_empty || index >= state.len() {
        rec.record(
            state,
            Highlights::none(),
            format!("Error: Cannot insert at index {}.", index),
        );
        return rec.finish();
    }

    let appending = index == first_empty;
    rec.record(
        state,
        Highlights {
            primary: vec![index],
            ..Highlights::default()
        },
        if appending {
            format!("Preparing to append value {}.", value)
        } else {
            format!("Preparing to insert value {} at index {}.", value, index)
        },
    );

    let shifted: Vec<usize> = (index..first_empty).collect();
    if !shifted.is_empty() {
        rec.record(
            state,
            Highlights {
                secondary: shifted,
                ..Highlights::default()
            },
            format!("Shifting elements from index {} to the right.", index),
        );
    }

    let mut next = state.to_vec();
    next.insert(index, Some(ids.element(value)));
    next.pop();
    rec.record(
        &next,
        Highlights {
            primary: vec![index],
            success: vec![index],
            ..Highlights::default()
        },
        if appending {
            format!("Successfully appended {} to the end.", value)
        } else {
            format!("Successfully inserted {} at index {}.", value, index)
        },
    );
    rec.finish()
}

/// Delete the element at `index`, shifting the suffix left
pub fn delete(state: &[Slot], index: usize) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let Some(element) = state.get(index).copied().flatten() else {
        rec.record(
            state,
            Highlights::none(),
            format!("Error: Cannot delete at index {}.", index),
        );
        return rec.finish();
    };

    rec.record(
        state,
        Highlights {
            primary: vec![index],
            ..Highlights::default()
        },
        format!("Preparing to delete element {} at index {}.", element.value, index),
    );

    // state[index] is occupied, so an occupied last slot exists at or after it
    let last_occupied = state.iter().rposition(|s| s.is_some()).unwrap_or(index);
    let shifted: Vec<usize> = (index + 1..=last_occupied).collect();
    if !shifted.is_empty() {
        rec.record(
            state,
            Highlights {
                secondary: shifted,
                ..Highlights::default()
            },
            "Shifting elements to the left.",
        );
    }

    let mut next = state.to_vec();
    next.remove(index);
    next.push(None);
    rec.record(
        &next,
        Highlights::none(),
        format!("Successfully deleted {} from index {}.", element.value, index),
    );
    rec.finish()
}

/// Linear search over the occupied slots, with early exit on a match
pub fn search(state: &[Slot], value: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    for (i, slot) in state.iter().enumerate() {
        let Some(element) = slot else { continue };
        rec.record(
            state,
            Highlights {
                primary: vec![i],
                ..Highlights::default()
            },
            format!(
                "Searching... checking index {}. Is {} equal to {}?",
                i, element.value, value
            ),
        );
        if element.value == value {
            rec.record(
                state,
                Highlights {
                    success: vec![i],
                    ..Highlights::default()
                },
                format!("Value {} successfully found at index {}.", value, i),
            );
            return rec.finish();
        }
    }
    rec.record(
        state,
        Highlights::none(),
        format!("Value {} not found in the array.", value),
    );
    rec.finish()
}
