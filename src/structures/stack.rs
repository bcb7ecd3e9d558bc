//! Bounded stack operations
//!
//! A LIFO container over a dense element array; the top is the last element.
//! Pushing onto a full stack and popping or peeking an empty one produce a
//! single error step instead of mutating anything.

use crate::engine::constants::STACK_CAPACITY;
use crate::model::{Element, Highlights, IdGen, Step, StepRecorder};

/// Push `value` onto the top of the stack
pub fn push(state: &[Element], value: i64, ids: &mut IdGen) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    if state.len() >= STACK_CAPACITY {
        rec.record_dense(
            state,
            Highlights::none(),
            "Error: Stack overflow. Cannot push onto a full stack.",
        );
        return rec.finish();
    }

    rec.record_dense(
        state,
        Highlights::none(),
        format!("Preparing to push {} onto the stack.", value),
    );

    let mut next = state.to_vec();
    next.push(ids.element(value));
    rec.record_dense(
        &next,
        Highlights {
            success: vec![next.len() - 1],
            ..Highlights::default()
        },
        format!("Successfully pushed {} onto the stack.", value),
    );
    rec.finish()
}

/// Remove the top element
pub fn pop(state: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    let Some(top) = state.last() else {
        rec.record_dense(state, Highlights::none(), "Error: Cannot pop from empty stack.");
        return rec.finish();
    };
    let popped = top.value;

    rec.record_dense(
        state,
        Highlights {
            primary: vec![state.len() - 1],
            ..Highlights::default()
        },
        format!("Preparing to pop {} from the stack.", popped),
    );

    let mut next = state.to_vec();
    next.pop();
    rec.record_dense(
        &next,
        Highlights::none(),
        format!("Successfully popped {} from the stack.", popped),
    );
    rec.finish()
}

/// Read the top element without removing it
pub fn peek(state: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    let Some(top) = state.last() else {
        rec.record_dense(state, Highlights::none(), "Error: Cannot peek empty stack.");
        return rec.finish();
    };

    rec.record_dense(
        state,
        Highlights {
            primary: vec![state.len() - 1],
            ..Highlights::default()
        },
        format!("Peeking at the top element: {}.", top.value),
    );
    rec.finish()
}

/// Report whether the stack is empty
pub fn is_empty(state: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let description = if state.is_empty() {
        "Stack is empty."
    } else {
        "Stack is not empty."
    };
    rec.record_dense(state, Highlights::none(), description);
    rec.finish()
}
