//! Mutation step producers for the data structure catalog
//!
//! CRUD-style operations over bounded containers: [`arrays`] (fixed-capacity
//! linear array with `None` placeholders), [`matrix`] (dense 2D array, max
//! 10×10), and [`stack`] (bounded LIFO).
//!
//! Every operation validates its arguments and fails gracefully: an invalid
//! index, an empty slot, a malformed literal, or exhausted capacity produces
//! a single step describing the problem, with the container state untouched.
//! No producer panics or returns an error across its boundary, so a renderer
//! never needs exception handling to display a failed operation.

pub mod arrays;
pub mod matrix;
pub mod stack;
