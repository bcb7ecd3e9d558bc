//! Searching step producers
//!
//! - [`linear`] — left-to-right scan over a padded snapshot.
//! - [`binary`] — classic narrowing search; operates on the compacted view
//!   but reports positions as original snapshot indices.
//! - [`problems`] — the binary-search problem variants (first/last
//!   occurrence, peak element, rotated-array search and minimum, integer
//!   square root), all over dense purpose-built arrays.
//!
//! Every producer emits one starting step, one step per probe, and exactly
//! one terminal step (`success` or not-found) — never zero steps.

pub mod binary;
pub mod linear;
pub mod problems;
