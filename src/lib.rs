//! # Introduction
//!
//! algotty replays classic data structure operations and algorithms as a
//! sequence of inspectable snapshots.  A producer runs an algorithm to
//! completion over a working copy of the input and records a [`model::Step`]
//! at every interesting moment: a full snapshot, the highlighted positions,
//! and a one-line description.  The step history is then navigated forward
//! and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Producer → Steps → TUI
//! ```
//!
//! 1. [`model`] — the step contract: elements with stable ids, slot
//!    snapshots, highlight roles, and the emit-time-copy recorders.
//! 2. [`sorting`] / [`searching`] / [`structures`] — the producers: pure
//!    functions mapping (state, arguments) to an ordered step sequence.
//! 3. [`engine`] — the orchestrator: the typed algorithm catalog and the
//!    dispatch from a named operation to its producer.
//! 4. [`ui`] — ratatui-based playback; not part of the stable library API.
//!
//! ## Error model
//!
//! Producers never fail: invalid arguments, exhausted capacity, and search
//! misses all come back as ordinary steps whose description states the
//! problem, so the rendering layer has a single code path.

pub mod engine;
pub mod model;
pub mod searching;
pub mod sorting;
pub mod structures;
pub mod ui;
