//! Terminal playback UI
//!
//! Consumes a produced step sequence and lets the user walk it forward and
//! backward. Strictly a consumer of the engine's output; nothing here feeds
//! back into step generation.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
