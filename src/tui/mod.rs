// src/tui/mod.rs
// =============================================================================
// The interactive dashboard: terminal setup, key events, drawing and the
// event loop that ties them to the app state machine.
// =============================================================================

mod event;
mod render;
mod runner;
mod terminal;

pub use runner::run;
