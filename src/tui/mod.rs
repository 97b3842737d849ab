//! TUI integration layer (crossterm + ratatui).
//!
//! Kept separate from `models`/`annotator` so the annotation core can be
//! driven headless (tests, replay) without touching terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminalRestorer};
