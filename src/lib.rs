//! An autocomplete text input: type to narrow a list of suggestions, pick one
//! with the keyboard or the mouse.
//!
//! The widget state machine lives in [`autocomplete`] and the pure filtering
//! in [`filter`]. Both are usable without a terminal; the ratatui rendering
//! and the interactive picker sit behind the `tui` feature.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod filter;
pub mod suggestions;

#[cfg(feature = "application")]
pub mod app;
#[cfg(feature = "application")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;

pub use autocomplete::{Action, Autocomplete, Outcome, PointerTarget, Visibility};
pub use filter::{FilterOptions, Match, MatchMode, filter};
