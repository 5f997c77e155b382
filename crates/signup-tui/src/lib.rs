//! Signup wizard TUI.
//!
//! A ratatui render layer over `signup-core`'s step controller.

pub mod input;
pub mod wizard;
