//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_2048::{core,input,term,types}` and adds the pieces that only the
//! terminal runner needs: configuration and best-score persistence.

pub mod config;
pub mod persist;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
