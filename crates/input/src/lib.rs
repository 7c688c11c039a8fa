//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! event types. It maps `crossterm` key events into
//! [`crate::types::GameAction`] and classifies mouse drags (or any other
//! press/release gesture) into swipe directions.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{classify, SwipeConfig, SwipeDetector};
