//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the snapshot -> framebuffer step pure so it can be unit-tested
//! - Only rewrite changed cells on the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{format_u32, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_bucket, tile_style, AnchorY, GameView, TileBucket, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
