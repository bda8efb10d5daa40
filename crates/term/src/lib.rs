//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to the terminal.
//!
//! - [`fb`]: cells, styles and the [`Canvas`] trait
//! - [`screen`]: the [`Screen`] contract the game loop draws through
//! - [`renderer`]: crossterm encoding and diffing
//! - [`game_view`]: the court, paddles, ball and score

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Canvas, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{CrosstermScreen, Screen};
