//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into the small event vocabulary the game understands
//! and provides the blocking [`EventSource`] the input task polls.

pub mod map;
pub mod source;

pub use tui_pong_types as types;

pub use map::{map_event, map_key, should_quit, KeyInput, ScreenEvent};
pub use source::{CrosstermEvents, EventSource};
