//! Terminal Pong (workspace facade crate).
//!
//! Re-exports the member crates as `tui_pong::{core, engine, input, term, types}`
//! so integration tests and the binary share one import surface.

pub mod logging;
pub mod scoped;

pub use tui_pong_core as core;
pub use tui_pong_engine as engine;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
