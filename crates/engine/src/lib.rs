//! Game engine: the event loop and the tasks that feed it.
//!
//! - [`ticker`]: emits [`GameEvent::Tick`] every tick period
//! - [`input_task`]: turns terminal events into keys, resizes and shutdown
//! - [`coordinator`]: owns the [`tui_pong_core::GameState`] and the screen
//! - [`session`]: starts the tasks and runs the coordinator
//! - [`config`]: environment configuration

pub mod config;
pub mod coordinator;
pub mod event;
pub mod input_task;
pub mod session;
pub mod ticker;

pub use config::PongConfig;
pub use coordinator::{Coordinator, Flow};
pub use event::{GameEvent, ShutdownReason};
pub use input_task::{pump_events, spawn_input};
pub use session::run_session;
pub use ticker::{run_ticker, spawn_ticker};
