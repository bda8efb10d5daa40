//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong rules, state management, and simulation logic.
//! It has **no dependencies** on rendering or I/O apart from `log` records, making it:
//!
//! - **Deterministic**: the same seed produces identical serves
//! - **Testable**: every rule is a plain function or method
//! - **Portable**: runs headless as well as behind a terminal
//!
//! # Module Structure
//!
//! - [`arena`]: playfield geometry derived from the terminal size
//! - [`ball`]: ball position, direction and serve lock
//! - [`paddle`]: paddle span and bounded movement
//! - [`collision`]: wall and paddle contact rules
//! - [`ai`]: the tracking policy for the right paddle
//! - [`game_state`]: the per-tick simulation, scoring and serve reset
//! - [`rng`]: seeded generator for serve directions
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{Arena, GameState, TickOutcome};
//! use tui_pong_types::PaddleIntent;
//!
//! let arena = Arena::new(150, 60).unwrap();
//! let mut game = GameState::new(arena, 12345);
//!
//! game.apply_intent(PaddleIntent::MoveUp);
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! game.update_ai();
//!
//! assert!(arena.contains(game.ball().x, game.ball().y));
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::tick`](game_state::GameState::tick) is one
//! simulation step; the caller decides how often to tick (75ms in the game).

pub mod ai;
pub mod arena;
pub mod ball;
pub mod collision;
pub mod game_state;
pub mod paddle;
pub mod rng;
pub mod snapshot;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use ai::tracking_span;
pub use arena::{Arena, ArenaError};
pub use ball::{Ball, DirectionError};
pub use collision::{resolve, Contact, Deflection};
pub use game_state::{GameState, Player, TickOutcome};
pub use paddle::Paddle;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
