//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Arena Dimensions
//!
//! The playfield has a fixed inner size; only its offset on screen floats
//! with the terminal window:
//!
//! - **Width**: 110 columns between the left and right borders
//! - **Height**: 40 rows between the top and bottom borders
//! - **Minimum terminal**: 150x60 cells
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 75 | Simulation tick period |
//! | `LOCK_TICKS` | 10 | Ticks the ball stays frozen after a serve |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Direction, Horizontal, INNER_WIDTH};
//!
//! let dir = Direction::UpLeft;
//! assert_eq!(dir.general_horizontal(), Horizontal::Left);
//! assert_eq!(dir.reflect_vertical(), Direction::DownLeft);
//! assert_eq!(dir.reflect_horizontal(), Direction::UpRight);
//! assert_eq!(dir.step(10, 10), Some((9, 9)));
//!
//! assert_eq!(INNER_WIDTH, 110);
//! ```

use std::fmt;

/// Distance between the left and right borders.
pub const INNER_WIDTH: i32 = 110;

/// Distance between the top and bottom borders.
pub const INNER_HEIGHT: i32 = 40;

/// Rows covered by a paddle, inclusive of both ends.
pub const PADDLE_HEIGHT: i32 = 4;

/// Ticks the ball stays frozen at the midpoint after a point is scored.
pub const LOCK_TICKS: u32 = 10;

/// Simulation tick period in milliseconds.
pub const TICK_MS: u64 = 75;

/// Smallest terminal width the arena can be drawn in.
pub const MIN_TERMINAL_WIDTH: u16 = 150;

/// Smallest terminal height the arena can be drawn in.
pub const MIN_TERMINAL_HEIGHT: u16 = 60;


/// Horizontal component of a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Right,
}

/// Vertical component of a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Up,
    Down,
}

/// The eight discrete directions of the grid.
///
/// The ball only ever travels along a diagonal or purely left/right.
/// `Up` and `Down` exist for paddle intents and are a programmer error
/// when found on the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Serve directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Decode the numeric direction table.
    ///
    /// `1..=7` map to UP, DOWN, LEFT, RIGHT, UP_RIGHT, DOWN_RIGHT, UP_LEFT;
    /// anything else decodes to DOWN_LEFT.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pong_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(5), Direction::UpRight);
    /// assert_eq!(Direction::from_index(8), Direction::DownLeft);
    /// assert_eq!(Direction::from_index(0), Direction::DownLeft);
    /// ```
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => Direction::Up,
            2 => Direction::Down,
            3 => Direction::Left,
            4 => Direction::Right,
            5 => Direction::UpRight,
            6 => Direction::DownRight,
            7 => Direction::UpLeft,
            _ => Direction::DownLeft,
        }
    }

    /// Build a direction from its components.
    pub fn compose(h: Horizontal, v: Option<Vertical>) -> Self {
        match (h, v) {
            (Horizontal::Left, None) => Direction::Left,
            (Horizontal::Right, None) => Direction::Right,
            (Horizontal::Left, Some(Vertical::Up)) => Direction::UpLeft,
            (Horizontal::Right, Some(Vertical::Up)) => Direction::UpRight,
            (Horizontal::Left, Some(Vertical::Down)) => Direction::DownLeft,
            (Horizontal::Right, Some(Vertical::Down)) => Direction::DownRight,
        }
    }

    pub fn horizontal(self) -> Option<Horizontal> {
        match self {
            Direction::Left | Direction::UpLeft | Direction::DownLeft => Some(Horizontal::Left),
            Direction::Right | Direction::UpRight | Direction::DownRight => {
                Some(Horizontal::Right)
            }
            Direction::Up | Direction::Down => None,
        }
    }

    pub fn vertical(self) -> Option<Vertical> {
        match self {
            Direction::Up | Direction::UpLeft | Direction::UpRight => Some(Vertical::Up),
            Direction::Down | Direction::DownLeft | Direction::DownRight => Some(Vertical::Down),
            Direction::Left | Direction::Right => None,
        }
    }

    /// LEFT for the left-going family, RIGHT for everything else.
    pub fn general_horizontal(self) -> Horizontal {
        self.horizontal().unwrap_or(Horizontal::Right)
    }

    pub fn is_diagonal(self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }

    /// Whether the ball may legally carry this direction.
    pub fn is_ball_direction(self) -> bool {
        self.horizontal().is_some()
    }

    /// Mirror the vertical component.
    ///
    /// Pure LEFT/RIGHT gain a downward component, as when bouncing off the top.
    pub fn reflect_vertical(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft | Direction::Left => Direction::DownLeft,
            Direction::UpRight | Direction::Right => Direction::DownRight,
            Direction::DownLeft => Direction::UpLeft,
            Direction::DownRight => Direction::UpRight,
        }
    }

    /// Mirror the horizontal component.
    pub fn reflect_horizontal(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::UpRight,
            Direction::UpRight => Direction::UpLeft,
            Direction::DownLeft => Direction::DownRight,
            Direction::DownRight => Direction::DownLeft,
            Direction::Up | Direction::Down => self,
        }
    }

    /// Unit advance from `(x, y)`; `None` for UP/DOWN, which never move the ball.
    pub fn step(self, x: i32, y: i32) -> Option<(i32, i32)> {
        let dx = match self.horizontal()? {
            Horizontal::Left => -1,
            Horizontal::Right => 1,
        };
        let dy = match self.vertical() {
            Some(Vertical::Up) => -1,
            Some(Vertical::Down) => 1,
            None => 0,
        };
        Some((x + dx, y + dy))
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::UpLeft => "UP_LEFT",
            Direction::UpRight => "UP_RIGHT",
            Direction::DownLeft => "DOWN_LEFT",
            Direction::DownRight => "DOWN_RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A request to move the human-controlled paddle by one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleIntent {
    MoveUp,
    MoveDown,
}

#[cfg(test)]
mod direction_tests {
    use super::*;

    #[test]
    fn general_horizontal_groups_left_family() {
        assert_eq!(Direction::Left.general_horizontal(), Horizontal::Left);
        assert_eq!(Direction::UpLeft.general_horizontal(), Horizontal::Left);
        assert_eq!(Direction::DownLeft.general_horizontal(), Horizontal::Left);
        assert_eq!(Direction::Right.general_horizontal(), Horizontal::Right);
        assert_eq!(Direction::Up.general_horizontal(), Horizontal::Right);
        assert_eq!(Direction::Down.general_horizontal(), Horizontal::Right);
    }

    #[test]
    fn reflect_vertical_sends_horizontal_downward() {
        assert_eq!(Direction::Left.reflect_vertical(), Direction::DownLeft);
        assert_eq!(Direction::Right.reflect_vertical(), Direction::DownRight);
        assert_eq!(Direction::UpRight.reflect_vertical(), Direction::DownRight);
    }

    #[test]
    fn reflections_are_involutions_on_ball_directions() {
        for d in Direction::DIAGONALS {
            assert_eq!(d.reflect_vertical().reflect_vertical(), d);
        }
        for d in Direction::ALL {
            assert_eq!(d.reflect_horizontal().reflect_horizontal(), d);
        }
    }

    #[test]
    fn step_moves_one_cell() {
        assert_eq!(Direction::Left.step(5, 5), Some((4, 5)));
        assert_eq!(Direction::Right.step(5, 5), Some((6, 5)));
        assert_eq!(Direction::DownLeft.step(5, 5), Some((4, 6)));
        assert_eq!(Direction::UpRight.step(5, 5), Some((6, 4)));
        assert_eq!(Direction::Up.step(5, 5), None);
        assert_eq!(Direction::Down.step(5, 5), None);
    }

    #[test]
    fn compose_round_trips_components() {
        for d in Direction::ALL.into_iter().filter(|d| d.is_ball_direction()) {
            let h = d.horizontal().unwrap();
            assert_eq!(Direction::compose(h, d.vertical()), d);
        }
    }

    #[test]
    fn display_uses_upper_snake_case() {
        assert_eq!(Direction::DownRight.to_string(), "DOWN_RIGHT");
        assert_eq!(Direction::Up.to_string(), "UP");
    }
}
