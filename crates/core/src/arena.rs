//! Arena geometry derived from the terminal size.

use std::fmt;

use crate::types::{INNER_HEIGHT, INNER_WIDTH, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

/// The rectangle the game is played in, in screen cells.
///
/// `top`/`bottom`/`left`/`right` are the border rows and columns; play
/// happens strictly inside them. Recomputed only when the terminal resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arena {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub mid_x: i32,
    pub mid_y: i32,
}

/// Terminal too small to draw the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    TooSmall { width: u16, height: u16 },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::TooSmall { width, height } => write!(
                f,
                "terminal is {}x{}, need at least {}x{}",
                width, height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
            ),
        }
    }
}

impl std::error::Error for ArenaError {}

impl Arena {
    /// Validate the terminal size and lay out the arena.
    pub fn new(width: u16, height: u16) -> Result<Self, ArenaError> {
        if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
            return Err(ArenaError::TooSmall { width, height });
        }
        Ok(Self::layout(width, height))
    }

    /// Lay out the arena around the terminal centre without any size check.
    ///
    /// The simulation keeps running on this geometry while the terminal is
    /// too small to draw it.
    pub fn layout(width: u16, height: u16) -> Self {
        let mid_x = width as i32 / 2;
        let mid_y = height as i32 / 2;
        Self {
            top: mid_y - INNER_HEIGHT / 2,
            bottom: mid_y + INNER_HEIGHT / 2,
            left: mid_x - INNER_WIDTH / 2,
            right: mid_x + INNER_WIDTH / 2,
            mid_x,
            mid_y,
        }
    }

    /// Build an arena from its top-left border corner.
    pub fn from_origin(left: i32, top: i32) -> Self {
        Self {
            top,
            bottom: top + INNER_HEIGHT,
            left,
            right: left + INNER_WIDTH,
            mid_x: left + INNER_WIDTH / 2,
            mid_y: top + INNER_HEIGHT / 2,
        }
    }

    /// Whether `(x, y)` lies strictly inside the borders.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left < x && x < self.right && self.top < y && y < self.bottom
    }

    /// Offset that moves this arena onto `other`.
    pub fn offset_to(&self, other: &Arena) -> (i32, i32) {
        (other.left - self.left, other.top - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centres_fixed_inner_size() {
        let a = Arena::layout(200, 80);
        assert_eq!(a.mid_x, 100);
        assert_eq!(a.mid_y, 40);
        assert_eq!(a.left, 45);
        assert_eq!(a.right, 155);
        assert_eq!(a.top, 20);
        assert_eq!(a.bottom, 60);
        assert_eq!(a.right - a.left, INNER_WIDTH);
        assert_eq!(a.bottom - a.top, INNER_HEIGHT);
    }

    #[test]
    fn new_rejects_small_terminals() {
        assert_eq!(
            Arena::new(149, 60),
            Err(ArenaError::TooSmall {
                width: 149,
                height: 60
            })
        );
        assert!(Arena::new(150, 59).is_err());
        assert!(Arena::new(150, 60).is_ok());
    }

    #[test]
    fn from_origin_matches_literal_scenario_arena() {
        let a = Arena::from_origin(1, 1);
        assert_eq!((a.top, a.bottom, a.left, a.right), (1, 41, 1, 111));
        assert_eq!((a.mid_x, a.mid_y), (56, 21));
    }

    #[test]
    fn contains_is_strict() {
        let a = Arena::from_origin(1, 1);
        assert!(a.contains(2, 2));
        assert!(!a.contains(1, 2));
        assert!(!a.contains(2, 41));
    }

    #[test]
    fn too_small_message_names_both_sizes() {
        let msg = ArenaError::TooSmall {
            width: 80,
            height: 24,
        }
        .to_string();
        assert!(msg.contains("80x24"));
        assert!(msg.contains("150x60"));
    }
}
