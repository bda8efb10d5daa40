//! The ball: a position, a direction and a serve lock.

use std::fmt;

use crate::types::{Direction, LOCK_TICKS};

/// The ball was found carrying a direction it can never legally hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionError {
    pub dir: Direction,
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ball cannot travel {}", self.dir)
    }
}

impl std::error::Error for DirectionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dir: Direction,
    /// Remaining serve ticks; the ball is frozen while this is non-zero.
    pub lock: u32,
}

impl Ball {
    pub fn new(x: i32, y: i32, dir: Direction, lock: u32) -> Self {
        Self { x, y, dir, lock }
    }

    /// A ball waiting at `(x, y)` to be served.
    pub fn serve(x: i32, y: i32, dir: Direction) -> Self {
        Self::new(x, y, dir, LOCK_TICKS)
    }

    pub fn is_locked(&self) -> bool {
        self.lock > 0
    }

    pub fn tick_lock(&mut self) {
        self.lock = self.lock.saturating_sub(1);
    }

    /// Move one cell along `dir`. Collisions must already be resolved.
    pub fn advance(&mut self) -> Result<(), DirectionError> {
        let (x, y) = self
            .dir
            .step(self.x, self.y)
            .ok_or(DirectionError { dir: self.dir })?;
        self.x = x;
        self.y = y;
        Ok(())
    }
}
