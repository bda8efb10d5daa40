//! Paddles: a fixed column and a vertical span.

use crate::arena::Arena;
use crate::types::PADDLE_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    pub y_top: i32,
    pub y_bot: i32,
    pub x: i32,
}

impl Paddle {
    pub fn new(x: i32, y_top: i32) -> Self {
        Self {
            y_top,
            y_bot: y_top + PADDLE_HEIGHT - 1,
            x,
        }
    }

    /// A paddle in column `x`, vertically centred in the arena.
    pub fn centered(x: i32, arena: &Arena) -> Self {
        Self::new(x, arena.mid_y - PADDLE_HEIGHT / 2)
    }

    /// Move up one row unless already touching the top border.
    pub fn move_up(&mut self, arena: &Arena) -> bool {
        if self.y_top > arena.top + 1 {
            self.y_top -= 1;
            self.y_bot -= 1;
            return true;
        }
        false
    }

    /// Move down one row unless already touching the bottom border.
    pub fn move_down(&mut self, arena: &Arena) -> bool {
        if self.y_bot < arena.bottom - 1 {
            self.y_top += 1;
            self.y_bot += 1;
            return true;
        }
        false
    }

    /// Place the paddle at an exact span. Callers keep it in bounds.
    pub fn set_span(&mut self, y_top: i32, y_bot: i32) {
        debug_assert_eq!(y_bot - y_top, PADDLE_HEIGHT - 1);
        self.y_top = y_top;
        self.y_bot = y_bot;
    }

    pub fn covers_row(&self, y: i32) -> bool {
        self.y_top <= y && y <= self.y_bot
    }

    /// Row treated as the centre of the paddle: half the span, rounded up.
    pub fn mid_row(&self) -> i32 {
        self.y_top + (self.y_bot - self.y_top + 1) / 2
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y_top += dy;
        self.y_bot += dy;
    }
}
