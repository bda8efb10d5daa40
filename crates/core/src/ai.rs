//! Tracking policy for the computer-controlled paddle.
//!
//! The paddle simply follows the ball's row, clamped so it never touches
//! the borders.

use crate::arena::Arena;
use crate::types::PADDLE_HEIGHT;

/// Span `(y_top, y_bot)` that keeps the ball two rows below the paddle top.
pub fn tracking_span(ball_y: i32, arena: &Arena) -> (i32, i32) {
    let y_top = ball_y - 2;
    let y_bot = ball_y + 1;

    if y_top <= arena.top + 1 {
        (arena.top + 1, arena.top + PADDLE_HEIGHT)
    } else if y_bot >= arena.bottom - 1 {
        (arena.bottom - PADDLE_HEIGHT, arena.bottom - 1)
    } else {
        (y_top, y_bot)
    }
}
