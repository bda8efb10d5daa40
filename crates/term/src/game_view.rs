//! GameView: draws a [`GameSnapshot`] onto any [`Canvas`].
//!
//! This module is pure (no I/O). It can be unit-tested against a
//! [`FrameBuffer`].

use crate::core::{ArenaError, GameSnapshot, Paddle};
use crate::fb::{Canvas, CellStyle, FrameBuffer, Rgb};

pub const GLYPH_HLINE: char = '─';
pub const GLYPH_VLINE: char = '│';
pub const GLYPH_UL_CORNER: char = '┌';
pub const GLYPH_UR_CORNER: char = '┐';
pub const GLYPH_LL_CORNER: char = '└';
pub const GLYPH_LR_CORNER: char = '┘';
pub const GLYPH_PADDLE: char = '█';
pub const GLYPH_BALL: char = '◆';

/// Rows between the bottom border and the score label.
const SCORE_GAP: i32 = 2;
/// Column of the left counter relative to the arena centre.
const LEFT_SCORE_DX: i32 = -8;
/// Column of the right counter relative to the arena centre.
const RIGHT_SCORE_DX: i32 = 6;
/// Counters are zero-padded to this many digits.
const SCORE_DIGITS: usize = 3;

/// Renderer for the Pong court.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    border: CellStyle,
    paddle: CellStyle,
    ball: CellStyle,
    label: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        let white = CellStyle::fg(Rgb::new(255, 255, 255));
        Self {
            border: white,
            paddle: white,
            ball: white,
            label: white.bold(),
            text: white,
        }
    }
}

impl GameView {
    /// Score, border, ball and both paddles, in that order.
    pub fn render<C: Canvas + ?Sized>(&self, snap: &GameSnapshot, canvas: &mut C) {
        self.draw_score(snap, canvas);
        self.draw_border(snap, canvas);
        canvas.set_cell(snap.ball.x, snap.ball.y, GLYPH_BALL, self.ball);
        self.draw_paddle(&snap.left_paddle, canvas);
        self.draw_paddle(&snap.right_paddle, canvas);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render_to_buffer(&self, snap: &GameSnapshot, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        self.render(snap, &mut fb);
        fb
    }

    /// A one-line notice shown instead of the court when the terminal is too small.
    pub fn render_too_small<C: Canvas + ?Sized>(
        &self,
        err: &ArenaError,
        width: u16,
        height: u16,
        canvas: &mut C,
    ) {
        let msg = format!("window too small: {}", err);
        let len = msg.chars().count() as i32;
        let x = (width as i32 - len).max(0) / 2;
        canvas.put_str(x, height as i32 / 2, &msg, self.text);
    }

    fn draw_score<C: Canvas + ?Sized>(&self, snap: &GameSnapshot, canvas: &mut C) {
        let arena = &snap.arena;
        let y = arena.bottom + SCORE_GAP;
        canvas.put_str(arena.mid_x - 2, y, "SCORE", self.label);
        put_counter(canvas, arena.mid_x + LEFT_SCORE_DX, y + 1, snap.left_score, self.text);
        put_counter(canvas, arena.mid_x + RIGHT_SCORE_DX, y + 1, snap.right_score, self.text);
    }

    fn draw_border<C: Canvas + ?Sized>(&self, snap: &GameSnapshot, canvas: &mut C) {
        let a = &snap.arena;
        let style = self.border;

        for x in a.left..=a.right {
            canvas.set_cell(x, a.top, GLYPH_HLINE, style);
            canvas.set_cell(x, a.bottom, GLYPH_HLINE, style);
        }
        for y in a.top..=a.bottom {
            canvas.set_cell(a.left, y, GLYPH_VLINE, style);
            canvas.set_cell(a.right, y, GLYPH_VLINE, style);
        }

        canvas.set_cell(a.left, a.top, GLYPH_UL_CORNER, style);
        canvas.set_cell(a.right, a.top, GLYPH_UR_CORNER, style);
        canvas.set_cell(a.left, a.bottom, GLYPH_LL_CORNER, style);
        canvas.set_cell(a.right, a.bottom, GLYPH_LR_CORNER, style);
    }

    fn draw_paddle<C: Canvas + ?Sized>(&self, paddle: &Paddle, canvas: &mut C) {
        for y in paddle.y_top..=paddle.y_bot {
            canvas.set_cell(paddle.x, y, GLYPH_PADDLE, self.paddle);
        }
    }
}

/// Zero-padded decimal counter, written without allocating.
fn put_counter<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, value: u32, style: CellStyle) {
    let mut digits = [b'0'; 10];
    let mut n = value;
    let mut len = 0;
    loop {
        digits[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
        if n == 0 {
            break;
        }
    }
    let len = len.max(SCORE_DIGITS);
    for i in 0..len {
        canvas.set_cell(x + i as i32, y, digits[len - 1 - i] as char, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_pads_to_three_digits() {
        let mut fb = FrameBuffer::new(6, 1);
        put_counter(&mut fb, 0, 0, 7, CellStyle::default());
        assert_eq!(fb.row_text(0), "007   ");
        put_counter(&mut fb, 0, 0, 1234, CellStyle::default());
        assert_eq!(fb.row_text(0), "1234  ");
    }

    #[test]
    fn too_small_notice_is_centred() {
        let err = ArenaError::TooSmall {
            width: 80,
            height: 24,
        };
        let mut fb = FrameBuffer::new(80, 24);
        GameView::default().render_too_small(&err, 80, 24, &mut fb);
        let row = fb.row_text(12);
        assert!(row.contains("window too small: terminal is 80x24, need at least 150x60"));
        assert!(row.starts_with(' '));
    }
}
