//! The drawing half of the screen contract and its crossterm implementation.

use anyhow::{Context, Result};
use crossterm::terminal;

use crate::fb::{Canvas, Cell, CellStyle, FrameBuffer};
use crate::renderer::TerminalRenderer;

/// A cell-addressable screen owned by the game loop.
///
/// Drawing goes to an in-memory frame; nothing reaches the terminal until
/// [`Screen::show`].
pub trait Screen: Canvas {
    fn size(&self) -> (u16, u16);

    /// Blank the pending frame.
    fn clear(&mut self);

    /// Flush the pending frame to the terminal.
    fn show(&mut self) -> Result<()>;

    /// Re-read the terminal size and force a full redraw on the next `show`.
    fn sync(&mut self) -> Result<()>;

    /// Restore the terminal. Safe to call more than once.
    fn fini(&mut self) -> Result<()>;

    fn disable_mouse(&mut self) -> Result<()>;
}

/// A [`Screen`] on the controlling terminal.
pub struct CrosstermScreen {
    renderer: TerminalRenderer,
    frame: FrameBuffer,
    active: bool,
}

impl CrosstermScreen {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn init() -> Result<Self> {
        let (width, height) = terminal::size().context("failed to query terminal size")?;
        let mut renderer = TerminalRenderer::new();
        renderer
            .enter()
            .context("failed to switch terminal into raw mode")?;
        Ok(Self {
            renderer,
            frame: FrameBuffer::new(width, height),
            active: true,
        })
    }
}

impl Canvas for CrosstermScreen {
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.frame.set_cell(x, y, ch, style);
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    fn clear(&mut self) {
        self.frame.clear(Cell::default());
    }

    fn show(&mut self) -> Result<()> {
        self.renderer.present(&mut self.frame)
    }

    fn sync(&mut self) -> Result<()> {
        let (width, height) = terminal::size().context("failed to query terminal size")?;
        self.frame.resize(width, height);
        self.renderer.invalidate();
        Ok(())
    }

    fn fini(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()
    }

    fn disable_mouse(&mut self) -> Result<()> {
        self.renderer.disable_mouse()
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        let _ = self.fini();
    }
}
