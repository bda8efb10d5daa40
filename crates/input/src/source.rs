//! Blocking event sources polled by the input task.

use anyhow::{Context, Result};
use crossterm::event;

use crate::map::{map_event, ScreenEvent};

/// The event-polling half of the screen contract.
///
/// `poll_event` blocks until the terminal delivers something.
pub trait EventSource: Send {
    fn poll_event(&mut self) -> Result<ScreenEvent>;
}

/// Reads events from the controlling terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self) -> Result<ScreenEvent> {
        let ev = event::read().context("failed to read terminal event")?;
        Ok(map_event(ev))
    }
}
