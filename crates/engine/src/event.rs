use tui_pong_types::PaddleIntent;

/// Everything the coordinator can be woken up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ticker fired; the index increases by one per delivered tick.
    Tick(u64),
    Key(PaddleIntent),
    /// Terminal resized to `(width, height)`.
    Resize(u16, u16),
    Shutdown(ShutdownReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Escape,
    Interrupt,
    InputFailed,
}
