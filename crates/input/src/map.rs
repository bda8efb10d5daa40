//! Mapping from terminal events to game input.

use crate::types::PaddleIntent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    Up,
    Down,
    Escape,
    Interrupt,
}

impl KeyInput {
    /// Paddle movement for this key, if any.
    pub fn intent(self) -> Option<PaddleIntent> {
        match self {
            KeyInput::Up => Some(PaddleIntent::MoveUp),
            KeyInput::Down => Some(PaddleIntent::MoveDown),
            KeyInput::Escape | KeyInput::Interrupt => None,
        }
    }
}

/// A polled screen event, reduced to what the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenEvent {
    Resize(u16, u16),
    Key(KeyInput),
    Other,
}

/// Map a key press to game input.
pub fn map_key(key: KeyEvent) -> Option<KeyInput> {
    if should_quit(key) {
        return Some(if key.code == KeyCode::Esc {
            KeyInput::Escape
        } else {
            KeyInput::Interrupt
        });
    }

    match key.code {
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Reduce a crossterm event. Key releases are ignored; auto-repeat counts as a press.
pub fn map_event(event: Event) -> ScreenEvent {
    match event {
        Event::Resize(w, h) => ScreenEvent::Resize(w, h),
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            map_key(key).map_or(ScreenEvent::Other, ScreenEvent::Key)
        }
        _ => ScreenEvent::Other,
    }
}
