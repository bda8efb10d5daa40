//! The input source: turns polled screen events into game events.

use std::io;
use std::sync::mpsc::SyncSender;
use std::thread::{self, JoinHandle};

use log::{debug, error};
use tui_pong_input::{EventSource, KeyInput, ScreenEvent};

use crate::event::{GameEvent, ShutdownReason};

/// Spawn the input thread.
///
/// The thread spends most of its life blocked in `poll_event`, so callers
/// do not join it; it exits on the first event after the receiver is gone.
pub fn spawn_input<E>(source: E, tx: SyncSender<GameEvent>) -> io::Result<JoinHandle<()>>
where
    E: EventSource + 'static,
{
    thread::Builder::new()
        .name("pong-input".to_string())
        .spawn(move || pump_events(source, &tx))
}

/// Forward events until a quit key, a source error, or a closed channel.
pub fn pump_events<E: EventSource>(mut source: E, tx: &SyncSender<GameEvent>) {
    loop {
        let event = match source.poll_event() {
            Ok(event) => event,
            Err(err) => {
                error!("input source failed: {:#}", err);
                let _ = tx.send(GameEvent::Shutdown(ShutdownReason::InputFailed));
                return;
            }
        };

        let Some(out) = translate(event) else {
            continue;
        };
        let is_shutdown = matches!(out, GameEvent::Shutdown(_));
        if tx.send(out).is_err() {
            debug!("input task stopped, coordinator is gone");
            return;
        }
        if is_shutdown {
            return;
        }
    }
}

fn translate(event: ScreenEvent) -> Option<GameEvent> {
    match event {
        ScreenEvent::Resize(w, h) => Some(GameEvent::Resize(w, h)),
        ScreenEvent::Key(key) => Some(match key {
            KeyInput::Escape => GameEvent::Shutdown(ShutdownReason::Escape),
            KeyInput::Interrupt => GameEvent::Shutdown(ShutdownReason::Interrupt),
            KeyInput::Up | KeyInput::Down => GameEvent::Key(key.intent()?),
        }),
        ScreenEvent::Other => None,
    }
}
