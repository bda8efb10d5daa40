//! Wires the ticker, the input task and the coordinator together.

use std::sync::mpsc;

use anyhow::{Context, Result};
use log::{info, warn};

use tui_pong_input::EventSource;
use tui_pong_term::Screen;

use crate::config::PongConfig;
use crate::coordinator::Coordinator;
use crate::event::GameEvent;
use crate::input_task::spawn_input;
use crate::ticker::spawn_ticker;

/// Play one game on `screen` until the player quits.
///
/// Both helper tasks share one rendezvous channel: an event is handed over
/// only when the coordinator is ready for it, so at most one tick or key is
/// processed per frame. The screen is left for the caller to tear down.
pub fn run_session<S, E>(screen: &mut S, source: E, config: &PongConfig) -> Result<()>
where
    S: Screen + ?Sized,
    E: EventSource + 'static,
{
    let seed = config.resolve_seed();
    let (tx, rx) = mpsc::sync_channel::<GameEvent>(0);

    let ticker = spawn_ticker(config.tick_period, tx.clone()).context("failed to spawn ticker")?;
    spawn_input(source, tx).context("failed to spawn input task")?;

    let result = Coordinator::new(screen, seed).run(&rx);
    drop(rx);

    match ticker.join() {
        Ok(ticks) => info!("ticker delivered {} ticks", ticks),
        Err(_) => warn!("ticker thread panicked"),
    }
    result
}
