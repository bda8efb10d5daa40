//! Terminal Pong runner (default binary).
//!
//! The left paddle follows the arrow keys, the right paddle follows the ball.
//! ESC or Ctrl-C quits.

use anyhow::{Context, Result};
use log::info;

use tui_pong::engine::{run_session, PongConfig};
use tui_pong::input::CrosstermEvents;
use tui_pong::logging;
use tui_pong::scoped::run_scoped;
use tui_pong::term::CrosstermScreen;

fn main() -> Result<()> {
    let config = PongConfig::from_env();
    logging::init(&config.log_path, &config.log_filter)?;
    info!("starting, config {:?}", config);

    let mut screen = CrosstermScreen::init().context("screen init failed")?;
    run_scoped(&mut screen, |screen| {
        run_session(screen, CrosstermEvents, &config)
    })?;

    info!("clean shutdown");
    log::logger().flush();
    Ok(())
}
