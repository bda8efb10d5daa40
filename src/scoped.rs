//! Runs a game body with the screen released on every exit path.

use std::panic::{self, AssertUnwindSafe};

use anyhow::{Context, Result};
use log::error;

use tui_pong_term::Screen;

/// Run `body` on `screen`, then tear the screen down before reporting.
///
/// `fini` runs whether `body` returns `Ok`, returns `Err` or panics. A panic
/// is logged, echoed to stderr and resumed once the terminal is restored.
/// An error from `body` takes precedence over a failed teardown.
pub fn run_scoped<S, F>(screen: &mut S, body: F) -> Result<()>
where
    S: Screen + ?Sized,
    F: FnOnce(&mut S) -> Result<()>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&mut *screen)));

    let teardown = screen.fini();
    log::logger().flush();

    match outcome {
        Ok(result) => {
            if let Err(err) = &result {
                error!("game loop failed: {:#}", err);
            }
            result?;
            teardown.context("failed to restore terminal")
        }
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                .unwrap_or("non-string panic payload");
            error!("panic in game loop: {}", msg);
            eprintln!("panic in game loop: {}", msg);
            log::logger().flush();
            panic::resume_unwind(payload)
        }
    }
}
