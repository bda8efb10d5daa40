//! The tick source.

use std::io;
use std::sync::mpsc::SyncSender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

use crate::event::GameEvent;

/// Spawn a thread that sleeps `period` and then hands the coordinator the
/// next tick index.
///
/// Over a rendezvous channel the send blocks until the coordinator is ready,
/// so a slow frame delays the following tick instead of queueing ticks.
/// The thread exits once the receiver is gone.
pub fn spawn_ticker(period: Duration, tx: SyncSender<GameEvent>) -> io::Result<JoinHandle<u64>> {
    thread::Builder::new()
        .name("pong-ticker".to_string())
        .spawn(move || run_ticker(period, &tx))
}

/// Returns the number of ticks delivered.
pub fn run_ticker(period: Duration, tx: &SyncSender<GameEvent>) -> u64 {
    let mut index: u64 = 0;
    loop {
        thread::sleep(period);
        if tx.send(GameEvent::Tick(index)).is_err() {
            debug!("ticker stopped after {} ticks", index);
            return index;
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn ticks_are_numbered_in_order_and_stop_with_receiver() {
        let (tx, rx) = mpsc::sync_channel(0);
        let handle = spawn_ticker(Duration::from_millis(1), tx).unwrap();

        let seen: Vec<_> = rx.iter().take(3).collect();
        assert_eq!(
            seen,
            vec![GameEvent::Tick(0), GameEvent::Tick(1), GameEvent::Tick(2)]
        );

        drop(rx);
        assert_eq!(handle.join().unwrap(), 3);
    }
}
