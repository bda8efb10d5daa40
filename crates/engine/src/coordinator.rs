//! The single owner of the game state.
//!
//! One iteration: wait for exactly one event, apply it, let the computer
//! paddle follow the ball, then redraw and flush the frame.

use std::sync::mpsc::Receiver;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use tui_pong_core::{Arena, ArenaError, GameState, TickOutcome};
use tui_pong_term::{GameView, Screen};

use crate::event::GameEvent;

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Coordinator<'s, S: Screen + ?Sized> {
    screen: &'s mut S,
    state: GameState,
    view: GameView,
    /// Why the court cannot be drawn right now, if it cannot.
    unfit: Option<ArenaError>,
    last_tick: Option<u64>,
}

impl<'s, S: Screen + ?Sized> Coordinator<'s, S> {
    /// Start a fresh game laid out for the screen's current size.
    pub fn new(screen: &'s mut S, seed: u32) -> Self {
        let (width, height) = screen.size();
        let state = GameState::new(Arena::layout(width, height), seed);
        Self::with_state(screen, state)
    }

    /// Drive an existing game on `screen`.
    pub fn with_state(screen: &'s mut S, state: GameState) -> Self {
        let (width, height) = screen.size();
        let unfit = Arena::new(width, height).err();
        if let Some(err) = unfit {
            warn!("{}; court hidden until the terminal grows", err);
        }
        Self {
            screen,
            state,
            view: GameView::default(),
            unfit,
            last_tick: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_drawable(&self) -> bool {
        self.unfit.is_none()
    }

    /// Draw the opening frame and run until shutdown or until every event
    /// source has hung up.
    pub fn run(&mut self, events: &Receiver<GameEvent>) -> Result<()> {
        self.screen
            .disable_mouse()
            .context("failed to disable mouse capture")?;
        self.state.update_ai();
        self.present()?;

        info!(
            "game loop started, arena {:?}, seed {}",
            self.state.arena(),
            self.state.seed()
        );

        while let Ok(event) = events.recv() {
            if self.handle(event)? == Flow::Exit {
                return Ok(());
            }
        }
        info!("event sources closed, leaving game loop");
        Ok(())
    }

    /// Apply one event and redraw.
    pub fn handle(&mut self, event: GameEvent) -> Result<Flow> {
        match event {
            GameEvent::Tick(index) => self.on_tick(index),
            GameEvent::Key(intent) => {
                if !self.state.apply_intent(intent) {
                    debug!("paddle already at the border, {:?} ignored", intent);
                }
            }
            GameEvent::Resize(width, height) => self.on_resize(width, height)?,
            GameEvent::Shutdown(reason) => {
                info!(
                    "shutdown requested ({:?}) after {} ticks, score {:03} - {:03}",
                    reason,
                    self.state.tick_count(),
                    self.state.left().score,
                    self.state.right().score
                );
                return Ok(Flow::Exit);
            }
        }

        self.state.update_ai();
        self.present()?;
        Ok(Flow::Continue)
    }

    fn on_tick(&mut self, index: u64) {
        if let Some(last) = self.last_tick {
            if index <= last {
                warn!("tick {} arrived after tick {}, dropped", index, last);
                return;
            }
        }
        self.last_tick = Some(index);

        if let TickOutcome::Scored(side) = self.state.tick() {
            debug!("tick {}: {} side scored", index, side);
        }
    }

    fn on_resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.screen.sync().context("failed to resync screen")?;
        self.state.relocate(Arena::layout(width, height));

        self.unfit = Arena::new(width, height).err();
        match self.unfit {
            Some(err) => warn!("{}; court hidden until the terminal grows", err),
            None => info!("resized to {}x{}", width, height),
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.screen.clear();
        match self.unfit {
            None => self.view.render(&self.state.snapshot(), &mut *self.screen),
            Some(err) => {
                let (width, height) = self.screen.size();
                self.view
                    .render_too_small(&err, width, height, &mut *self.screen);
            }
        }
        self.screen.show().context("failed to flush frame")
    }
}
