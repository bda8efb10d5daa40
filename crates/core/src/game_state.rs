//! Game state and the per-tick simulation.

use log::{debug, error, info};

use crate::ai::tracking_span;
use crate::arena::Arena;
use crate::ball::{Ball, DirectionError};
use crate::collision::{self, Contact};
use crate::paddle::Paddle;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Horizontal, PaddleIntent, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub score: u32,
    pub paddle: Paddle,
}

impl Player {
    fn new(paddle: Paddle) -> Self {
        Self { score: 0, paddle }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Ball frozen by the serve lock.
    Frozen,
    Moved,
    /// `Side` scored and the ball was reset for a new serve.
    Scored(Side),
}

/// Complete game state, owned by a single coordinator.
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    left: Player,
    right: Player,
    ball: Ball,
    tick_count: u64,
    rng: SimpleRng,
}

impl GameState {
    /// Start a game: ball at the centre with a random diagonal and no lock,
    /// both paddles centred.
    pub fn new(arena: Arena, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let ball = Ball::new(arena.mid_x, arena.mid_y, rng.random_diagonal(), 0);
        let left = Paddle::centered(arena.left + 1, &arena);
        let right = Paddle::centered(arena.right - 1, &arena);
        Self::assemble(arena, ball, left, right, rng)
    }

    /// Build a state from explicit parts, e.g. to replay a known position.
    pub fn from_parts(arena: Arena, ball: Ball, left: Paddle, right: Paddle, seed: u32) -> Self {
        Self::assemble(arena, ball, left, right, SimpleRng::new(seed))
    }

    fn assemble(arena: Arena, ball: Ball, left: Paddle, right: Paddle, rng: SimpleRng) -> Self {
        Self {
            arena,
            left: Player::new(left),
            right: Player::new(right),
            ball,
            tick_count: 0,
            rng,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn left(&self) -> &Player {
        &self.left
    }

    pub fn right(&self) -> &Player {
        &self.right
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.arena = self.arena;
        out.ball = self.ball;
        out.left_paddle = self.left.paddle;
        out.right_paddle = self.right.paddle;
        out.left_score = self.left.score;
        out.right_score = self.right.score;
        out.tick_count = self.tick_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            arena: self.arena,
            ball: self.ball,
            left_paddle: self.left.paddle,
            right_paddle: self.right.paddle,
            left_score: self.left.score,
            right_score: self.right.score,
            tick_count: self.tick_count,
        }
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count += 1;

        if self.ball.is_locked() {
            self.ball.tick_lock();
            if !self.ball.is_locked() {
                debug!("serve released toward {}", self.ball.dir);
            }
            return TickOutcome::Frozen;
        }

        if !self.ball.dir.is_ball_direction() {
            let err = DirectionError { dir: self.ball.dir };
            self.ball.dir = self.rng.random_diagonal();
            error!("{}; coerced to {}", err, self.ball.dir);
        }

        let from = self.ball.dir;
        let paddle = match from.general_horizontal() {
            Horizontal::Left => &self.left.paddle,
            Horizontal::Right => &self.right.paddle,
        };
        if let Some(deflection) = collision::resolve(&self.ball, paddle, &self.arena) {
            if let Contact::Paddle { away } = deflection.contact {
                debug!(
                    "paddle contact at x: {} y: {} (paddle {}..={}), sent {:?}",
                    self.ball.x, self.ball.y, paddle.y_top, paddle.y_bot, away
                );
            }
            self.ball.dir = deflection.dir;
        }

        if let Err(err) = self.ball.advance() {
            error!("{}; ball held in place", err);
            return TickOutcome::Frozen;
        }
        debug!(
            "direction {} -> {} at x: {} y: {}",
            from, self.ball.dir, self.ball.x, self.ball.y
        );

        if self.ball.x <= self.arena.left {
            self.right.score += 1;
            self.score_point(Side::Right);
            return TickOutcome::Scored(Side::Right);
        }
        if self.ball.x >= self.arena.right {
            self.left.score += 1;
            self.score_point(Side::Left);
            return TickOutcome::Scored(Side::Left);
        }

        TickOutcome::Moved
    }

    fn score_point(&mut self, side: Side) {
        info!(
            "{} player scores, {:03} - {:03}",
            side, self.left.score, self.right.score
        );
        self.ball = Ball::serve(
            self.arena.mid_x,
            self.arena.mid_y,
            self.rng.random_diagonal(),
        );
        info!("serving {} from the centre", self.ball.dir);
    }

    /// Move the human paddle one row, within bounds.
    pub fn apply_intent(&mut self, intent: PaddleIntent) -> bool {
        match intent {
            PaddleIntent::MoveUp => self.left.paddle.move_up(&self.arena),
            PaddleIntent::MoveDown => self.left.paddle.move_down(&self.arena),
        }
    }

    /// Snap the computer paddle onto the ball's row.
    pub fn update_ai(&mut self) {
        let (y_top, y_bot) = tracking_span(self.ball.y, &self.arena);
        self.right.paddle.set_span(y_top, y_bot);
    }

    /// Move the whole game onto a new arena, keeping positions relative to it.
    pub fn relocate(&mut self, arena: Arena) {
        let (dx, dy) = self.arena.offset_to(&arena);
        if dx == 0 && dy == 0 {
            return;
        }
        self.ball.x += dx;
        self.ball.y += dy;
        self.left.paddle.translate(dx, dy);
        self.right.paddle.translate(dx, dy);
        self.arena = arena;
        debug!("relocated arena by ({}, {})", dx, dy);
    }
}
