use crate::arena::Arena;
use crate::ball::Ball;
use crate::paddle::Paddle;

/// Read-only copy of everything the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub arena: Arena,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub tick_count: u64,
}
