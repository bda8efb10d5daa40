//! Collision resolution against the walls and the paddle the ball is heading toward.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. **Wall**: the ball is on the row next to the top or bottom border.
//!    Its vertical component is mirrored so it heads back into the arena;
//!    a purely horizontal ball picks up the component pointing away from
//!    the wall.
//! 2. **Paddle**: the ball is in a column next to the paddle and within its
//!    rows. The centre row returns the ball straight back; elsewhere a
//!    diagonal keeps its vertical component and a horizontal ball is sent
//!    up or down depending on which half of the paddle it struck.
//! 3. Otherwise nothing happens.

use crate::arena::Arena;
use crate::ball::Ball;
use crate::paddle::Paddle;
use crate::types::{Direction, Horizontal, Vertical};

/// What the ball touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    TopWall,
    BottomWall,
    /// A paddle; `away` is the horizontal direction the ball leaves in.
    Paddle { away: Horizontal },
}

/// Result of a collision: what was hit and the ball's new direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deflection {
    pub contact: Contact,
    pub dir: Direction,
}

/// Resolve the contact for `ball` this tick, if any.
pub fn resolve(ball: &Ball, paddle: &Paddle, arena: &Arena) -> Option<Deflection> {
    if ball.y == arena.top + 1 {
        return Some(Deflection {
            contact: Contact::TopWall,
            dir: bounce_off_wall(ball.dir, Vertical::Down),
        });
    }
    if ball.y == arena.bottom - 1 {
        return Some(Deflection {
            contact: Contact::BottomWall,
            dir: bounce_off_wall(ball.dir, Vertical::Up),
        });
    }

    let away = paddle_contact(ball, paddle)?;
    Some(Deflection {
        contact: Contact::Paddle { away },
        dir: paddle_deflection(ball, paddle, away),
    })
}

/// `inward` is the vertical direction pointing back into the arena.
fn bounce_off_wall(dir: Direction, inward: Vertical) -> Direction {
    match (dir.horizontal(), dir.vertical()) {
        (Some(_), Some(v)) if v == inward => dir,
        (Some(h), None) => Direction::compose(h, Some(inward)),
        _ => dir.reflect_vertical(),
    }
}

/// The side the ball leaves toward, when it is touching `paddle`.
fn paddle_contact(ball: &Ball, paddle: &Paddle) -> Option<Horizontal> {
    if !paddle.covers_row(ball.y) {
        return None;
    }
    if ball.x == paddle.x + 1 {
        Some(Horizontal::Right)
    } else if ball.x == paddle.x - 1 {
        Some(Horizontal::Left)
    } else {
        None
    }
}

fn paddle_deflection(ball: &Ball, paddle: &Paddle, away: Horizontal) -> Direction {
    let mid = paddle.mid_row();
    if ball.y == mid {
        return Direction::compose(away, None);
    }
    if ball.dir.is_diagonal() {
        return Direction::compose(away, ball.dir.vertical());
    }
    let v = if ball.y > mid {
        Vertical::Down
    } else {
        Vertical::Up
    };
    Direction::compose(away, Some(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::from_origin(1, 1)
    }

    fn left_paddle() -> Paddle {
        Paddle::new(2, 20)
    }

    fn right_paddle() -> Paddle {
        Paddle::new(110, 20)
    }

    #[test]
    fn top_wall_mirrors_upward_diagonal() {
        let ball = Ball::new(50, 2, Direction::UpRight, 0);
        let d = resolve(&ball, &right_paddle(), &arena()).unwrap();
        assert_eq!(d.contact, Contact::TopWall);
        assert_eq!(d.dir, Direction::DownRight);
    }

    #[test]
    fn bottom_wall_mirrors_downward_diagonal() {
        let ball = Ball::new(50, 40, Direction::DownLeft, 0);
        let d = resolve(&ball, &left_paddle(), &arena()).unwrap();
        assert_eq!(d.contact, Contact::BottomWall);
        assert_eq!(d.dir, Direction::UpLeft);
    }

    #[test]
    fn horizontal_ball_leaves_wall_rows_inward() {
        let top = Ball::new(50, 2, Direction::Left, 0);
        assert_eq!(
            resolve(&top, &left_paddle(), &arena()).unwrap().dir,
            Direction::DownLeft
        );
        let bottom = Ball::new(50, 40, Direction::Left, 0);
        assert_eq!(
            resolve(&bottom, &left_paddle(), &arena()).unwrap().dir,
            Direction::UpLeft
        );
    }

    #[test]
    fn wall_rule_wins_over_paddle() {
        let paddle = Paddle::new(2, 2);
        let ball = Ball::new(3, 2, Direction::UpLeft, 0);
        let d = resolve(&ball, &paddle, &arena()).unwrap();
        assert_eq!(d.contact, Contact::TopWall);
        assert_eq!(d.dir, Direction::DownLeft);
    }

    #[test]
    fn paddle_centre_returns_ball_straight() {
        let ball = Ball::new(3, 22, Direction::DownLeft, 0);
        let d = resolve(&ball, &left_paddle(), &arena()).unwrap();
        assert_eq!(d.contact, Contact::Paddle {
            away: Horizontal::Right
        });
        assert_eq!(d.dir, Direction::Right);

        let ball = Ball::new(109, 22, Direction::UpRight, 0);
        assert_eq!(
            resolve(&ball, &right_paddle(), &arena()).unwrap().dir,
            Direction::Left
        );
    }

    #[test]
    fn horizontal_ball_upper_half_goes_up() {
        let ball = Ball::new(3, 21, Direction::Left, 0);
        let d = resolve(&ball, &left_paddle(), &arena()).unwrap();
        assert_eq!(d.dir, Direction::UpRight);
    }

    #[test]
    fn horizontal_ball_lower_half_goes_down() {
        let ball = Ball::new(3, 23, Direction::Left, 0);
        assert_eq!(
            resolve(&ball, &left_paddle(), &arena()).unwrap().dir,
            Direction::DownRight
        );
        let ball = Ball::new(109, 23, Direction::Right, 0);
        assert_eq!(
            resolve(&ball, &right_paddle(), &arena()).unwrap().dir,
            Direction::DownLeft
        );
    }

    #[test]
    fn diagonal_keeps_vertical_component() {
        let ball = Ball::new(3, 20, Direction::DownLeft, 0);
        assert_eq!(
            resolve(&ball, &left_paddle(), &arena()).unwrap().dir,
            Direction::DownRight
        );
        let ball = Ball::new(109, 23, Direction::UpRight, 0);
        assert_eq!(
            resolve(&ball, &right_paddle(), &arena()).unwrap().dir,
            Direction::UpLeft
        );
    }

    #[test]
    fn misses_outside_paddle_rows_or_columns() {
        let ball = Ball::new(3, 24, Direction::Left, 0);
        assert_eq!(resolve(&ball, &left_paddle(), &arena()), None);
        let ball = Ball::new(4, 21, Direction::Left, 0);
        assert_eq!(resolve(&ball, &left_paddle(), &arena()), None);
        // Sitting in the paddle column itself is not a contact.
        let ball = Ball::new(110, 21, Direction::Right, 0);
        assert_eq!(resolve(&ball, &right_paddle(), &arena()), None);
    }
}
