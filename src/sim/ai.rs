//! Opponent AI
//!
//! Predicts where the ball will next come to rest by running a private copy
//! of it through the same physics, then steers the paddle towards that row.

use glam::IVec2;

use super::arena::Arena;
use super::ball::Ball;
use super::collision::{Collision, HitDetector};
use super::geometry::Rect;
use super::paddle::Paddle;
use crate::tuning::Tuning;

/// Paddle instruction produced by the AI
///
/// The discriminants are the raw decision values: `-1` when the predicted
/// row is below the paddle, `1` when above, `0` when already covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum PaddleMove {
    Down = -1,
    Stay = 0,
    Up = 1,
}

impl PaddleMove {
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Vertical step direction in arena coordinates (y grows downward)
    pub fn dy(self) -> i32 {
        match self {
            PaddleMove::Down => 1,
            PaddleMove::Stay => 0,
            PaddleMove::Up => -1,
        }
    }
}

/// Outcome of one shadow simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    /// Row of the shadow ball once the contact has been resolved
    pub y: i32,
    /// Where the shadow ball ended up
    pub position: IVec2,
    /// Ticks simulated until the contact
    pub steps: u32,
    /// The contact that stopped the simulation
    pub collision: Collision,
}

/// Computer-controlled opponent
#[derive(Debug, Clone)]
pub struct ArtificialIntelligence {
    /// Difficulty, stored for future tuning; does not affect decisions
    level: u8,
    next_y: i32,
    /// Legal paddle travel region
    paddle_space: Rect,
    ball_dimension: i32,
    /// Upper bound on shadow ticks (arena diagonal at one pixel per tick)
    max_steps: u32,
}

impl ArtificialIntelligence {
    pub fn new(level: u8, tuning: &Tuning) -> Self {
        Self {
            level,
            next_y: tuning.environment_y + tuning.wall_length / 2,
            paddle_space: Rect::new(
                tuning.environment_x,
                tuning.environment_y,
                tuning.wall_width + tuning.paddle_width * 2,
                tuning.wall_length,
            ),
            ball_dimension: tuning.ball_dimension,
            max_steps: tuning.arena_diagonal(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Most recent predicted row
    pub fn next_y(&self) -> i32 {
        self.next_y
    }

    pub fn paddle_space(&self) -> Rect {
        self.paddle_space
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Simulate a copy of `ball` until its next contact and remember its row
    ///
    /// The live ball is only read. Returns `None`, keeping the previous
    /// prediction, when the ball is not moving or no contact happens within
    /// [`Self::max_steps`] ticks.
    pub fn predict_next_y<D: HitDetector>(
        &mut self,
        ball: &Ball,
        arena: &Arena<D>,
    ) -> Option<Prediction> {
        if ball.is_stationary() {
            log::debug!("ball is stationary, keeping prediction y={}", self.next_y);
            return None;
        }

        let mut shadow = ball.clone();
        for steps in 1..=self.max_steps {
            if let Some(collision) = shadow.advance(arena) {
                self.next_y = shadow.position().y;
                log::debug!(
                    "predicted y={} after {} steps (level {})",
                    self.next_y,
                    steps,
                    self.level
                );
                return Some(Prediction {
                    y: self.next_y,
                    position: shadow.position(),
                    steps,
                    collision,
                });
            }
        }

        log::warn!(
            "no contact within {} steps from {}, keeping prediction y={}",
            self.max_steps,
            ball.position(),
            self.next_y
        );
        None
    }

    /// Steer `paddle` towards the last predicted row
    pub fn get_move(&self, paddle: &Paddle) -> PaddleMove {
        let paddle = paddle.rect();
        let is_below = self.next_y >= paddle.bottom() - self.ball_dimension;
        let is_above = self.next_y <= paddle.y;

        if is_below {
            PaddleMove::Down
        } else if is_above {
            PaddleMove::Up
        } else {
            PaddleMove::Stay
        }
    }
}
