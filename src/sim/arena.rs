//! The rectangular playing field: four walls and two paddles
//!
//! The arena decides which rectangles a mover can possibly reach this tick,
//! hands them to its [`HitDetector`] and turns "got past a paddle" contacts
//! into rally-ending collisions.

use glam::IVec2;

use super::ball::Ball;
use super::collision::{Collision, HitDetector, SweptAabb};
use super::geometry::{Rect, Side};
use super::paddle::Paddle;
use crate::tuning::Tuning;

/// Walls, paddles and the hit detector used to sweep against them
#[derive(Debug, Clone)]
pub struct Arena<D: HitDetector = SweptAabb> {
    top_wall: Rect,
    left_wall: Rect,
    bottom_wall: Rect,
    right_wall: Rect,
    left_paddle: Paddle,
    right_paddle: Paddle,
    tuning: Tuning,
    detector: D,
}

impl Arena {
    pub fn new(tuning: Tuning) -> Self {
        Self::with_detector(tuning, SweptAabb)
    }
}

impl<D: HitDetector> Arena<D> {
    /// Build the arena around a custom hit detector
    pub fn with_detector(tuning: Tuning, detector: D) -> Self {
        let ex = tuning.environment_x;
        let ey = tuning.environment_y;
        let length = tuning.wall_length;
        let width = tuning.wall_width;

        let top_wall = Rect::new(ex, ey, length, width);
        let left_wall = Rect::new(ex, ey, width, length);
        let right_wall = Rect::new(ex + length - width, ey + width, width, length);
        let bottom_wall = Rect::new(ex, ey + length, length, width);

        // Paddles sit one paddle-width in from the side walls, vertically centred
        let paddle_y = ey + width + (length - width - tuning.paddle_length) / 2;
        let left_paddle = Paddle::new(
            Side::Left,
            Rect::new(
                ex + width + tuning.paddle_width,
                paddle_y,
                tuning.paddle_width,
                tuning.paddle_length,
            ),
        );
        let right_paddle = Paddle::new(
            Side::Right,
            Rect::new(
                ex + length - width - 2 * tuning.paddle_width,
                paddle_y,
                tuning.paddle_width,
                tuning.paddle_length,
            ),
        );

        Self {
            top_wall,
            left_wall,
            bottom_wall,
            right_wall,
            left_paddle,
            right_paddle,
            tuning,
            detector,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Walls in top, left, bottom, right order
    pub fn walls(&self) -> [Rect; 4] {
        [
            self.top_wall,
            self.left_wall,
            self.bottom_wall,
            self.right_wall,
        ]
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Open space enclosed by the walls
    pub fn field(&self) -> Rect {
        Rect::new(
            self.left_wall.right(),
            self.top_wall.bottom(),
            self.right_wall.x - self.left_wall.right(),
            self.bottom_wall.y - self.top_wall.bottom(),
        )
    }

    pub fn center(&self) -> IVec2 {
        self.field().center()
    }

    /// Sweep the ball towards `final_position` and classify the contact
    ///
    /// A contact whose point lies behind a paddle ends the rally in favour of
    /// the other side.
    pub fn ball_collision(&self, ball: &Ball, final_position: IVec2) -> Option<Collision> {
        let travel = final_position - ball.rect().position();
        let candidates = self.ball_obstructions(travel);

        let mut collision =
            self.detector
                .check_obstructions(&candidates, ball.rect(), final_position)?;

        let behind_left = collision.point.x < self.left_paddle.x();
        let behind_right = collision.point.x > self.right_paddle.x();
        if behind_left {
            collision.end_rally(Side::Right);
        } else if behind_right {
            collision.end_rally(Side::Left);
        }

        log::trace!(
            "ball hit {:?} at {} (game ending: {})",
            collision.obstruction,
            collision.point,
            collision.game_ending
        );
        Some(collision)
    }

    /// Whether a wall stops `paddle` from reaching `final_position`
    pub fn paddle_blocked(&self, paddle: &Paddle, final_position: IVec2) -> bool {
        self.paddle_collision(paddle, final_position).is_some()
    }

    /// Move a paddle vertically by `dy`, stopping flush against a wall
    ///
    /// Returns the paddle's new top-left corner.
    pub fn move_paddle(&mut self, side: Side, dy: i32) -> IVec2 {
        let paddle = *self.paddle(side);
        let target = paddle.rect().position() + IVec2::new(0, dy);

        let y = match self.paddle_collision(&paddle, target) {
            Some(contact) => contact.point.y,
            None => target.y,
        };
        let paddle = self.paddle_mut(side);
        paddle.set_y(y);
        paddle.rect().position()
    }

    fn paddle_collision(&self, paddle: &Paddle, final_position: IVec2) -> Option<Collision> {
        let travel = final_position - paddle.rect().position();
        let candidates = self.obstructions(travel);
        self.detector
            .check_obstructions(&candidates, paddle.rect(), final_position)
    }

    /// Everything the ball may strike when travelling along `travel`
    pub fn ball_obstructions(&self, travel: IVec2) -> Vec<Rect> {
        let mut collidable = vec![self.right_paddle.rect(), self.left_paddle.rect()];
        collidable.extend(self.obstructions(travel));
        collidable
    }

    /// Walls ahead of an object travelling along `travel`
    ///
    /// An object inside the arena can only meet the walls it is moving
    /// towards, never the ones behind it.
    pub fn obstructions(&self, travel: IVec2) -> Vec<Rect> {
        let mut collidable = Vec::with_capacity(2);

        if travel.x > 0 {
            collidable.push(self.right_wall);
        } else if travel.x < 0 {
            collidable.push(self.left_wall);
        }

        if travel.y > 0 {
            collidable.push(self.bottom_wall);
        } else if travel.y < 0 {
            collidable.push(self.top_wall);
        }

        collidable
    }
}
