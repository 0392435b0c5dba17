//! The ball: one discrete step per tick and rebound resolution
//!
//! Horizontal speed is fractional because paddle rebounds accelerate it by a
//! multiplicative factor; vertical speed is integral because paddle rebounds
//! re-roll it. Positions are always integral, so the horizontal speed is
//! truncated whenever it is applied.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::collision::{Collision, HitDetector};
use super::geometry::{Rect, Side};
use crate::tuning::Tuning;

/// The ball
///
/// `Clone` yields a fully independent copy, rebound RNG included, which is
/// what the AI runs its shadow simulation on.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    rect: Rect,
    x_speed: f64,
    y_speed: i32,
    /// Where a new rally starts
    serve_point: IVec2,
    rebound_factor: f64,
    max_vertical_speed: i32,
    rng: Pcg32,
}

impl Ball {
    /// Create a ball at `position` heading right at one pixel per tick
    pub fn new(position: IVec2, tuning: &Tuning, seed: u64) -> Self {
        Self {
            rect: Rect::new(
                position.x,
                position.y,
                tuning.ball_dimension,
                tuning.ball_dimension,
            ),
            x_speed: 1.0,
            y_speed: 0,
            serve_point: position,
            rebound_factor: tuning.paddle_rebound_factor,
            max_vertical_speed: tuning.max_vertical_speed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a ball centred in `arena`, served from there on every rally
    pub fn for_arena<D: HitDetector>(arena: &Arena<D>, seed: u64) -> Self {
        let half = arena.tuning().ball_dimension / 2;
        Self::new(arena.center() - IVec2::splat(half), arena.tuning(), seed)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> IVec2 {
        self.rect.position()
    }

    pub fn x_speed(&self) -> f64 {
        self.x_speed
    }

    pub fn y_speed(&self) -> i32 {
        self.y_speed
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.rect.set_position(position);
    }

    pub fn set_x_speed(&mut self, x_speed: f64) {
        self.x_speed = x_speed;
    }

    pub fn set_y_speed(&mut self, y_speed: i32) {
        self.y_speed = y_speed;
    }

    /// Per-tick displacement with the horizontal speed truncated
    pub fn velocity(&self) -> IVec2 {
        IVec2::new(self.x_speed as i32, self.y_speed)
    }

    /// No horizontal speed: the rally has not started or has just ended
    pub fn is_stationary(&self) -> bool {
        self.x_speed == 0.0
    }

    /// Side the ball is travelling towards, if any
    pub fn heading(&self) -> Option<Side> {
        if self.x_speed > 0.0 {
            Some(Side::Right)
        } else if self.x_speed < 0.0 {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Advance the ball one tick through `arena`
    ///
    /// Returns the contact made this tick. A rally-ending contact leaves the
    /// ball frozen at the point of the miss; any other contact rebounds it.
    pub fn advance<D: HitDetector>(&mut self, arena: &Arena<D>) -> Option<Collision> {
        if self.is_stationary() {
            return None;
        }

        let start = self.position();
        let next = start + self.velocity();

        let collision = arena.ball_collision(self, next);
        match collision {
            None => self.set_position(next),
            Some(hit) if hit.game_ending => {
                self.set_position(hit.point);
                self.x_speed = 0.0;
                self.y_speed = 0;
            }
            Some(hit) => {
                self.ricochet(&hit);
                // Rebounded velocity is applied from where the tick started
                let x = (f64::from(start.x) + self.x_speed) as i32;
                self.set_position(IVec2::new(x, start.y + self.y_speed));
            }
        }
        collision
    }

    /// Decide how the ball's velocity changes after striking an obstruction
    pub fn ricochet(&mut self, collision: &Collision) {
        let point = collision.point;
        let obstruction = collision.obstruction;

        let within_x = (obstruction.x - self.rect.width..=obstruction.right()).contains(&point.x);
        let within_y =
            (obstruction.y - self.rect.height..=obstruction.bottom()).contains(&point.y);

        let above = within_x && point.y <= obstruction.y;
        let below = within_x && point.y >= obstruction.bottom();
        let right = within_y && point.x >= obstruction.right();
        // Gated on within_x, unlike `right`. Kept as is: corner hits near an
        // obstruction's left edge classify through this.
        let left = within_x && point.x <= obstruction.x;

        self.set_position(point);

        let vertical = above || below;
        let horizontal = right || left;
        if vertical && horizontal {
            self.rebound_off_paddle();
        } else if vertical {
            self.rebound_off_wall();
        } else if horizontal {
            self.rebound_off_paddle();
        }
    }

    /// Reverse and accelerate horizontally, re-roll the vertical speed
    fn rebound_off_paddle(&mut self) {
        self.x_speed *= -self.rebound_factor;

        let magnitude = self.rng.random_range(0..self.max_vertical_speed);
        self.y_speed = match self.y_speed.signum() {
            1 => magnitude,
            -1 => -magnitude,
            _ if self.rng.random_bool(0.5) => magnitude,
            _ => -magnitude,
        };
    }

    pub fn rebound_off_wall(&mut self) {
        self.y_speed = -self.y_speed;
    }

    /// Serve again, heading towards the side that lost the last point
    pub fn initialise_rally(&mut self, last_winner: Side) {
        self.set_position(self.serve_point);
        self.y_speed = 0;
        self.x_speed = match last_winner {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
    }
}
