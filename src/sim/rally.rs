//! Headless match loop
//!
//! Owns every piece of mutable game state and advances it one tick at a time:
//! paddles first, then the ball, then scoring.

use glam::IVec2;

use super::ai::ArtificialIntelligence;
use super::arena::Arena;
use super::ball::Ball;
use super::geometry::{Rect, Side};
use crate::tuning::Tuning;

/// Who moves a paddle
#[derive(Debug, Clone)]
pub enum Controller {
    /// Driven by [`TickInput`]
    Human,
    Computer(ArtificialIntelligence),
}

/// Human input for one tick: -1 up, 0 hold, 1 down
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: i8,
    pub right: i8,
}

impl TickInput {
    pub fn direction(&self, side: Side) -> i8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Ball bounced off a wall or paddle
    Rebound { obstruction: Rect, point: IVec2 },
    /// Ball got past a paddle
    RallyEnded { winner: Side },
    /// A player reached the winning score
    MatchOver { winner: Side },
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct Match {
    arena: Arena,
    ball: Ball,
    left: Controller,
    right: Controller,
    score: Score,
    ticks: u64,
    winner: Option<Side>,
}

impl Match {
    /// Computer against computer, serving toward the right
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let left = Controller::Computer(ArtificialIntelligence::new(1, &tuning));
        let right = Controller::Computer(ArtificialIntelligence::new(1, &tuning));
        Self::with_controllers(tuning, seed, left, right)
    }

    pub fn with_controllers(
        tuning: Tuning,
        seed: u64,
        left: Controller,
        right: Controller,
    ) -> Self {
        let arena = Arena::new(tuning);
        let ball = Ball::for_arena(&arena, seed);
        log::info!("Match initialized with seed: {}", seed);
        Self {
            arena,
            ball,
            left,
            right,
            score: Score::new(),
            ticks: 0,
            winner: None,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Advance the match by one tick
    pub fn tick(&mut self, input: &TickInput) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.ticks += 1;

        let speed = self.arena.tuning().paddle_speed;
        for side in [Side::Left, Side::Right] {
            let controller = match side {
                Side::Left => &mut self.left,
                Side::Right => &mut self.right,
            };
            let dy = match controller {
                Controller::Human => i32::from(input.direction(side).signum()),
                Controller::Computer(ai) => {
                    // Only chase a ball that is coming this way
                    if self.ball.heading() == Some(side) {
                        ai.predict_next_y(&self.ball, &self.arena);
                        ai.get_move(self.arena.paddle(side)).dy()
                    } else {
                        0
                    }
                }
            };
            if dy != 0 {
                self.arena.move_paddle(side, dy * speed);
            }
        }

        let Some(collision) = self.ball.advance(&self.arena) else {
            return events;
        };

        match collision.winner {
            Some(winner) if collision.game_ending => {
                self.score.increment(winner);
                log::info!(
                    "{} wins the rally ({} - {})",
                    winner.as_str(),
                    self.score.left,
                    self.score.right
                );
                events.push(TickEvent::RallyEnded { winner });

                if let Some(champion) = self.score.winner(self.arena.tuning().win_score) {
                    log::info!("{} wins the match after {} ticks", champion.as_str(), self.ticks);
                    self.winner = Some(champion);
                    events.push(TickEvent::MatchOver { winner: champion });
                } else {
                    self.ball.initialise_rally(winner);
                }
            }
            _ => {
                log::debug!("rebound off {:?} at {}", collision.obstruction, collision.point);
                events.push(TickEvent::Rebound {
                    obstruction: collision.obstruction,
                    point: collision.point,
                });
            }
        }

        events
    }
}
